//! Usage statistics derived from translation history.
//!
//! [`aggregate`] is a pure reduction over history records: no I/O, safe to
//! recompute on every request. Ordering rules:
//!
//! - Top languages are sorted by count, descending. The sort is stable, so
//!   equal counts keep first-encounter order and the favorite language is
//!   the first-encountered of the tied labels.
//! - Monthly buckets are keyed by short month name and returned in calendar
//!   order (Jan to Dec).

use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;

use crate::language::resolve_label;
use crate::types::Timestamp;

/// Number of entries in [`UsageStatistics::top_languages`].
pub const TOP_LANGUAGE_LIMIT: usize = 5;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Anything that looks like a history record for the purpose of statistics.
pub trait TranslationRecord {
    fn original_text(&self) -> &str;
    fn target_lang(&self) -> &str;
    /// `None` when the record has no usable timestamp.
    fn recorded_at(&self) -> Option<Timestamp>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyWords {
    pub name: String,
    pub words: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageStatistics {
    pub total_translations: usize,
    pub words_translated: usize,
    pub favorite_language: Option<String>,
    pub top_languages: Vec<LanguageCount>,
    pub monthly_words: Vec<MonthlyWords>,
}

/// Number of whitespace-delimited tokens. Empty or blank text counts 0.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reduce history records into display metrics.
pub fn aggregate<T: TranslationRecord>(records: &[T]) -> UsageStatistics {
    let mut words_translated = 0;
    let mut languages: IndexMap<&str, usize> = IndexMap::new();
    let mut months: [Option<usize>; 12] = [None; 12];

    for record in records {
        let words = word_count(record.original_text());
        words_translated += words;

        *languages
            .entry(resolve_label(record.target_lang()))
            .or_insert(0) += 1;

        if let Some(ts) = record.recorded_at() {
            let bucket = &mut months[ts.month0() as usize];
            *bucket = Some(bucket.unwrap_or(0) + words);
        }
    }

    let mut ranked: Vec<LanguageCount> = languages
        .into_iter()
        .map(|(name, count)| LanguageCount {
            name: name.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_LANGUAGE_LIMIT);

    let monthly_words = months
        .iter()
        .zip(MONTH_NAMES)
        .filter_map(|(words, name)| {
            words.map(|words| MonthlyWords {
                name: name.to_string(),
                words,
            })
        })
        .collect();

    UsageStatistics {
        total_translations: records.len(),
        words_translated,
        favorite_language: ranked.first().map(|l| l.name.clone()),
        top_languages: ranked,
        monthly_words,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
