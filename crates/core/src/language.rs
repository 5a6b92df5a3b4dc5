//! Supported languages and translation tones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

/// A selectable language: ISO 639-1 code plus English display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

/// Languages offered in the translator and settings pickers.
pub const LANGUAGES: &[Language] = &[
    Language { code: "en", label: "English" },
    Language { code: "es", label: "Spanish" },
    Language { code: "fr", label: "French" },
    Language { code: "de", label: "German" },
    Language { code: "it", label: "Italian" },
    Language { code: "pt", label: "Portuguese" },
    Language { code: "ja", label: "Japanese" },
    Language { code: "ko", label: "Korean" },
    Language { code: "zh", label: "Chinese (Simplified)" },
    Language { code: "ru", label: "Russian" },
];

/// Look up a language by code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Resolve a language code to its display label, falling back to the raw
/// code when the language is not in the catalogue.
pub fn resolve_label(code: &str) -> &str {
    find_language(code).map_or(code, |l| l.label)
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Register of the translated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Informal,
    Technical,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Formal, Tone::Informal, Tone::Technical, Tone::Casual];

    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Informal => "informal",
            Tone::Technical => "technical",
            Tone::Casual => "casual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Informal => "Informal",
            Tone::Technical => "Technical",
            Tone::Casual => "Casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid tone '{s}'. Valid tones: {}",
                    Tone::ALL.map(Tone::as_str).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
