//! Repository tests against a real PostgreSQL database.
//!
//! Each test gets a fresh, migrated database from `#[sqlx::test]`.

use chrono::Utc;
use linguawise_core::language::Tone;
use linguawise_core::search::contains_pattern;
use linguawise_db::models::dictionary::CreateDictionaryEntry;
use linguawise_db::models::favorite::CreateFavorite;
use linguawise_db::models::history::CreateHistoryItem;
use linguawise_db::models::settings::UpsertSettings;
use linguawise_db::repositories::{DictionaryRepo, FavoriteRepo, HistoryRepo, SettingsRepo};
use sqlx::PgPool;

const ALICE: &str = "alice-uid";
const BOB: &str = "bob-uid";

fn history(original: &str, translated: &str, target: &str) -> CreateHistoryItem {
    CreateHistoryItem {
        original_text: original.to_string(),
        translated_text: translated.to_string(),
        source_lang: "en".to_string(),
        target_lang: target.to_string(),
        tone: "formal".to_string(),
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn history_is_listed_newest_first_and_scoped_to_owner(pool: PgPool) {
    let first = HistoryRepo::create(&pool, ALICE, &history("Hello", "Hola", "es"))
        .await
        .unwrap();
    let second = HistoryRepo::create(&pool, ALICE, &history("Thanks", "Merci", "fr"))
        .await
        .unwrap();
    HistoryRepo::create(&pool, BOB, &history("Bye", "Adiós", "es"))
        .await
        .unwrap();

    let items = HistoryRepo::list_for_user(&pool, ALICE, None, 50, 0)
        .await
        .unwrap();

    let ids: Vec<_> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(items.iter().all(|i| i.user_id == ALICE));
}

#[sqlx::test(migrations = "./migrations")]
async fn history_search_matches_either_text(pool: PgPool) {
    HistoryRepo::create(&pool, ALICE, &history("Good morning", "Buenos días", "es"))
        .await
        .unwrap();
    HistoryRepo::create(&pool, ALICE, &history("Good night", "Bonne nuit", "fr"))
        .await
        .unwrap();

    let pattern = contains_pattern("BUENOS");
    let items = HistoryRepo::list_for_user(&pool, ALICE, pattern.as_deref(), 50, 0)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].translated_text, "Buenos días");

    let pattern = contains_pattern("good");
    let items = HistoryRepo::list_for_user(&pool, ALICE, pattern.as_deref(), 50, 0)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn history_delete_cannot_touch_other_users_rows(pool: PgPool) {
    let item = HistoryRepo::create(&pool, ALICE, &history("Hello", "Hola", "es"))
        .await
        .unwrap();

    assert!(!HistoryRepo::delete(&pool, BOB, item.id).await.unwrap());
    assert!(HistoryRepo::find_by_id(&pool, ALICE, item.id)
        .await
        .unwrap()
        .is_some());

    assert!(HistoryRepo::delete(&pool, ALICE, item.id).await.unwrap());
    assert!(HistoryRepo::find_by_id(&pool, ALICE, item.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn history_bulk_delete_only_clears_owner(pool: PgPool) {
    for text in ["one", "two", "three"] {
        HistoryRepo::create(&pool, ALICE, &history(text, text, "es"))
            .await
            .unwrap();
    }
    HistoryRepo::create(&pool, BOB, &history("keep", "keep", "es"))
        .await
        .unwrap();

    let removed = HistoryRepo::delete_all_for_user(&pool, ALICE).await.unwrap();

    assert_eq!(removed, 3);
    assert!(HistoryRepo::list_all_for_user(&pool, ALICE)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        HistoryRepo::list_all_for_user(&pool, BOB).await.unwrap().len(),
        1
    );
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn favorite_derived_from_history_keeps_content(pool: PgPool) {
    let item = HistoryRepo::create(&pool, ALICE, &history("Hello", "Hola", "es"))
        .await
        .unwrap();
    let now = Utc::now();

    let favorite = FavoriteRepo::create(&pool, ALICE, &CreateFavorite::from_history(&item, now))
        .await
        .unwrap();

    assert_eq!(favorite.original_text, item.original_text);
    assert_eq!(favorite.translated_text, item.translated_text);
    assert_eq!(favorite.source_lang, item.source_lang);
    assert_eq!(favorite.target_lang, item.target_lang);
    assert_eq!(favorite.tone, item.tone);
    assert_ne!(favorite.favorited_at, item.timestamp);

    let listed = FavoriteRepo::list_for_user(&pool, ALICE, None, 50, 0).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(FavoriteRepo::list_for_user(&pool, BOB, None, 50, 0)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn favorite_delete_is_scoped(pool: PgPool) {
    let input = CreateFavorite {
        original_text: "Cheers".into(),
        translated_text: "Salud".into(),
        source_lang: "en".into(),
        target_lang: "es".into(),
        tone: "casual".into(),
        favorited_at: None,
    };
    let favorite = FavoriteRepo::create(&pool, ALICE, &input).await.unwrap();

    assert!(!FavoriteRepo::delete(&pool, BOB, favorite.id).await.unwrap());
    assert!(FavoriteRepo::delete(&pool, ALICE, favorite.id).await.unwrap());
    assert!(!FavoriteRepo::delete(&pool, ALICE, favorite.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn favorite_search_matches_either_text(pool: PgPool) {
    for (original, translated) in [("Good night", "Buenas noches"), ("Thanks", "Gracias")] {
        let item = HistoryRepo::create(&pool, ALICE, &history(original, translated, "es"))
            .await
            .unwrap();
        FavoriteRepo::create(&pool, ALICE, &CreateFavorite::from_history(&item, Utc::now()))
            .await
            .unwrap();
    }

    let pattern = contains_pattern("noches");
    let found = FavoriteRepo::list_for_user(&pool, ALICE, pattern.as_deref(), 50, 0)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].original_text, "Good night");

    let pattern = contains_pattern("THANKS");
    let found = FavoriteRepo::list_for_user(&pool, ALICE, pattern.as_deref(), 50, 0)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].translated_text, "Gracias");
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn dictionary_crud_and_count(pool: PgPool) {
    let entry = DictionaryRepo::create(
        &pool,
        ALICE,
        &CreateDictionaryEntry {
            term: "Prototype".into(),
            translation: "Prototipo".into(),
            context: "An early sample of a product.".into(),
            language: "Spanish".into(),
        },
    )
    .await
    .unwrap();
    DictionaryRepo::create(
        &pool,
        ALICE,
        &CreateDictionaryEntry {
            term: "Backend".into(),
            translation: "Backend".into(),
            context: String::new(),
            language: "German".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(DictionaryRepo::count_for_user(&pool, ALICE).await.unwrap(), 2);
    assert_eq!(DictionaryRepo::count_for_user(&pool, BOB).await.unwrap(), 0);

    let pattern = contains_pattern("proto");
    let found = DictionaryRepo::list_for_user(&pool, ALICE, pattern.as_deref(), 50, 0)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, entry.id);

    assert!(DictionaryRepo::delete(&pool, ALICE, entry.id).await.unwrap());
    assert_eq!(DictionaryRepo::count_for_user(&pool, ALICE).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn settings_default_then_merge(pool: PgPool) {
    let defaults = SettingsRepo::get_or_default(&pool, ALICE).await.unwrap();
    assert_eq!(defaults.default_target_language, "es");
    assert!(SettingsRepo::find(&pool, ALICE).await.unwrap().is_none());

    let saved = SettingsRepo::upsert(
        &pool,
        ALICE,
        &UpsertSettings {
            default_tone: Some(Tone::Technical),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(saved.default_tone, "technical");
    assert_eq!(saved.native_language, defaults.native_language);
    assert_eq!(saved.default_target_language, defaults.default_target_language);
    assert!(saved.save_history);

    let merged = SettingsRepo::upsert(
        &pool,
        ALICE,
        &UpsertSettings {
            save_history: Some(false),
            default_target_language: Some("ja".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(merged.default_tone, "technical");
    assert_eq!(merged.default_target_language, "ja");
    assert!(!merged.save_history);

    let other = SettingsRepo::get_or_default(&pool, BOB).await.unwrap();
    assert!(other.save_history);
}
