//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! `&PgPool` first and the owning `user_id` second. No method reads or
//! writes rows belonging to a different user.

pub mod dictionary_repo;
pub mod favorite_repo;
pub mod history_repo;
pub mod settings_repo;

pub use dictionary_repo::DictionaryRepo;
pub use favorite_repo::FavoriteRepo;
pub use history_repo::HistoryRepo;
pub use settings_repo::SettingsRepo;
