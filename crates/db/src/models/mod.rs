//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create (or upsert) DTO for writes

pub mod dictionary;
pub mod favorite;
pub mod history;
pub mod settings;
