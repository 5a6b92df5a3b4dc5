//! Domain core for the LinguaWise translation service.
//!
//! Holds everything that does not touch the network or the database
//! directly: value types, validation, the translation orchestrator, the
//! usage statistics aggregator, and the optimistic collection view used by
//! clients. The generative backend is reached only through the
//! [`backend::GenerativeBackend`] trait so the orchestrator can be driven by
//! any implementation (HTTP client in production, stubs in tests).

pub mod backend;
pub mod error;
pub mod language;
pub mod orchestrator;
pub mod search;
pub mod statistics;
pub mod translation;
pub mod types;
pub mod view;
