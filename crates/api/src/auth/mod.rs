//! Authentication primitives.
//!
//! Accounts live with an external identity provider. The API only verifies
//! the HS256 access tokens it issues (see [`jwt`]).

pub mod jwt;
