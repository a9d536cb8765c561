//! Business logic and port trait definitions for chatrelay.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements. It depends only on `chatrelay-types` --
//! never on `chatrelay-infra` or any database/HTTP crate.

pub mod completion;
pub mod turn;
