//! Shared domain types for chatrelay.
//!
//! This crate contains the core domain types used across the relay:
//! ChatTurn, the completion request/response shapes, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod completion;
pub mod error;
pub mod turn;
