//! HTTP layer for chatrelay.
//!
//! Axum-based JSON API with CORS and request tracing. All internal
//! failures collapse to an opaque 500 at this boundary.

pub mod error;
pub mod handlers;
pub mod router;
