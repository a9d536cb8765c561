//! Request handlers.

pub mod turn;
