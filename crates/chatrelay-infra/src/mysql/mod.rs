//! MySQL storage adapters.

pub mod pool;
pub mod turn;
