//! Infrastructure layer for chatrelay.
//!
//! Contains implementations of the port traits defined in `chatrelay-core`:
//! MySQL storage via sqlx and the Azure OpenAI completion provider via
//! async-openai, plus the environment configuration loader.

pub mod config;
pub mod llm;
pub mod mysql;
