//! CompletionProvider trait definition.
//!
//! The abstraction over the hosted language-model service. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition).
//!
//! Implementations live in chatrelay-infra (e.g., `AzureOpenAiProvider`).

use chatrelay_types::completion::{CompletionRequest, CompletionResponse};
use chatrelay_types::error::CompletionError;

/// Trait for completion provider backends.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "azure-openai").
    fn name(&self) -> &str;

    /// Send a role-tagged message list and receive one completion.
    ///
    /// `CompletionResponse.content` is `None` when the provider returned
    /// no extractable content; the caller decides what to substitute.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, CompletionError>> + Send;
}
