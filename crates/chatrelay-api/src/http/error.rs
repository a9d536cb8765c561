//! Application error type mapping to HTTP responses.
//!
//! Every internal failure becomes an opaque "Internal Server Error": the
//! client cannot distinguish a database outage from a provider outage.
//! The two routes differ only in body shape -- the history endpoint
//! answers with plain text, the chat endpoint with a minimal JSON error
//! payload. Details go to the log, not the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use chatrelay_core::turn::SequencerError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// History listing failed; answered as 500 with a plain-text body.
    History(SequencerError),
    /// Chat submission failed; answered as 500 with `{"error": ...}`.
    Chat(SequencerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::History(err) => {
                tracing::error!(error = %err, "failed to list chat history");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            AppError::Chat(err) => {
                tracing::error!(error = %err, "failed to submit chat turn");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use chatrelay_types::error::{CompletionError, RepositoryError};

    #[tokio::test]
    async fn test_history_error_is_plain_text_500() {
        let resp =
            AppError::History(SequencerError::Store(RepositoryError::Connection)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let content_type = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }

    #[tokio::test]
    async fn test_chat_error_is_json_500() {
        let resp = AppError::Chat(SequencerError::Completion(CompletionError::RateLimited))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_chat_error_hides_internal_detail() {
        let resp = AppError::Chat(SequencerError::Store(RepositoryError::Query(
            "table 'chat_history' doesn't exist".to_string(),
        )))
        .into_response();

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("chat_history"));
    }
}
