//! Chat turn handlers: history listing and submission.
//!
//! Field names on the wire (`inputText`, `lastMessageId`) are part of the
//! relay's external contract and kept verbatim.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use chatrelay_types::turn::ChatTurn;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for submitting one chat turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "inputText")]
    pub input_text: String,
}

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(rename = "lastMessageId")]
    pub last_message_id: i64,
}

/// GET /api - List every persisted turn.
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    let turns = state.sequencer.list_all().await.map_err(AppError::History)?;
    Ok(Json(turns))
}

/// POST /api/chat - Submit one user input and return the completion.
pub async fn submit_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let turn = state
        .sequencer
        .submit(&body.input_text)
        .await
        .map_err(AppError::Chat)?;

    Ok(Json(ChatResponse {
        response: turn.response,
        last_message_id: turn.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_uses_wire_field_name() {
        let body: ChatRequest = serde_json::from_str(r#"{"inputText": "hello"}"#).unwrap();
        assert_eq!(body.input_text, "hello");
    }

    #[test]
    fn test_chat_request_rejects_missing_field() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"text": "hello"}"#).is_err());
    }

    #[test]
    fn test_chat_response_wire_shape() {
        let resp = ChatResponse {
            response: "hi there".to_string(),
            last_message_id: 1,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["response"], "hi there");
        assert_eq!(json["lastMessageId"], 1);
    }
}
