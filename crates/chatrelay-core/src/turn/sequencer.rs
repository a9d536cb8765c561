//! Turn sequencer: id assignment and turn persistence.
//!
//! The sequencer is the only component here with a correctness contract:
//! it computes the next turn id from the store's current maximum, asks the
//! completion provider for a response, and writes the new row. It is
//! generic over `TurnRepository` and `CompletionProvider` so chatrelay-core
//! never depends on chatrelay-infra.

use tracing::{info, warn};

use chatrelay_types::completion::{CompletionRequest, Message};
use chatrelay_types::error::{CompletionError, RepositoryError};
use chatrelay_types::turn::ChatTurn;

use crate::completion::CompletionProvider;
use crate::turn::repository::TurnRepository;

/// System instruction sent ahead of every user message.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Substituted when the provider returns a choice with no content.
pub const NO_RESPONSE_FALLBACK: &str = "No response";

/// Result of a successful submission: the assigned id and the completion
/// text that was persisted alongside the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTurn {
    pub id: i64,
    pub response: String,
}

/// Errors from the submit and list operations.
#[derive(Debug, thiserror::Error)]
pub enum SequencerError {
    #[error(transparent)]
    Store(#[from] RepositoryError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The insert affected a row count other than one. The completion was
    /// already generated at this point and is discarded, not retried.
    #[error("insert affected {rows} rows, expected exactly 1")]
    PersistenceMismatch { rows: u64 },
}

/// Assigns the next turn id and persists new turns.
///
/// Id assignment is read-then-write: each submission re-reads the current
/// maximum id before inserting, with no transaction spanning the two
/// queries. Two submissions interleaved between the read and the write can
/// both observe the same maximum and insert the same id. This matches the
/// observable behavior of the system this relay replaces and is kept as a
/// documented defect rather than closed with an atomic sequence.
pub struct TurnSequencer<R: TurnRepository, P: CompletionProvider> {
    repo: R,
    provider: P,
}

impl<R: TurnRepository, P: CompletionProvider> TurnSequencer<R, P> {
    /// Create a new sequencer over the given repository and provider.
    pub fn new(repo: R, provider: P) -> Self {
        Self { repo, provider }
    }

    /// Submit one user input: assign the next id, fetch a completion,
    /// persist the turn, and return the pair the caller responds with.
    ///
    /// Fails without persisting anything if the id read or the provider
    /// call fails. Fails after generating a completion (which is then
    /// lost) if the insert does not affect exactly one row.
    pub async fn submit(&self, user_text: &str) -> Result<SubmittedTurn, SequencerError> {
        let last_id = self.repo.last_turn_id().await?;

        let request = CompletionRequest {
            messages: vec![Message::system(SYSTEM_INSTRUCTION), Message::user(user_text)],
        };
        let completion = self.provider.complete(&request).await?;

        // Explicit substitution, not falsy coercion: a missing choice or a
        // choice without content both persist the fixed fallback text.
        let gpt = match completion.content {
            Some(content) => content,
            None => {
                warn!(provider = self.provider.name(), "completion had no content, using fallback");
                NO_RESPONSE_FALLBACK.to_string()
            }
        };

        let turn = ChatTurn {
            id: last_id + 1,
            you: user_text.to_string(),
            gpt,
        };

        let rows = self.repo.insert_turn(&turn).await?;
        if rows != 1 {
            return Err(SequencerError::PersistenceMismatch { rows });
        }

        info!(turn_id = turn.id, "chat turn persisted");
        Ok(SubmittedTurn {
            id: turn.id,
            response: turn.gpt,
        })
    }

    /// Every persisted turn, unfiltered and unpaginated. Read-only.
    pub async fn list_all(&self) -> Result<Vec<ChatTurn>, SequencerError> {
        Ok(self.repo.list_turns().await?)
    }
}
