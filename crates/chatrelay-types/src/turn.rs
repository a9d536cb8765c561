//! Chat turn domain type.

use serde::{Deserialize, Serialize};

/// One persisted conversation turn: the user's input paired with the
/// generated response, plus its sequence identifier.
///
/// Maps 1:1 onto a row of the external `chat_history` table. Turns are
/// created by the submit operation and immutable thereafter; this system
/// never updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Intended unique sequence number of the turn.
    pub id: i64,
    /// The user's submitted input.
    pub you: String,
    /// The provider's completion response.
    pub gpt: String,
}
