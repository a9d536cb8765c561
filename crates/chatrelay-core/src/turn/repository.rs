//! TurnRepository trait definition.
//!
//! Persistence operations over the external `chat_history` table.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).
//!
//! Implementations live in chatrelay-infra (e.g., `MysqlTurnRepository`).

use chatrelay_types::error::RepositoryError;
use chatrelay_types::turn::ChatTurn;

/// Repository trait for chat turn persistence.
pub trait TurnRepository: Send + Sync {
    /// Maximum existing turn id, or `0` when the table is empty.
    ///
    /// Implemented as "last row ordered descending, limit one".
    fn last_turn_id(
        &self,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;

    /// Insert a new turn row. Returns the number of rows affected; the
    /// caller is responsible for treating anything other than one as a
    /// persistence failure.
    fn insert_turn(
        &self,
        turn: &ChatTurn,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Every persisted turn, in whatever order the store returns by default.
    fn list_turns(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatTurn>, RepositoryError>> + Send;
}
