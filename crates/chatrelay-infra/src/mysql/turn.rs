//! MySQL turn repository implementation.
//!
//! Implements `TurnRepository` from `chatrelay-core` against the external
//! `chat_history(id, you, gpt)` table: raw parameterized queries and a
//! private row struct for MySQL-to-domain mapping. Every value reaching a
//! query is bound, never interpolated.

use chatrelay_core::turn::TurnRepository;
use chatrelay_types::error::RepositoryError;
use chatrelay_types::turn::ChatTurn;
use sqlx::Row;

use super::pool::DatabasePool;

/// MySQL-backed implementation of `TurnRepository`.
pub struct MysqlTurnRepository {
    pool: DatabasePool,
}

impl MysqlTurnRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping MySQL rows to the domain ChatTurn.
struct TurnRow {
    id: i64,
    you: String,
    gpt: String,
}

impl TurnRow {
    fn from_row(row: &sqlx::mysql::MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            you: row.try_get("you")?,
            gpt: row.try_get("gpt")?,
        })
    }

    fn into_turn(self) -> ChatTurn {
        ChatTurn {
            id: self.id,
            you: self.you,
            gpt: self.gpt,
        }
    }
}

impl TurnRepository for MysqlTurnRepository {
    async fn last_turn_id(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT id FROM chat_history ORDER BY id DESC LIMIT 1")
            .fetch_optional(&self.pool.inner)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => row
                .try_get("id")
                .map_err(|e| RepositoryError::Query(e.to_string())),
            None => Ok(0),
        }
    }

    async fn insert_turn(&self, turn: &ChatTurn) -> Result<u64, RepositoryError> {
        let result = sqlx::query("INSERT INTO chat_history (id, you, gpt) VALUES (?, ?, ?)")
            .bind(turn.id)
            .bind(&turn.you)
            .bind(&turn.gpt)
            .execute(&self.pool.inner)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn list_turns(&self) -> Result<Vec<ChatTurn>, RepositoryError> {
        let rows = sqlx::query("SELECT id, you, gpt FROM chat_history")
            .fetch_all(&self.pool.inner)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let turn_row =
                TurnRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            turns.push(turn_row.into_turn());
        }

        Ok(turns)
    }
}
