//! Pooled MySQL connections.
//!
//! A single shared pool, created once at startup and cloned into every
//! request handler (sqlx pools are cheap reference-counted handles). The
//! pool's max-connection limit is the only throttle on parallel database
//! access; there is no in-process locking around it.

use secrecy::ExposeSecret;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::MysqlConfig;

/// Connection limit matching the upstream driver's pool default.
const MAX_CONNECTIONS: u32 = 10;

/// Shared MySQL pool handle.
#[derive(Clone)]
pub struct DatabasePool {
    pub inner: MySqlPool,
}

impl DatabasePool {
    /// Connect to the store described by `config`.
    ///
    /// The `chat_history` table is external and assumed pre-existing;
    /// no schema setup or migration runs here.
    pub async fn connect(config: &MysqlConfig) -> Result<Self, sqlx::Error> {
        let opts = MySqlConnectOptions::new()
            .host(&config.host)
            .username(&config.user)
            .password(config.password.expose_secret())
            .database(&config.database);

        Self::connect_with(opts).await
    }

    /// Connect with explicit options (used by integration tests).
    pub async fn connect_with(opts: MySqlConnectOptions) -> Result<Self, sqlx::Error> {
        let inner = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(opts)
            .await?;

        Ok(Self { inner })
    }

    /// Close all connections. Called once on shutdown.
    pub async fn close(&self) {
        self.inner.close().await;
    }
}
