//! Application state wiring the sequencer to its infrastructure.
//!
//! AppState pins the generic `TurnSequencer` to the concrete MySQL and
//! Azure OpenAI implementations and owns the shared pool handle. It is
//! initialized once at startup and cloned into every request handler; no
//! singletons, no global statics.

use std::sync::Arc;

use chatrelay_core::turn::TurnSequencer;
use chatrelay_infra::config::RelayConfig;
use chatrelay_infra::llm::AzureOpenAiProvider;
use chatrelay_infra::mysql::pool::DatabasePool;
use chatrelay_infra::mysql::turn::MysqlTurnRepository;

/// Concrete type alias for the sequencer pinned to infra implementations.
pub type ConcreteTurnSequencer = TurnSequencer<MysqlTurnRepository, AzureOpenAiProvider>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sequencer: Arc<ConcreteTurnSequencer>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to MySQL, wire the
    /// provider and sequencer.
    pub async fn init(config: &RelayConfig) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::connect(&config.mysql).await?;

        let repo = MysqlTurnRepository::new(db_pool.clone());
        let provider = AzureOpenAiProvider::new(&config.azure);
        let sequencer = TurnSequencer::new(repo, provider);

        Ok(Self {
            sequencer: Arc::new(sequencer),
            db_pool,
        })
    }
}
