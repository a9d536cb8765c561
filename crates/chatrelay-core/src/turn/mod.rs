//! Turn persistence and ordering.

pub mod repository;
pub mod sequencer;

pub use repository::TurnRepository;
pub use sequencer::{SequencerError, SubmittedTurn, TurnSequencer};
