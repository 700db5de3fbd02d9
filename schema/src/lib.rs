//! JSON boundary for the matchup engine.
//!
//! The surrounding process hands the core two JSON-shaped creature records
//! and receives one JSON-shaped verdict back. This crate owns both wire
//! shapes and the strict decoding policy: anything that does not conform
//! is rejected at the boundary, never patched up.

use thiserror::Error;

pub mod record;
pub mod report;

pub use record::CreatureInput;
pub use report::{Scores, VerdictReport};

use champ_engine::BattleError;

#[derive(Error, Debug)]
pub enum DecodeError {
    /// Input did not parse into the required shape
    #[error("Malformed input: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Input parsed but violated a core invariant (unknown type, bad record)
    #[error(transparent)]
    Invalid(#[from] BattleError),
}
