//! Rules engine for deciding hypothetical matchups between two creatures.
//!
//! Each creature carries one or two elemental types and an aggregate power
//! score. The engine derives a single attack multiplier in each direction
//! from a fixed type-advantage chart, then resolves a winner with a power
//! tie-break and a coarse confidence score.
//!
//! # Overview
//!
//! `champ-engine` is the bottom layer of the workspace:
//!
//! ```text
//! champ-engine (type chart + resolver) ← THIS CRATE
//!        │
//!        ▼
//! champ-schema (JSON boundary)
//!        │
//!        ▼
//! champ-cli (enclosing process)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Elemental types with the effectiveness chart
//! - [`Creature`] - A named record with 1-2 types and a power score
//! - [`Verdict`] - The resolved outcome of one matchup
//! - [`Winner`] - Which side the verdict favors (or a draw)
//!
//! Everything here is pure and synchronous: the chart is immutable after
//! construction, no function performs I/O, and concurrent callers need no
//! locking.
//!
//! # Example Usage
//!
//! ```
//! use champ_engine::{resolve, Creature, Type};
//!
//! let squirtle = Creature::new("squirtle", vec![Type::Water], 314);
//! let charmander = Creature::new("charmander", vec![Type::Fire], 309);
//!
//! let verdict = resolve(&squirtle, &charmander).unwrap();
//! assert_eq!(verdict.winner.as_str(), "p1");
//! ```

use thiserror::Error;

pub mod query;
pub mod resolve;
pub mod types;

// Re-export main types at crate root for convenience
pub use resolve::resolve;
pub use types::{Creature, Type, Verdict, Winner};

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
