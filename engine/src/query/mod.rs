//! Query helpers over the type chart
//!
//! This module combines per-pair multipliers for possibly dual-typed
//! attackers and defenders, and exposes defensive-profile lookups used
//! for presentation.

mod matchup;

pub use matchup::{attack_multiplier, immunities, resistances, weaknesses};
