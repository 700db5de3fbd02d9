//! Domain types for matchup resolution

mod creature;
mod elemental;
mod verdict;

pub use creature::Creature;
pub use elemental::Type;
pub use verdict::{Verdict, Winner};
