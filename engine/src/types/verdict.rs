//! Matchup verdict types

use super::creature::Creature;

/// Side a verdict favors (p1, p2, or a draw)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Winner {
    P1,
    P2,
    Draw,
}

impl Winner {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Winner::P1),
            "p2" => Some(Winner::P2),
            "draw" => Some(Winner::Draw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::P1 => "p1",
            Winner::P2 => "p2",
            Winner::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The resolved outcome of one matchup.
///
/// Owns its own copies of the two input records; the attack multipliers are
/// recorded in both directions so callers can show the full picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Which side won, or a draw
    pub winner: Winner,

    /// Presentational explanation of the decision (never feeds back into it)
    pub reasoning: String,

    /// First creature, as resolved
    pub p1: Creature,

    /// Second creature, as resolved
    pub p2: Creature,

    /// p1's best attack multiplier against p2's typing
    pub p1_multiplier: f32,

    /// p2's best attack multiplier against p1's typing
    pub p2_multiplier: f32,

    /// Coarse confidence tier in [0, 1], not a calibrated probability
    pub confidence: f32,
}

impl Verdict {
    /// Get the winning creature, or `None` for a draw
    pub fn winning_creature(&self) -> Option<&Creature> {
        match self.winner {
            Winner::P1 => Some(&self.p1),
            Winner::P2 => Some(&self.p2),
            Winner::Draw => None,
        }
    }
}
