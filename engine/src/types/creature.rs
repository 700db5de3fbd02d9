//! Creature record type

use super::elemental::Type;
use crate::BattleError;

/// A creature entering a matchup (never mutated by the engine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    /// Name as given by the caller (stored verbatim, title-cased only for display)
    pub name: String,

    /// Elemental typing, one or two entries
    pub types: Vec<Type>,

    /// Aggregate power score, used only as a tie-break
    pub power: u32,
}

impl Creature {
    /// Create a new creature record
    pub fn new(name: impl Into<String>, types: Vec<Type>, power: u32) -> Self {
        Self {
            name: name.into(),
            types,
            power,
        }
    }

    /// Check the one-or-two-types invariant.
    ///
    /// Duplicate types are allowed; they get no special handling beyond
    /// normal multiplication.
    pub fn validate(&self) -> Result<(), BattleError> {
        match self.types.len() {
            1 | 2 => Ok(()),
            0 => Err(BattleError::InvalidRecord(format!(
                "{} has no types",
                self.name
            ))),
            n => Err(BattleError::InvalidRecord(format!(
                "{} has {} types (at most 2 allowed)",
                self.name, n
            ))),
        }
    }

    /// Slash-joined lowercase type list, e.g. "water" or "dragon/flying"
    pub fn type_names(&self) -> String {
        self.types
            .iter()
            .map(Type::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Name with the first letter of each word capitalized, for presentation
    pub fn display_name(&self) -> String {
        self.name
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
