//! Creature record wire shape
//!
//! This type represents the JSON structure handed over by the external
//! fetch collaborator: `{name, types, base_total}`.

use champ_engine::{BattleError, Creature, Type};
use serde::{Deserialize, Serialize};

use crate::DecodeError;

/// A creature record as it appears on the wire.
///
/// Types stay plain strings here so a name outside the 18-value domain
/// surfaces as [`BattleError::UnknownType`] rather than a serde error, and
/// `base_total` stays signed so a negative value surfaces as
/// [`BattleError::InvalidRecord`] rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureInput {
    /// Creature name, stored verbatim
    pub name: String,

    /// Type names, matched case-insensitively against the domain
    pub types: Vec<String>,

    /// Aggregate power score
    pub base_total: i64,
}

impl CreatureInput {
    /// Parse a record from JSON
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a validated engine record
    pub fn into_creature(self) -> Result<Creature, DecodeError> {
        let mut types = Vec::with_capacity(self.types.len());
        for name in &self.types {
            let parsed = Type::from_name(name)
                .ok_or_else(|| BattleError::UnknownType(name.clone()))?;
            types.push(parsed);
        }

        let power = u32::try_from(self.base_total).map_err(|_| {
            BattleError::InvalidRecord(format!(
                "{} has base_total {} out of range",
                self.name, self.base_total
            ))
        })?;

        let creature = Creature::new(self.name, types, power);
        creature.validate()?;
        Ok(creature)
    }

    /// Canonical echo of an engine record (lowercase type names)
    pub fn from_creature(creature: &Creature) -> Self {
        Self {
            name: creature.name.clone(),
            types: creature
                .types
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            base_total: i64::from(creature.power),
        }
    }
}
