//! Type matchup calculations

use crate::types::Type;

/// Best attack multiplier an attacker's typing lands on a defender's typing.
///
/// Each attacking type compounds multiplicatively over the defending types,
/// and the overall result takes the maximum across attacking types: a
/// multi-typed attacker uses whichever type lands the best single hit, never
/// the product of its own types. The fold starts at 0.0 so a sole immune
/// matchup stays 0.0 without suppressing a better alternative type.
///
/// An empty attacker list yields the 0.0 seed; record validation upstream
/// rules that case out.
pub fn attack_multiplier(attacker_types: &[Type], defender_types: &[Type]) -> f32 {
    attacker_types
        .iter()
        .map(|t| t.effectiveness_multi(defender_types))
        .fold(0.0, f32::max)
}

/// Get all types that are super effective against the defender
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| t.effectiveness_multi(defender_types) > 1.0)
        .collect()
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| {
            let eff = t.effectiveness_multi(defender_types);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// Get all types that the defender is immune to
pub fn immunities(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| t.effectiveness_multi(defender_types) == 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_multiplier_dual_defender_compounds() {
        // Ice vs Dragon/Flying: both halves are weak to ice
        assert_eq!(
            attack_multiplier(&[Type::Ice], &[Type::Dragon, Type::Flying]),
            4.0
        );
        // Fire vs Water/Rock: both halves resist fire
        assert_eq!(
            attack_multiplier(&[Type::Fire], &[Type::Water, Type::Rock]),
            0.25
        );
    }

    #[test]
    fn test_attack_multiplier_immunity_absolute() {
        assert_eq!(attack_multiplier(&[Type::Electric], &[Type::Ground]), 0.0);
        // The immune half zeroes the whole product even when the other
        // half would be hit super effectively
        assert_eq!(
            attack_multiplier(&[Type::Electric], &[Type::Water, Type::Ground]),
            0.0
        );
    }

    #[test]
    fn test_attack_multiplier_multi_attacker_takes_max() {
        // Fire/Flying vs Electric = max(1.0, 0.5) = 1.0, never the product
        let combined = attack_multiplier(&[Type::Fire, Type::Flying], &[Type::Electric]);
        let fire = Type::Fire.effectiveness(Type::Electric);
        let flying = Type::Flying.effectiveness(Type::Electric);
        assert_eq!(combined, fire.max(flying));
        assert_eq!(combined, 1.0);
    }

    #[test]
    fn test_attack_multiplier_immune_type_does_not_suppress_alternative() {
        // One immune attacking type must not drag down a usable one.
        assert_eq!(
            attack_multiplier(&[Type::Electric, Type::Ground], &[Type::Ground]),
            1.0
        );
        assert_eq!(
            attack_multiplier(&[Type::Normal, Type::Fighting], &[Type::Ghost]),
            0.0
        );
    }

    #[test]
    fn test_attack_multiplier_neutral_symmetry() {
        assert_eq!(attack_multiplier(&[Type::Fire], &[Type::Psychic]), 1.0);
        assert_eq!(attack_multiplier(&[Type::Psychic], &[Type::Fire]), 1.0);
    }

    #[test]
    fn test_attack_multiplier_empty_attacker_is_seed() {
        assert_eq!(attack_multiplier(&[], &[Type::Water]), 0.0);
    }

    #[test]
    fn test_weaknesses_single() {
        // Steel is weak to its three listed attackers
        let weak = weaknesses(&[Type::Steel]);
        assert_eq!(weak, vec![Type::Fire, Type::Fighting, Type::Ground]);
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground: grass compounds to 4x, water and ice land 2x
        let weak = weaknesses(&[Type::Water, Type::Ground]);
        assert_eq!(weak, vec![Type::Water, Type::Grass, Type::Ice]);
    }

    #[test]
    fn test_resistances() {
        // Steel resists the types it is super effective against; poison is
        // an immunity, not a resistance
        let resists = resistances(&[Type::Steel]);
        assert_eq!(resists, vec![Type::Ice, Type::Rock, Type::Fairy]);
        assert!(!resists.contains(&Type::Poison));
    }

    #[test]
    fn test_immunities() {
        let ghost = immunities(&[Type::Ghost]);
        assert_eq!(ghost, vec![Type::Normal, Type::Fighting]);

        let dual = immunities(&[Type::Water, Type::Ground]);
        assert_eq!(dual, vec![Type::Electric]);
    }
}
