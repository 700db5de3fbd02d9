//! Winner resolution policy

use crate::query::attack_multiplier;
use crate::types::{Creature, Verdict, Winner};
use crate::BattleError;

/// Resolve a matchup between two creatures into a verdict.
///
/// The side with the higher attack multiplier wins; equal multipliers fall
/// back to a strict power comparison, and equal power is a draw. Both
/// records are validated before any multiplier math. Total over well-formed
/// pairs, deterministic, no I/O.
pub fn resolve(p1: &Creature, p2: &Creature) -> Result<Verdict, BattleError> {
    p1.validate()?;
    p2.validate()?;

    let m12 = attack_multiplier(&p1.types, &p2.types);
    let m21 = attack_multiplier(&p2.types, &p1.types);

    let (winner, reasoning) = if m12 > m21 {
        (
            Winner::P1,
            format!(
                "{}'s {} attacks were super effective!",
                p1.display_name(),
                p1.type_names()
            ),
        )
    } else if m21 > m12 {
        (
            Winner::P2,
            format!(
                "{}'s {} attacks dominated!",
                p2.display_name(),
                p2.type_names()
            ),
        )
    } else if p1.power > p2.power {
        (
            Winner::P1,
            format!("{}'s superior stats barely won!", p1.display_name()),
        )
    } else if p2.power > p1.power {
        (
            Winner::P2,
            format!(
                "{}'s raw power overwhelmed {}!",
                p2.display_name(),
                p1.name
            ),
        )
    } else {
        (
            Winner::Draw,
            "A perfect tie! Both creatures are equally matched!".to_string(),
        )
    };

    Ok(Verdict {
        winner,
        reasoning,
        p1: p1.clone(),
        p2: p2.clone(),
        p1_multiplier: m12,
        p2_multiplier: m21,
        confidence: confidence_for_gap((m12 - m21).abs()),
    })
}

/// Map the effectiveness gap to a confidence tier.
///
/// Coarse and monotonic, not a calibrated probability.
fn confidence_for_gap(gap: f32) -> f32 {
    if gap >= 1.5 {
        0.95
    } else if gap >= 1.0 {
        0.85
    } else if gap >= 0.5 {
        0.75
    } else {
        0.60
    }
}
