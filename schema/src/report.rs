//! Verdict report wire shape

use champ_engine::{Verdict, Winner};
use serde::{Deserialize, Serialize};

use crate::record::CreatureInput;

/// Attack multipliers in both directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub p1_attack_multiplier_vs_p2: f32,
    pub p2_attack_multiplier_vs_p1: f32,
}

/// A matchup verdict as it appears on the wire.
///
/// `winner` serializes as "p1", "p2", or "draw"; the two records are echoed
/// back in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub winner: Winner,
    pub reasoning: String,
    pub p1: CreatureInput,
    pub p2: CreatureInput,
    pub scores: Scores,
    pub confidence: f32,
}

impl VerdictReport {
    /// Build the wire report from an engine verdict
    pub fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            winner: verdict.winner,
            reasoning: verdict.reasoning.clone(),
            p1: CreatureInput::from_creature(&verdict.p1),
            p2: CreatureInput::from_creature(&verdict.p2),
            scores: Scores {
                p1_attack_multiplier_vs_p2: verdict.p1_multiplier,
                p2_attack_multiplier_vs_p1: verdict.p2_multiplier,
            },
            confidence: verdict.confidence,
        }
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use champ_engine::{resolve, Creature, Type};

    fn squirtle_vs_charmander() -> Verdict {
        let squirtle = Creature::new("squirtle", vec![Type::Water], 314);
        let charmander = Creature::new("charmander", vec![Type::Fire], 309);
        resolve(&squirtle, &charmander).unwrap()
    }

    #[test]
    fn test_from_verdict() {
        let report = VerdictReport::from_verdict(&squirtle_vs_charmander());
        assert_eq!(report.winner, Winner::P1);
        assert_eq!(report.p1.name, "squirtle");
        assert_eq!(report.p2.types, vec!["fire"]);
        assert_eq!(report.scores.p1_attack_multiplier_vs_p2, 2.0);
        assert_eq!(report.scores.p2_attack_multiplier_vs_p1, 0.5);
        assert_eq!(report.confidence, 0.95);
    }

    #[test]
    fn test_report_json_shape() {
        let report = VerdictReport::from_verdict(&squirtle_vs_charmander());
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["winner"], "p1");
        assert_eq!(value["p1"]["name"], "squirtle");
        assert_eq!(value["p1"]["types"][0], "water");
        assert_eq!(value["p1"]["base_total"], 314);
        assert_eq!(value["scores"]["p1_attack_multiplier_vs_p2"], 2.0);
        assert_eq!(value["scores"]["p2_attack_multiplier_vs_p1"], 0.5);
        // confidence is f32 on the wire; compare after narrowing
        assert_eq!(value["confidence"].as_f64().unwrap() as f32, 0.95);
        assert!(value["reasoning"].is_string());
    }

    #[test]
    fn test_report_winner_encodings() {
        let a = Creature::new("plusle", vec![Type::Electric], 405);
        let b = Creature::new("minun", vec![Type::Electric], 405);
        let draw = resolve(&a, &b).unwrap();
        let json = VerdictReport::from_verdict(&draw).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["winner"], "draw");
    }

    #[test]
    fn test_report_round_trip() {
        let report = VerdictReport::from_verdict(&squirtle_vs_charmander());
        let json = report.to_json_pretty().unwrap();
        let back: VerdictReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
