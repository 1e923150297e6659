//! Weighted aggregation of component scores into the viability index.

use serde::{Deserialize, Serialize};

use super::score_types::Score;
use super::verdict::{Verdict, VerdictColor};
use super::weights::{Ruleset, WeightTable};
use super::{Component, ComponentScore};

/// Component scores produced by one scoring run
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScores {
    pub inflation: ComponentScore,
    pub distribution: ComponentScore,
    pub utility: ComponentScore,
    pub governance: ComponentScore,
    pub incentives: ComponentScore,
    pub liquidity: Option<ComponentScore>,
    pub adoption: Option<ComponentScore>,
    pub security: Option<ComponentScore>,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> Option<&ComponentScore> {
        match component {
            Component::Inflation => Some(&self.inflation),
            Component::Distribution => Some(&self.distribution),
            Component::Utility => Some(&self.utility),
            Component::Governance => Some(&self.governance),
            Component::Incentives => Some(&self.incentives),
            Component::Liquidity => self.liquidity.as_ref(),
            Component::Adoption => self.adoption.as_ref(),
            Component::Security => self.security.as_ref(),
        }
    }

    /// Components that produced a score
    pub fn present(&self) -> Vec<Component> {
        Component::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_some())
            .collect()
    }
}

/// Complete outcome of scoring one token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub final_score: Score,
    pub verdict: Verdict,
    pub ruleset: Ruleset,
    pub inflation: ComponentScore,
    pub distribution: ComponentScore,
    pub utility: ComponentScore,
    pub governance: ComponentScore,
    pub incentives: ComponentScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<ComponentScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adoption: Option<ComponentScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<ComponentScore>,
    /// Effective weights after redistribution
    pub weights: WeightTable,
}

impl ScoreResult {
    pub fn component(&self, component: Component) -> Option<&ComponentScore> {
        match component {
            Component::Inflation => Some(&self.inflation),
            Component::Distribution => Some(&self.distribution),
            Component::Utility => Some(&self.utility),
            Component::Governance => Some(&self.governance),
            Component::Incentives => Some(&self.incentives),
            Component::Liquidity => self.liquidity.as_ref(),
            Component::Adoption => self.adoption.as_ref(),
            Component::Security => self.security.as_ref(),
        }
    }

    /// Scored components in reporting order
    pub fn components(&self) -> impl Iterator<Item = (Component, &ComponentScore)> {
        Component::ALL
            .into_iter()
            .filter_map(move |c| self.component(c).map(|score| (c, score)))
    }

    pub fn verdict_color(&self) -> VerdictColor {
        self.verdict.color()
    }
}

/// Combine component scores under `weights`.
///
/// Weights are first adjusted for components that produced no score, see
/// [`WeightTable::effective`]. The sum is clamped to [0, 100].
pub fn aggregate(scores: ComponentScores, weights: &WeightTable, ruleset: Ruleset) -> ScoreResult {
    let effective = weights.effective(&scores.present());

    let total: f64 = Component::ALL
        .iter()
        .filter_map(|c| scores.get(*c).map(|s| s.score.weighted(effective.get(*c))))
        .sum();

    let final_score = Score::new(total);
    log::debug!(
        "Aggregated {} components: raw {:.3}, final {}",
        scores.present().len(),
        total,
        final_score
    );

    ScoreResult {
        final_score,
        verdict: Verdict::from_score(final_score),
        ruleset,
        inflation: scores.inflation,
        distribution: scores.distribution,
        utility: scores.utility,
        governance: scores.governance,
        incentives: scores.incentives,
        liquidity: scores.liquidity,
        adoption: scores.adoption,
        security: scores.security,
        weights: effective,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(value: f64) -> ComponentScore {
        ComponentScore::new(value, vec![])
    }

    fn core_scores() -> ComponentScores {
        ComponentScores {
            inflation: flat(77.0),
            distribution: flat(85.0),
            utility: flat(35.0),
            governance: flat(100.0),
            incentives: flat(60.0),
            liquidity: None,
            adoption: None,
            security: None,
        }
    }

    #[test]
    fn test_reference_extended() {
        let result = aggregate(core_scores(), &WeightTable::extended(), Ruleset::Extended);
        assert!((result.final_score.value() - 68.2).abs() < 1e-9);
        assert_eq!(result.verdict, Verdict::Good);
    }

    #[test]
    fn test_reference_legacy() {
        let result = aggregate(core_scores(), &WeightTable::legacy(), Ruleset::Legacy);
        assert!((result.final_score.value() - 69.0).abs() < 1e-9);
    }

    #[test]
    fn test_security_bonus_is_clamped() {
        let scores = ComponentScores {
            inflation: flat(100.0),
            distribution: flat(100.0),
            utility: flat(100.0),
            governance: flat(100.0),
            incentives: flat(100.0),
            liquidity: Some(flat(100.0)),
            adoption: Some(flat(100.0)),
            security: Some(flat(100.0)),
        };
        let result = aggregate(scores, &WeightTable::extended(), Ruleset::Extended);
        assert_eq!(result.final_score.value(), 100.0);
        assert_eq!(result.verdict, Verdict::Excellent);
    }

    #[test]
    fn test_components_iterates_present_only() {
        let result = aggregate(core_scores(), &WeightTable::extended(), Ruleset::Extended);
        let listed: Vec<Component> = result.components().map(|(c, _)| c).collect();
        assert_eq!(listed, Component::CORE.to_vec());
    }
}
