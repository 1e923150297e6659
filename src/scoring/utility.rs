//! Token utility scoring. Purely additive from zero.

use super::{Component, ComponentScore, ComponentScorer};
use crate::params::TokenParameters;

/// Points awarded per utility, in display order
const UTILITY_POINTS: [(&str, f64); 5] = [
    ("Gas fees", 40.0),
    ("Staking", 20.0),
    ("Governance", 15.0),
    ("Collateral", 20.0),
    ("Discounts/rewards", 5.0),
];

/// Score intrinsic demand drivers.
pub fn score_utility(
    utility_gas: bool,
    utility_staking: bool,
    utility_governance: bool,
    utility_collateral: bool,
    utility_discount: bool,
) -> ComponentScore {
    let flags = [
        utility_gas,
        utility_staking,
        utility_governance,
        utility_collateral,
        utility_discount,
    ];

    let active: Vec<(&str, f64)> = UTILITY_POINTS
        .iter()
        .zip(flags)
        .filter_map(|(entry, enabled)| enabled.then_some(*entry))
        .collect();

    let score: f64 = active.iter().map(|(_, points)| points).sum();
    let names: Vec<&str> = active.iter().map(|(name, _)| *name).collect();

    let comment = match names.as_slice() {
        [] => "No clear utility".to_string(),
        [only] => format!("Limited utility: {}", only),
        [_, _] => format!("Utilities: {}", names.join(", ")),
        _ => format!("Multiple utilities: {}", names.join(", ")),
    };

    ComponentScore::new(score, vec![comment])
}

/// [`ComponentScorer`] for [`Component::Utility`]
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityScorer;

impl ComponentScorer for UtilityScorer {
    fn component(&self) -> Component {
        Component::Utility
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        Some(score_utility(
            params.utility_gas,
            params.utility_staking,
            params.utility_governance,
            params.utility_collateral,
            params.utility_discount,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_utility() {
        let score = score_utility(false, false, false, false, false);
        assert_eq!(score.value(), 0.0);
        assert_eq!(score.comment(), "No clear utility");
    }

    #[test]
    fn test_all_utilities() {
        let score = score_utility(true, true, true, true, true);
        assert_eq!(score.value(), 100.0);
        assert!(score.comment().starts_with("Multiple utilities"));
    }

    #[test]
    fn test_single_utility_is_limited() {
        let score = score_utility(true, false, false, false, false);
        assert_eq!(score.value(), 40.0);
        assert_eq!(score.comment(), "Limited utility: Gas fees");
    }

    #[test]
    fn test_two_utilities_are_neutral() {
        let score = score_utility(false, true, true, false, false);
        assert_eq!(score.value(), 35.0);
        assert_eq!(score.comment(), "Utilities: Staking, Governance");
    }
}
