//! Advisory text derived from a [`ScoreResult`].
//!
//! Each rule is independent: one line per weak component, then at most one
//! summary line for the overall tier. Results in the middle band with no
//! weak component produce no recommendation at all; rendering a "no issues"
//! message is left to the caller.

use serde::Serialize;

use crate::scoring::{Component, ScoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Positive,
    Warning,
    Critical,
}

impl Severity {
    pub fn symbol(self) -> &'static str {
        match self {
            Severity::Positive => "✓",
            Severity::Warning => "!",
            Severity::Critical => "✗",
        }
    }
}

/// One piece of advice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Component the advice is about, `None` for the overall summary
    pub component: Option<Component>,
    pub severity: Severity,
    pub text: String,
}

impl Recommendation {
    fn new(component: Option<Component>, severity: Severity, text: &str) -> Self {
        Self {
            component,
            severity,
            text: text.to_string(),
        }
    }
}

/// Threshold below which a component is flagged, with the advice to give.
struct ComponentRule {
    component: Component,
    threshold: f64,
    severity: Severity,
    text: &'static str,
}

const COMPONENT_RULES: [ComponentRule; 8] = [
    ComponentRule {
        component: Component::Inflation,
        threshold: 50.0,
        severity: Severity::Warning,
        text: "High inflation: check for offsetting mechanisms (burn, lock, strong utility)",
    },
    ComponentRule {
        component: Component::Distribution,
        threshold: 50.0,
        severity: Severity::Warning,
        text: "Problematic distribution: high concentration or insufficient vesting",
    },
    ComponentRule {
        component: Component::Utility,
        threshold: 40.0,
        severity: Severity::Critical,
        text: "Weak utility: the token lacks real use cases and intrinsic demand",
    },
    ComponentRule {
        component: Component::Governance,
        threshold: 50.0,
        severity: Severity::Warning,
        text: "Governance at risk: insufficient timelock and decentralisation",
    },
    ComponentRule {
        component: Component::Incentives,
        threshold: 50.0,
        severity: Severity::Warning,
        text: "Weak incentives: few mechanisms to retain long-term holders",
    },
    ComponentRule {
        component: Component::Liquidity,
        threshold: 50.0,
        severity: Severity::Warning,
        text: "Thin liquidity: large positions may be hard to exit",
    },
    ComponentRule {
        component: Component::Adoption,
        threshold: 50.0,
        severity: Severity::Warning,
        text: "Limited adoption: small market footprint or weak momentum",
    },
    ComponentRule {
        component: Component::Security,
        threshold: 40.0,
        severity: Severity::Critical,
        text: "Security track record unproven: few audits or no bug bounty",
    },
];

/// Build the typed recommendation list for a result.
pub fn generate_recommendations(result: &ScoreResult) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = COMPONENT_RULES
        .iter()
        .filter(|rule| {
            result
                .component(rule.component)
                .is_some_and(|score| score.value() < rule.threshold)
        })
        .map(|rule| Recommendation::new(Some(rule.component), rule.severity, rule.text))
        .collect();

    let final_score = result.final_score.value();
    let summary = if final_score >= 80.0 {
        Some((
            Severity::Positive,
            "Solid tokenomics: the economic model looks viable long term",
        ))
    } else if final_score >= 65.0 {
        Some((
            Severity::Positive,
            "Sound tokenomics: a few areas to improve but healthy overall",
        ))
    } else if final_score < 35.0 {
        Some((
            Severity::Critical,
            "Very risky tokenomics: many red flags, proceed with caution",
        ))
    } else {
        None
    };

    if let Some((severity, text)) = summary {
        recommendations.push(Recommendation::new(None, severity, text));
    }
    recommendations
}

/// Recommendation texts for a result.
pub fn recommend(result: &ScoreResult) -> Vec<String> {
    generate_recommendations(result)
        .into_iter()
        .map(|r| r.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::tests::reference_params;
    use crate::scoring::score;

    #[test]
    fn test_reference_scenario_recommendations() {
        let result = score(&reference_params()).unwrap();
        let recs = generate_recommendations(&result);
        // utility 35 is weak, final 68.2 is in the "sound" band
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].component, Some(Component::Utility));
        assert_eq!(recs[0].severity, Severity::Critical);
        assert_eq!(recs[1].component, None);
        assert!(recs[1].text.starts_with("Sound tokenomics"));
    }

    #[test]
    fn test_middle_band_without_weak_components_is_empty() {
        let mut params = reference_params();
        // utility 55, governance 50, distribution 60: nothing below threshold
        params.utility_gas = true;
        params.utility_staking = false;
        params.gov_timelock = false;
        params.gov_multisig = false;
        params.team_allocation = 25.0;
        params.vesting_years = 2;
        let result = score(&params).unwrap();
        assert!(result.final_score.value() >= 35.0 && result.final_score.value() < 65.0);
        assert!(recommend(&result).is_empty());
    }

    #[test]
    fn test_absent_market_components_are_not_flagged() {
        let result = score(&reference_params()).unwrap();
        let recs = generate_recommendations(&result);
        assert!(recs
            .iter()
            .all(|r| !matches!(r.component, Some(c) if c.is_market_signal())));
    }

    #[test]
    fn test_recommend_returns_text() {
        let result = score(&reference_params()).unwrap();
        let texts = recommend(&result);
        assert!(texts[0].starts_with("Weak utility"));
    }
}
