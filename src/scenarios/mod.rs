//! Named parameter bundles and inflation projections.
//!
//! A [`ScenarioProvider`] turns a scenario identifier into a complete
//! [`TokenParameters`] record. Unknown identifiers are not an error: the
//! provider returns a default record flagged with `is_fallback`.

mod presets;
mod projection;

use serde::Serialize;

use crate::params::TokenParameters;

pub use presets::PresetScenarios;
pub use projection::Projection;

/// Scenario family, for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    /// Archetypal token designs
    Structural,
    /// Parametric emission curves on an otherwise fixed design
    Inflationary,
}

impl ScenarioCategory {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioCategory::Structural => "Structural",
            ScenarioCategory::Inflationary => "Inflationary",
        }
    }
}

/// A named parameter set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub id: String,
    pub category: ScenarioCategory,
    pub description: String,
    pub params: TokenParameters,
    /// Shape of the yearly inflation curve
    pub projection: Projection,
    /// True when the requested identifier was unknown and defaults were used
    pub is_fallback: bool,
}

/// Source of named scenarios
pub trait ScenarioProvider {
    /// Scenario for `id`, or a flagged default record when `id` is unknown
    fn scenario(&self, id: &str) -> Scenario;

    /// Known identifiers, in listing order
    fn scenario_ids(&self) -> Vec<&str>;

    /// Yearly inflation rates for `id`, exactly `years` entries
    fn projection(&self, id: &str, years: usize) -> Vec<f64> {
        self.scenario(id).projection.rates(years)
    }
}

/// Yearly inflation rates for a built-in scenario.
pub fn inflation_projection(id: &str, years: usize) -> Vec<f64> {
    PresetScenarios.projection(id, years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_length_is_exact() {
        for id in PresetScenarios.scenario_ids() {
            for years in [0, 1, 5, 12] {
                assert_eq!(inflation_projection(id, years).len(), years, "{}", id);
            }
        }
    }

    #[test]
    fn test_unknown_projection_uses_default_rate() {
        assert_eq!(inflation_projection("nope", 3), vec![5.0, 5.0, 5.0]);
    }
}
