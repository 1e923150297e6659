use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::scoring::{Component, Ruleset, WeightTable};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenomicsConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Which rule generation to run; the legacy table must be asked for
    #[serde(default)]
    pub ruleset: Ruleset,

    /// Per-component overrides on top of the ruleset's table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightOverrides>,
}

impl ScoringConfig {
    /// Ruleset table with overrides applied. Not validated.
    pub fn weight_table(&self) -> WeightTable {
        let mut table = WeightTable::for_ruleset(self.ruleset);
        if let Some(overrides) = &self.weights {
            overrides.apply(&mut table);
        }
        table
    }
}

/// Partial weight table: only the components named are overridden
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightOverrides {
    pub inflation: Option<f64>,
    pub distribution: Option<f64>,
    pub utility: Option<f64>,
    pub governance: Option<f64>,
    pub incentives: Option<f64>,
    pub liquidity: Option<f64>,
    pub adoption: Option<f64>,
    pub security: Option<f64>,
}

impl WeightOverrides {
    fn get(&self, component: Component) -> Option<f64> {
        match component {
            Component::Inflation => self.inflation,
            Component::Distribution => self.distribution,
            Component::Utility => self.utility,
            Component::Governance => self.governance,
            Component::Incentives => self.incentives,
            Component::Liquidity => self.liquidity,
            Component::Adoption => self.adoption,
            Component::Security => self.security,
        }
    }

    pub fn apply(&self, table: &mut WeightTable) {
        for component in Component::ALL {
            if let Some(weight) = self.get(component) {
                table.set(component, weight);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub default_format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_output_format(),
        }
    }
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Terminal
}
