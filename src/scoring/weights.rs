//! Weight tables for the two supported rulesets.
//!
//! The extended table is canonical. Base weights (every component except
//! security) sum to 1.0 and security adds up to 0.05 on top, so a perfect
//! token can reach 105 before the final clamp.

use serde::{Deserialize, Serialize};

use super::Component;
use crate::errors::{Error, Result};

/// Tolerance used when checking that base weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Largest weight the security bonus may carry
pub const MAX_SECURITY_BONUS: f64 = 0.05;

/// Which generation of scoring rules to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Eight components, with market signals and a security bonus
    #[default]
    Extended,
    /// Five core components only
    Legacy,
}

impl Ruleset {
    /// Components this ruleset scores
    pub fn components(self) -> &'static [Component] {
        match self {
            Ruleset::Extended => &Component::ALL,
            Ruleset::Legacy => &Component::CORE,
        }
    }
}

impl std::fmt::Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ruleset::Extended => write!(f, "extended"),
            Ruleset::Legacy => write!(f, "legacy"),
        }
    }
}

/// Per-component weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub inflation: f64,
    pub distribution: f64,
    pub utility: f64,
    pub governance: f64,
    pub incentives: f64,
    pub liquidity: f64,
    pub adoption: f64,
    /// Bonus weight, not part of the base sum
    pub security: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::extended()
    }
}

impl WeightTable {
    pub fn extended() -> Self {
        Self {
            inflation: 0.20,
            distribution: 0.15,
            utility: 0.20,
            governance: 0.10,
            incentives: 0.10,
            liquidity: 0.15,
            adoption: 0.10,
            security: 0.05,
        }
    }

    pub fn legacy() -> Self {
        Self {
            inflation: 0.25,
            distribution: 0.20,
            utility: 0.25,
            governance: 0.15,
            incentives: 0.15,
            liquidity: 0.0,
            adoption: 0.0,
            security: 0.0,
        }
    }

    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        match ruleset {
            Ruleset::Extended => Self::extended(),
            Ruleset::Legacy => Self::legacy(),
        }
    }

    pub fn get(&self, component: Component) -> f64 {
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

    fn slot(&mut self, component: Component) -> &mut f64 {
        match component {
            Component::Inflation => &mut self.inflation,
            Component::Distribution => &mut self.distribution,
            Component::Utility => &mut self.utility,
            Component::Governance => &mut self.governance,
            Component::Incentives => &mut self.incentives,
            Component::Liquidity => &mut self.liquidity,
            Component::Adoption => &mut self.adoption,
            Component::Security => &mut self.security,
        }
    }

    pub fn set(&mut self, component: Component, weight: f64) {
        *self.slot(component) = weight;
    }

    /// Sum of every non-bonus weight
    pub fn base_sum(&self) -> f64 {
        Component::ALL
            .iter()
            .filter(|c| !c.is_bonus())
            .map(|c| self.get(*c))
            .sum()
    }

    /// Sum of all weights, bonus included
    pub fn nominal_sum(&self) -> f64 {
        Component::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Check ranges and that base weights sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        for component in Component::ALL {
            let weight = self.get(component);
            if !(0.0..=1.0).contains(&weight) {
                return Err(Error::Configuration(format!(
                    "{} weight must be between 0.0 and 1.0, got {}",
                    component, weight
                )));
            }
        }

        let sum = self.base_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::Configuration(format!(
                "Base scoring weights must sum to 1.0, but sum to {:.3}",
                sum
            )));
        }

        if self.security > MAX_SECURITY_BONUS {
            return Err(Error::Configuration(format!(
                "Security bonus weight must not exceed {}, got {}",
                MAX_SECURITY_BONUS, self.security
            )));
        }
        Ok(())
    }

    /// Weights actually applied when only `present` components were scored.
    ///
    /// Absent components get zero weight. The weight of an absent base
    /// component is spread over the present base components in proportion to
    /// their own weight; an absent bonus is simply dropped.
    pub fn effective(&self, present: &[Component]) -> WeightTable {
        let mut table = *self;
        let mut missing = 0.0;
        for component in Component::ALL {
            if !present.contains(&component) {
                if !component.is_bonus() {
                    missing += self.get(component);
                }
                table.set(component, 0.0);
            }
        }

        let remaining = table.base_sum();
        if missing > 0.0 && remaining > 0.0 {
            let scale = (remaining + missing) / remaining;
            for component in Component::ALL.iter().filter(|c| !c.is_bonus()) {
                let weight = table.get(*component);
                table.set(*component, weight * scale);
            }
        }
        table
    }
}
