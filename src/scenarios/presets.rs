//! Built-in scenario library.
//!
//! Structural presets are archetypes of real token designs. Inflationary
//! presets keep one design fixed and vary the emission curve.

use once_cell::sync::Lazy;

use super::{Projection, Scenario, ScenarioCategory, ScenarioProvider};
use crate::params::{TokenParameters, INDEFINITE_EMISSION_YEARS};

const DEFAULT_RATE: f64 = 5.0;

/// Mid-range design used as the starting point for every preset and as the
/// fallback for unknown identifiers.
fn baseline() -> TokenParameters {
    TokenParameters {
        circulating_supply: 500_000_000.0,
        total_supply: 1_000_000_000.0,
        max_supply: 1_000_000_000.0,
        inflation_rate: 5.0,
        emission_years_left: 5,
        team_allocation: 15.0,
        vesting_years: 3,
        top_10_concentration: 30.0,
        utility_gas: false,
        utility_staking: true,
        utility_governance: true,
        utility_collateral: false,
        utility_discount: false,
        gov_timelock: true,
        gov_multisig: true,
        gov_dao_active: true,
        incentive_lock: false,
        incentive_staking: true,
        incentive_burn: false,
        lock_duration_months: 0,
        burn_rate: 0.0,
        market: None,
    }
}

/// Uncapped, indefinitely emitting design shared by the flat-rate presets
fn flat_rate(rate: f64) -> TokenParameters {
    TokenParameters {
        max_supply: 0.0,
        inflation_rate: rate,
        emission_years_left: INDEFINITE_EMISSION_YEARS,
        utility_gas: true,
        ..baseline()
    }
}

fn preset(
    id: &str,
    category: ScenarioCategory,
    description: &str,
    projection: Projection,
    params: TokenParameters,
) -> Scenario {
    Scenario {
        id: id.to_string(),
        category,
        description: description.to_string(),
        params,
        projection,
        is_fallback: false,
    }
}

static PRESETS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    use ScenarioCategory::{Inflationary, Structural};

    vec![
        preset(
            "early-stage",
            Structural,
            "Launch-phase project with heavy dilution ahead and centralised governance",
            Projection::Schedule {
                rates: &[15.0, 12.0, 10.0, 8.0, 6.0],
            },
            TokenParameters {
                circulating_supply: 100_000_000.0,
                inflation_rate: 15.0,
                team_allocation: 20.0,
                top_10_concentration: 45.0,
                gov_timelock: false,
                gov_dao_active: false,
                ..baseline()
            },
        ),
        preset(
            "eth-like-utility",
            Structural,
            "Strong fundamental utility (gas fees) with a fee burn, post-EIP-1559 style",
            Projection::Constant { rate: 0.5 },
            TokenParameters {
                circulating_supply: 120_000_000.0,
                total_supply: 120_000_000.0,
                max_supply: 0.0,
                inflation_rate: 0.5,
                emission_years_left: INDEFINITE_EMISSION_YEARS,
                team_allocation: 0.0,
                vesting_years: 0,
                top_10_concentration: 25.0,
                utility_gas: true,
                utility_collateral: true,
                incentive_burn: true,
                burn_rate: 0.3,
                ..baseline()
            },
        ),
        preset(
            "curve-like-defi",
            Structural,
            "High inflation offset by long-term vote locks and generous farming rewards",
            Projection::Schedule {
                rates: &[20.0, 18.0, 16.0, 14.0, 12.0],
            },
            TokenParameters {
                circulating_supply: 400_000_000.0,
                total_supply: 3_000_000_000.0,
                max_supply: 3_000_000_000.0,
                inflation_rate: 20.0,
                emission_years_left: 8,
                vesting_years: 4,
                top_10_concentration: 35.0,
                utility_discount: true,
                incentive_lock: true,
                lock_duration_months: 48,
                ..baseline()
            },
        ),
        preset(
            "pendle-like",
            Structural,
            "Low inflation, fees above emissions and productive lock mechanisms",
            Projection::Schedule {
                rates: &[3.0, 2.5, 2.0, 1.5, 1.0],
            },
            TokenParameters {
                circulating_supply: 150_000_000.0,
                total_supply: 258_000_000.0,
                max_supply: 258_000_000.0,
                inflation_rate: 3.0,
                emission_years_left: 3,
                team_allocation: 12.0,
                vesting_years: 2,
                top_10_concentration: 28.0,
                utility_discount: true,
                incentive_lock: true,
                incentive_burn: true,
                lock_duration_months: 24,
                burn_rate: 0.5,
                ..baseline()
            },
        ),
        preset(
            "eigenlayer-like-restaking",
            Structural,
            "Token used as collateral for economic security, with real slashing risk",
            Projection::Schedule {
                rates: &[5.0, 4.0, 3.0, 2.0, 1.5],
            },
            TokenParameters {
                circulating_supply: 200_000_000.0,
                emission_years_left: 4,
                team_allocation: 18.0,
                vesting_years: 4,
                utility_collateral: true,
                incentive_lock: true,
                lock_duration_months: 12,
                ..baseline()
            },
        ),
        preset(
            "captured-governance",
            Structural,
            "Excessive concentration, centralised governance and no timelock",
            Projection::Schedule {
                rates: &[8.0, 7.0, 6.0, 5.0, 4.0],
            },
            TokenParameters {
                circulating_supply: 300_000_000.0,
                inflation_rate: 8.0,
                emission_years_left: 6,
                team_allocation: 35.0,
                vesting_years: 2,
                top_10_concentration: 65.0,
                utility_staking: false,
                gov_timelock: false,
                gov_dao_active: false,
                incentive_staking: false,
                ..baseline()
            },
        ),
        preset(
            "mature-store-of-value",
            Structural,
            "Nearly fully issued supply, clear utility, consensus-driven governance",
            Projection::Constant { rate: 0.5 },
            TokenParameters {
                circulating_supply: 19_000_000.0,
                total_supply: 19_500_000.0,
                max_supply: 21_000_000.0,
                inflation_rate: 0.5,
                emission_years_left: 100,
                team_allocation: 0.0,
                vesting_years: 0,
                top_10_concentration: 15.0,
                utility_gas: true,
                utility_staking: false,
                utility_governance: false,
                utility_collateral: true,
                gov_timelock: false,
                gov_multisig: false,
                gov_dao_active: false,
                incentive_staking: false,
                ..baseline()
            },
        ),
        preset(
            "inflation-2pct",
            Inflationary,
            "Stable 2% yearly inflation, soft-money style, sustainable long term",
            Projection::Constant { rate: 2.0 },
            flat_rate(2.0),
        ),
        preset(
            "inflation-5pct",
            Inflationary,
            "Stable 5% yearly inflation, sustainable with strong utility and growing demand",
            Projection::Constant { rate: 5.0 },
            flat_rate(5.0),
        ),
        preset(
            "inflation-10pct",
            Inflationary,
            "Stable 10% yearly inflation typical of DeFi, needs strong absorption mechanisms",
            Projection::Constant { rate: 10.0 },
            TokenParameters {
                utility_discount: true,
                incentive_lock: true,
                lock_duration_months: 12,
                ..flat_rate(10.0)
            },
        ),
        preset(
            "inflation-20pct",
            Inflationary,
            "20% yearly inflation, a farming model unsustainable without massive demand",
            Projection::Constant { rate: 20.0 },
            TokenParameters {
                utility_gas: false,
                utility_discount: true,
                incentive_lock: true,
                lock_duration_months: 24,
                ..flat_rate(20.0)
            },
        ),
        preset(
            "decreasing-inflation",
            Inflationary,
            "Inflation stepping down 10% to 1% over five years",
            Projection::Schedule {
                rates: &[10.0, 7.0, 5.0, 3.0, 1.0],
            },
            TokenParameters {
                total_supply: 800_000_000.0,
                inflation_rate: 10.0,
                emission_years_left: 10,
                utility_gas: true,
                incentive_burn: true,
                burn_rate: 0.2,
                ..baseline()
            },
        ),
        preset(
            "halving",
            Inflationary,
            "Issuance halving every two years, starting at 20%",
            Projection::Halving {
                initial: 20.0,
                period: 2,
            },
            TokenParameters {
                total_supply: 700_000_000.0,
                inflation_rate: 20.0,
                emission_years_left: 10,
                team_allocation: 10.0,
                vesting_years: 4,
                top_10_concentration: 25.0,
                utility_collateral: true,
                ..baseline()
            },
        ),
        preset(
            "seasonal-farming",
            Inflationary,
            "Three years of heavy farming emissions followed by a sharp cut",
            Projection::Farming {
                high: 25.0,
                high_years: 3,
                after: 5.0,
            },
            TokenParameters {
                circulating_supply: 300_000_000.0,
                total_supply: 500_000_000.0,
                inflation_rate: 25.0,
                vesting_years: 2,
                top_10_concentration: 35.0,
                utility_discount: true,
                incentive_lock: true,
                lock_duration_months: 24,
                ..baseline()
            },
        ),
        preset(
            "net-burn",
            Inflationary,
            "Burn outpaces emissions, supply shrinks with activity",
            Projection::Constant { rate: -2.0 },
            TokenParameters {
                total_supply: 500_000_000.0,
                max_supply: 500_000_000.0,
                inflation_rate: -2.0,
                emission_years_left: 0,
                team_allocation: 10.0,
                top_10_concentration: 25.0,
                utility_gas: true,
                incentive_burn: true,
                burn_rate: 2.5,
                ..baseline()
            },
        ),
    ]
});

/// The built-in scenario library
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetScenarios;

impl PresetScenarios {
    /// All presets in listing order
    pub fn all(&self) -> &'static [Scenario] {
        &PRESETS
    }

    /// Look up a preset by identifier (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&'static Scenario> {
        let id = id.trim();
        PRESETS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    fn fallback(id: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            category: ScenarioCategory::Structural,
            description: format!("Unknown scenario '{}', default parameters used", id),
            params: baseline(),
            projection: Projection::Constant { rate: DEFAULT_RATE },
            is_fallback: true,
        }
    }
}

impl ScenarioProvider for PresetScenarios {
    fn scenario(&self, id: &str) -> Scenario {
        match self.get(id) {
            Some(scenario) => scenario.clone(),
            None => {
                log::warn!("Unknown scenario '{}', falling back to defaults", id);
                Self::fallback(id)
            }
        }
    }

    fn scenario_ids(&self) -> Vec<&str> {
        PRESETS.iter().map(|s| s.id.as_str()).collect()
    }
}
