//! Curated parameter overrides for well-known tokens.
//!
//! Market data only carries supply figures and rank, so the translation
//! layer guesses the qualitative flags. For tokens listed here the guesses
//! are replaced by researched values.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::params::TokenParameters;

/// Partial parameter record: every `Some` field overrides the heuristic value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnownToken {
    pub team_allocation: Option<f64>,
    pub vesting_years: Option<u32>,
    pub top_10_concentration: Option<f64>,
    pub utility_gas: Option<bool>,
    pub utility_staking: Option<bool>,
    pub utility_governance: Option<bool>,
    pub utility_collateral: Option<bool>,
    pub utility_discount: Option<bool>,
    pub gov_timelock: Option<bool>,
    pub gov_multisig: Option<bool>,
    pub gov_dao_active: Option<bool>,
    pub incentive_lock: Option<bool>,
    pub incentive_staking: Option<bool>,
    pub incentive_burn: Option<bool>,
    pub lock_duration_months: Option<u32>,
    pub burn_rate: Option<f64>,
}

impl KnownToken {
    /// Overwrite the fields this record knows about.
    pub fn apply(&self, params: &mut TokenParameters) {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut params.team_allocation, self.team_allocation);
        set(&mut params.vesting_years, self.vesting_years);
        set(&mut params.top_10_concentration, self.top_10_concentration);
        set(&mut params.utility_gas, self.utility_gas);
        set(&mut params.utility_staking, self.utility_staking);
        set(&mut params.utility_governance, self.utility_governance);
        set(&mut params.utility_collateral, self.utility_collateral);
        set(&mut params.utility_discount, self.utility_discount);
        set(&mut params.gov_timelock, self.gov_timelock);
        set(&mut params.gov_multisig, self.gov_multisig);
        set(&mut params.gov_dao_active, self.gov_dao_active);
        set(&mut params.incentive_lock, self.incentive_lock);
        set(&mut params.incentive_staking, self.incentive_staking);
        set(&mut params.incentive_burn, self.incentive_burn);
        set(&mut params.lock_duration_months, self.lock_duration_months);
        set(&mut params.burn_rate, self.burn_rate);
    }
}

static KNOWN_TOKENS: Lazy<HashMap<&'static str, KnownToken>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Layer 1
    map.insert(
        "ethereum",
        KnownToken {
            utility_gas: Some(true),
            utility_staking: Some(true),
            utility_governance: Some(false),
            utility_collateral: Some(true),
            incentive_staking: Some(true),
            incentive_burn: Some(true),
            burn_rate: Some(0.3),
            top_10_concentration: Some(25.0),
            team_allocation: Some(0.0),
            ..Default::default()
        },
    );
    map.insert(
        "bitcoin",
        KnownToken {
            utility_gas: Some(true),
            utility_collateral: Some(true),
            top_10_concentration: Some(15.0),
            team_allocation: Some(0.0),
            gov_timelock: Some(false),
            gov_multisig: Some(false),
            gov_dao_active: Some(false),
            ..Default::default()
        },
    );
    map.insert(
        "solana",
        KnownToken {
            utility_gas: Some(true),
            utility_staking: Some(true),
            utility_governance: Some(false),
            incentive_staking: Some(true),
            top_10_concentration: Some(32.0),
            team_allocation: Some(12.5),
            vesting_years: Some(4),
            ..Default::default()
        },
    );
    map.insert(
        "cardano",
        KnownToken {
            utility_gas: Some(true),
            utility_staking: Some(true),
            utility_governance: Some(true),
            incentive_staking: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(28.0),
            team_allocation: Some(16.0),
            ..Default::default()
        },
    );
    map.insert(
        "avalanche-2",
        KnownToken {
            utility_gas: Some(true),
            utility_staking: Some(true),
            incentive_staking: Some(true),
            top_10_concentration: Some(35.0),
            team_allocation: Some(18.0),
            vesting_years: Some(4),
            ..Default::default()
        },
    );
    map.insert(
        "polkadot",
        KnownToken {
            utility_gas: Some(true),
            utility_staking: Some(true),
            utility_governance: Some(true),
            incentive_staking: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(38.0),
            team_allocation: Some(20.0),
            ..Default::default()
        },
    );

    // Layer 2
    map.insert(
        "arbitrum",
        KnownToken {
            utility_gas: Some(true),
            utility_governance: Some(true),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(26.9),
            vesting_years: Some(4),
            top_10_concentration: Some(42.0),
            ..Default::default()
        },
    );
    map.insert(
        "optimism",
        KnownToken {
            utility_gas: Some(true),
            utility_governance: Some(true),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(25.0),
            vesting_years: Some(4),
            top_10_concentration: Some(40.0),
            ..Default::default()
        },
    );
    map.insert(
        "matic-network",
        KnownToken {
            utility_gas: Some(true),
            utility_staking: Some(true),
            utility_governance: Some(true),
            incentive_staking: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(33.0),
            team_allocation: Some(16.0),
            ..Default::default()
        },
    );

    // DeFi
    map.insert(
        "uniswap",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(false),
            utility_discount: Some(true),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(21.5),
            vesting_years: Some(4),
            top_10_concentration: Some(35.0),
            ..Default::default()
        },
    );
    map.insert(
        "curve-dao-token",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(true),
            utility_discount: Some(true),
            incentive_lock: Some(true),
            lock_duration_months: Some(48),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(15.0),
            top_10_concentration: Some(35.0),
            ..Default::default()
        },
    );
    map.insert(
        "aave",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(true),
            utility_discount: Some(true),
            incentive_staking: Some(true),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(23.0),
            top_10_concentration: Some(32.0),
            ..Default::default()
        },
    );
    map.insert(
        "maker",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(false),
            utility_collateral: Some(true),
            incentive_burn: Some(true),
            burn_rate: Some(0.5),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(0.0),
            top_10_concentration: Some(22.0),
            ..Default::default()
        },
    );
    map.insert(
        "compound-governance-token",
        KnownToken {
            utility_governance: Some(true),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(24.0),
            vesting_years: Some(4),
            top_10_concentration: Some(38.0),
            ..Default::default()
        },
    );
    map.insert(
        "sushi",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(true),
            utility_discount: Some(true),
            incentive_staking: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(30.0),
            team_allocation: Some(10.0),
            ..Default::default()
        },
    );
    map.insert(
        "pancakeswap-token",
        KnownToken {
            utility_governance: Some(true),
            utility_discount: Some(true),
            incentive_burn: Some(true),
            burn_rate: Some(1.2),
            gov_dao_active: Some(false),
            top_10_concentration: Some(45.0),
            team_allocation: Some(15.0),
            ..Default::default()
        },
    );
    map.insert(
        "1inch",
        KnownToken {
            utility_governance: Some(true),
            utility_discount: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(35.0),
            team_allocation: Some(22.5),
            vesting_years: Some(4),
            ..Default::default()
        },
    );
    map.insert(
        "pendle",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(true),
            utility_discount: Some(true),
            incentive_lock: Some(true),
            incentive_staking: Some(true),
            incentive_burn: Some(true),
            lock_duration_months: Some(24),
            burn_rate: Some(0.5),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            team_allocation: Some(12.0),
            top_10_concentration: Some(28.0),
            ..Default::default()
        },
    );

    // Liquid staking
    map.insert(
        "lido-dao",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(false),
            incentive_staking: Some(true),
            gov_timelock: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(42.0),
            team_allocation: Some(20.0),
            ..Default::default()
        },
    );
    map.insert(
        "rocket-pool",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(true),
            incentive_staking: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(28.0),
            team_allocation: Some(18.0),
            ..Default::default()
        },
    );

    // Oracle
    map.insert(
        "chainlink",
        KnownToken {
            utility_gas: Some(true),
            utility_staking: Some(true),
            incentive_staking: Some(true),
            top_10_concentration: Some(38.0),
            team_allocation: Some(35.0),
            vesting_years: Some(5),
            ..Default::default()
        },
    );

    // Gaming
    map.insert(
        "the-sandbox",
        KnownToken {
            utility_governance: Some(true),
            utility_discount: Some(true),
            gov_dao_active: Some(false),
            top_10_concentration: Some(48.0),
            team_allocation: Some(25.0),
            vesting_years: Some(3),
            ..Default::default()
        },
    );
    map.insert(
        "axie-infinity",
        KnownToken {
            utility_governance: Some(true),
            utility_staking: Some(true),
            incentive_staking: Some(true),
            gov_dao_active: Some(false),
            top_10_concentration: Some(52.0),
            team_allocation: Some(21.0),
            ..Default::default()
        },
    );
    map.insert(
        "decentraland",
        KnownToken {
            utility_governance: Some(true),
            gov_dao_active: Some(true),
            top_10_concentration: Some(42.0),
            team_allocation: Some(20.0),
            ..Default::default()
        },
    );

    // Memecoins
    map.insert(
        "dogecoin",
        KnownToken {
            utility_gas: Some(true),
            team_allocation: Some(0.0),
            top_10_concentration: Some(35.0),
            gov_timelock: Some(false),
            gov_multisig: Some(false),
            gov_dao_active: Some(false),
            ..Default::default()
        },
    );
    map.insert(
        "shiba-inu",
        KnownToken {
            incentive_burn: Some(true),
            burn_rate: Some(0.8),
            team_allocation: Some(0.0),
            top_10_concentration: Some(68.0),
            gov_timelock: Some(false),
            gov_multisig: Some(true),
            gov_dao_active: Some(false),
            ..Default::default()
        },
    );

    map
});

/// Curated overrides for a canonical identifier.
pub fn known_token(id: &str) -> Option<&'static KnownToken> {
    KNOWN_TOKENS.get(id)
}
