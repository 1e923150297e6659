//! Holder incentive scoring: locks, staking rewards and burns.
//!
//! The baseline is 40, not 100. Having no incentive mechanism is a weakness
//! rather than a failure, so the scorer mostly adds points.

use super::{Component, ComponentScore, ComponentScorer, Tally};
use crate::params::TokenParameters;

const BASELINE: f64 = 40.0;

pub fn score_incentives(
    incentive_lock: bool,
    incentive_staking: bool,
    incentive_burn: bool,
    lock_duration_months: u32,
    burn_rate: f64,
    inflation_rate: f64,
) -> ComponentScore {
    let mut tally = Tally::starting_at(BASELINE);

    if incentive_lock {
        apply_lock(&mut tally, lock_duration_months);
    } else {
        tally.note("No lock mechanism");
    }

    if incentive_staking {
        tally.adjust(20.0, "Staking rewards available");
    } else {
        tally.note("No staking rewards");
    }

    if incentive_burn {
        apply_burn(&mut tally, burn_rate, inflation_rate);
    } else {
        tally.note("No burn mechanism");
    }

    let active = [incentive_lock, incentive_staking, incentive_burn]
        .iter()
        .filter(|flag| **flag)
        .count();
    match active {
        3 => tally.adjust(10.0, "Full synergy (lock + staking + burn)"),
        0 => tally.adjust(-20.0, "No incentive mechanism"),
        _ => {}
    }

    tally.finish()
}

fn apply_lock(tally: &mut Tally, months: u32) {
    if months >= 24 {
        tally.adjust(30.0, format!("Long-term lock: {} months", months));
    } else if months >= 12 {
        tally.adjust(20.0, format!("Medium-term lock: {} months", months));
    } else if months >= 6 {
        tally.adjust(10.0, format!("Short-term lock: {} months", months));
    } else {
        tally.adjust(5.0, format!("Very short lock: {} months", months));
    }
}

/// Whether burning outpaces issuance.
///
/// With positive inflation the burn rate must exceed it. With net-negative
/// inflation any positive burn already outpaces issuance. A zero inflation
/// rate has nothing to outpace.
pub fn burn_exceeds_inflation(burn_rate: f64, inflation_rate: f64) -> bool {
    burn_rate > 0.0 && inflation_rate != 0.0 && burn_rate > inflation_rate
}

fn apply_burn(tally: &mut Tally, burn_rate: f64, inflation_rate: f64) {
    if burn_exceeds_inflation(burn_rate, inflation_rate) {
        tally.adjust(
            25.0,
            format!(
                "Burn exceeds inflation: {:.1}% burn vs {:.1}% inflation",
                burn_rate, inflation_rate
            ),
        );
    } else if burn_rate >= 1.0 {
        tally.adjust(20.0, format!("Significant burn: {:.1}%", burn_rate));
    } else if burn_rate >= 0.5 {
        tally.adjust(15.0, format!("Moderate burn: {:.1}%", burn_rate));
    } else if burn_rate > 0.0 {
        tally.adjust(10.0, format!("Low burn: {:.1}%", burn_rate));
    } else {
        tally.note("Burn mechanism declared with a zero burn rate");
    }
}

/// [`ComponentScorer`] for [`Component::Incentives`]
#[derive(Debug, Clone, Copy, Default)]
pub struct IncentivesScorer;

impl ComponentScorer for IncentivesScorer {
    fn component(&self) -> Component {
        Component::Incentives
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        Some(score_incentives(
            params.incentive_lock,
            params.incentive_staking,
            params.incentive_burn,
            params.lock_duration_months,
            params.burn_rate,
            params.inflation_rate,
        ))
    }
}
