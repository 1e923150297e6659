//! Governance safeguards scoring.
//!
//! Concentration is reused from the distribution inputs: a few large holders
//! can capture on-chain governance whatever the formal safeguards are.

use super::{Component, ComponentScore, ComponentScorer, Tally};
use crate::params::TokenParameters;

pub fn score_governance(
    gov_timelock: bool,
    gov_multisig: bool,
    gov_dao_active: bool,
    top_10_concentration: f64,
) -> ComponentScore {
    let mut tally = Tally::starting_at(100.0);

    if gov_timelock {
        tally.note("Timelock present");
    } else {
        tally.adjust(-30.0, "No timelock");
    }

    if gov_multisig {
        tally.note("Multisig present");
    } else {
        tally.adjust(-20.0, "No multisig");
    }

    if gov_dao_active {
        tally.note("DAO active");
    } else {
        tally.adjust(-25.0, "DAO not active");
    }

    if top_10_concentration > 50.0 {
        tally.adjust(-25.0, "Governance capture risk (high concentration)");
    } else if top_10_concentration > 35.0 {
        tally.adjust(-15.0, "Governance capture risk (moderate concentration)");
    }

    tally.finish()
}

/// [`ComponentScorer`] for [`Component::Governance`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GovernanceScorer;

impl ComponentScorer for GovernanceScorer {
    fn component(&self) -> Component {
        Component::Governance
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        Some(score_governance(
            params.gov_timelock,
            params.gov_multisig,
            params.gov_dao_active,
            params.top_10_concentration,
        ))
    }
}
