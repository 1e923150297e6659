//! Insider allocation, vesting and holder concentration scoring.

use super::{Component, ComponentScore, ComponentScorer, Tally};
use crate::params::TokenParameters;

/// Team allocation (percent) above which vesting is evaluated at all.
pub const VESTING_RELEVANCE_THRESHOLD: f64 = 10.0;

/// Score how concentrated ownership is.
pub fn score_distribution(
    team_allocation: f64,
    vesting_years: u32,
    top_10_concentration: f64,
) -> ComponentScore {
    let mut tally = Tally::starting_at(100.0);

    if team_allocation > 30.0 {
        tally.adjust(-30.0, format!("Excessive team allocation: {:.1}%", team_allocation));
    } else if team_allocation > 20.0 {
        tally.adjust(-20.0, format!("High team allocation: {:.1}%", team_allocation));
    } else if team_allocation > 15.0 {
        tally.adjust(-10.0, format!("Moderate team allocation: {:.1}%", team_allocation));
    } else if team_allocation > 10.0 {
        tally.adjust(-5.0, format!("Acceptable team allocation: {:.1}%", team_allocation));
    } else {
        tally.note(format!("Low team allocation: {:.1}%", team_allocation));
    }

    if team_allocation > VESTING_RELEVANCE_THRESHOLD {
        if vesting_years < 2 {
            tally.adjust(-25.0, format!("Vesting too short: {} years", vesting_years));
        } else if vesting_years < 3 {
            tally.adjust(-15.0, format!("Short vesting: {} years", vesting_years));
        } else if vesting_years < 4 {
            tally.adjust(-5.0, format!("Acceptable vesting: {} years", vesting_years));
        } else {
            tally.note(format!("Solid vesting: {} years", vesting_years));
        }
    }

    if top_10_concentration > 60.0 {
        tally.adjust(
            -45.0,
            format!("Extreme concentration: {:.1}%", top_10_concentration),
        );
    } else if top_10_concentration > 50.0 {
        tally.adjust(
            -35.0,
            format!("Very high concentration: {:.1}%", top_10_concentration),
        );
    } else if top_10_concentration > 40.0 {
        tally.adjust(
            -25.0,
            format!("High concentration: {:.1}%", top_10_concentration),
        );
    } else if top_10_concentration > 30.0 {
        tally.adjust(
            -15.0,
            format!("Moderate concentration: {:.1}%", top_10_concentration),
        );
    } else if top_10_concentration > 20.0 {
        tally.adjust(
            -5.0,
            format!("Acceptable concentration: {:.1}%", top_10_concentration),
        );
    } else {
        tally.note(format!(
            "Well decentralized: {:.1}% held by top 10",
            top_10_concentration
        ));
    }

    tally.finish()
}

/// [`ComponentScorer`] for [`Component::Distribution`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionScorer;

impl ComponentScorer for DistributionScorer {
    fn component(&self) -> Component {
        Component::Distribution
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        Some(score_distribution(
            params.team_allocation,
            params.vesting_years,
            params.top_10_concentration,
        ))
    }
}
