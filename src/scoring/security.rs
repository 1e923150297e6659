//! Security track record scoring.
//!
//! Known tokens are scored from their audit and bug bounty record. For an
//! unlisted token with a market rank, an estimate is derived from the rank
//! alone and flagged as such in the commentary.

use super::{Component, ComponentScore, ComponentScorer, Tally};
use crate::params::{MarketSignals, TokenParameters};
use crate::reference::{security_record, SecurityRecord};

const BASELINE: f64 = 30.0;

/// Score a verified security record.
pub fn score_security_record(record: &SecurityRecord) -> ComponentScore {
    let mut tally = Tally::starting_at(BASELINE);

    let audits = record.audits;
    if audits >= 5 {
        tally.adjust(40.0, format!("Extensively audited: {} audits", audits));
    } else if audits >= 3 {
        tally.adjust(30.0, format!("Well audited: {} audits", audits));
    } else if audits >= 1 {
        tally.adjust(15.0, format!("Audited: {} audit(s)", audits));
    } else {
        tally.note("No published audit");
    }

    let bounty = record.bug_bounty_usd;
    if bounty >= 1_000_000.0 {
        tally.adjust(30.0, format!("Major bug bounty: ${:.1}M", bounty / 1e6));
    } else if bounty >= 100_000.0 {
        tally.adjust(20.0, format!("Bug bounty: ${:.0}k", bounty / 1e3));
    } else if bounty > 0.0 {
        tally.adjust(10.0, format!("Small bug bounty: ${:.0}k", bounty / 1e3));
    } else {
        tally.note("No bug bounty program");
    }

    tally.finish()
}

/// Rough security estimate for tokens without a reference record.
///
/// Rank is a proxy for scrutiny received, not evidence of audits.
pub fn estimate_from_rank(rank: u32) -> ComponentScore {
    let score = match rank {
        0..=10 => 80.0,
        11..=50 => 65.0,
        51..=200 => 45.0,
        _ => 25.0,
    };
    ComponentScore::new(
        score,
        vec![format!(
            "Estimated from market rank #{} (no verified security data)",
            rank
        )],
    )
}

/// Score security, or `None` when the token is unlisted and unranked.
pub fn score_security(market: &MarketSignals) -> Option<ComponentScore> {
    let record = market.identifier.as_deref().and_then(security_record);
    match (record, market.market_cap_rank) {
        (Some(record), _) => Some(score_security_record(&record)),
        (None, Some(rank)) => Some(estimate_from_rank(rank)),
        (None, None) => None,
    }
}

/// [`ComponentScorer`] for [`Component::Security`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityScorer;

impl ComponentScorer for SecurityScorer {
    fn component(&self) -> Component {
        Component::Security
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        params.market().and_then(score_security)
    }
}
