//! Adoption scoring from market capitalisation, rank and momentum.

use super::{Component, ComponentScore, ComponentScorer, Tally};
use crate::params::{MarketSignals, TokenParameters};

const BASELINE: f64 = 30.0;

/// Score adoption, or `None` when neither market cap nor rank is known.
pub fn score_adoption(market: &MarketSignals) -> Option<ComponentScore> {
    if market.market_cap_usd.is_none() && market.market_cap_rank.is_none() {
        return None;
    }

    let mut tally = Tally::starting_at(BASELINE);

    if let Some(cap) = market.market_cap_usd {
        apply_market_cap(&mut tally, cap);
    }
    if let Some(rank) = market.market_cap_rank {
        apply_rank(&mut tally, rank);
    }
    if let Some(change) = market.price_change_30d {
        apply_momentum(&mut tally, change);
    }

    Some(tally.finish())
}

fn apply_market_cap(tally: &mut Tally, cap: f64) {
    let billions = cap / 1e9;
    if cap >= 1e10 {
        tally.adjust(35.0, format!("Large cap: ${:.1}B", billions));
    } else if cap >= 1e9 {
        tally.adjust(25.0, format!("Mid cap: ${:.1}B", billions));
    } else if cap >= 1e8 {
        tally.adjust(15.0, format!("Small cap: ${:.0}M", cap / 1e6));
    } else if cap >= 1e7 {
        tally.adjust(5.0, format!("Micro cap: ${:.0}M", cap / 1e6));
    } else {
        tally.adjust(-10.0, format!("Nano cap: ${:.0}", cap));
    }
}

fn apply_rank(tally: &mut Tally, rank: u32) {
    if rank <= 10 {
        tally.adjust(25.0, format!("Top 10 asset (#{})", rank));
    } else if rank <= 50 {
        tally.adjust(15.0, format!("Top 50 asset (#{})", rank));
    } else if rank <= 200 {
        tally.adjust(5.0, format!("Top 200 asset (#{})", rank));
    } else if rank > 500 {
        tally.adjust(-10.0, format!("Long-tail asset (#{})", rank));
    } else {
        tally.note(format!("Ranked #{}", rank));
    }
}

fn apply_momentum(tally: &mut Tally, change: f64) {
    if change >= 20.0 {
        tally.adjust(10.0, format!("Strong 30d momentum: {:+.1}%", change));
    } else if change >= 0.0 {
        tally.adjust(5.0, format!("Positive 30d momentum: {:+.1}%", change));
    } else if change >= -20.0 {
        tally.note(format!("Mild 30d decline: {:+.1}%", change));
    } else if change >= -50.0 {
        tally.adjust(-10.0, format!("Significant 30d decline: {:+.1}%", change));
    } else {
        tally.adjust(-20.0, format!("Severe 30d decline: {:+.1}%", change));
    }
}

/// [`ComponentScorer`] for [`Component::Adoption`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AdoptionScorer;

impl ComponentScorer for AdoptionScorer {
    fn component(&self) -> Component {
        Component::Adoption
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        params.market().and_then(score_adoption)
    }
}
