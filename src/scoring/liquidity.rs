//! Market liquidity scoring from 24h volume and turnover.

use super::{Component, ComponentScore, ComponentScorer, Tally};
use crate::params::{MarketSignals, TokenParameters};

const BASELINE: f64 = 50.0;

/// Turnover (percent of market cap per day) above which volume is suspect
pub const WASH_TRADING_TURNOVER: f64 = 50.0;

/// Score liquidity, or `None` when neither volume nor turnover is known.
pub fn score_liquidity(market: &MarketSignals) -> Option<ComponentScore> {
    let turnover = market.turnover_percent();
    if market.volume_24h.is_none() && turnover.is_none() {
        return None;
    }

    let mut tally = Tally::starting_at(BASELINE);

    if let Some(turnover) = turnover {
        apply_turnover(&mut tally, turnover);
    }
    if let Some(volume) = market.volume_24h {
        apply_volume(&mut tally, volume);
    }
    match market.market_cap_rank {
        Some(rank) if rank <= 20 => tally.adjust(10.0, format!("Deep market (rank #{})", rank)),
        Some(rank) if rank <= 100 => tally.adjust(5.0, format!("Established market (rank #{})", rank)),
        _ => {}
    }

    Some(tally.finish())
}

fn apply_turnover(tally: &mut Tally, turnover: f64) {
    if turnover > WASH_TRADING_TURNOVER {
        tally.note(format!(
            "Suspicious turnover: {:.1}% of market cap (possible wash trading)",
            turnover
        ));
    } else if turnover >= 10.0 {
        tally.adjust(25.0, format!("High turnover: {:.1}%", turnover));
    } else if turnover >= 5.0 {
        tally.adjust(15.0, format!("Healthy turnover: {:.1}%", turnover));
    } else if turnover >= 2.0 {
        tally.adjust(5.0, format!("Moderate turnover: {:.1}%", turnover));
    } else if turnover >= 0.5 {
        tally.adjust(-10.0, format!("Low turnover: {:.1}%", turnover));
    } else {
        tally.adjust(-25.0, format!("Illiquid: {:.2}% turnover", turnover));
    }
}

fn apply_volume(tally: &mut Tally, volume: f64) {
    let millions = volume / 1e6;
    if volume >= 1e9 {
        tally.adjust(20.0, format!("Very high volume: ${:.0}M", millions));
    } else if volume >= 1e8 {
        tally.adjust(15.0, format!("High volume: ${:.0}M", millions));
    } else if volume >= 1e7 {
        tally.adjust(5.0, format!("Moderate volume: ${:.1}M", millions));
    } else if volume >= 1e6 {
        tally.note(format!("Thin volume: ${:.1}M", millions));
    } else {
        tally.adjust(-15.0, format!("Negligible volume: ${:.0}", volume));
    }
}

/// [`ComponentScorer`] for [`Component::Liquidity`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityScorer;

impl ComponentScorer for LiquidityScorer {
    fn component(&self) -> Component {
        Component::Liquidity
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        params.market().and_then(score_liquidity)
    }
}
