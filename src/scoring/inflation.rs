//! Inflation and dilution scoring.
//!
//! Starts at 100 and applies four independent deductions: dilution
//! potential, annual inflation, emission runway and circulating ratio.
//! A negative inflation rate (net burn) earns a bonus instead.

use super::{Component, ComponentScore, ComponentScorer, Tally};
use crate::params::{TokenParameters, INDEFINITE_EMISSION_YEARS};

/// Score supply dilution and emission pressure.
pub fn score_inflation(
    circulating_supply: f64,
    total_supply: f64,
    max_supply: f64,
    inflation_rate: f64,
    emission_years_left: u32,
) -> ComponentScore {
    let mut tally = Tally::starting_at(100.0);

    apply_dilution(&mut tally, circulating_supply, max_supply);
    apply_inflation_rate(&mut tally, inflation_rate);
    apply_emission_runway(&mut tally, emission_years_left);
    apply_circulating_ratio(&mut tally, circulating_supply, total_supply);

    tally.finish()
}

/// Percentage growth in circulating supply still possible under the cap.
///
/// `None` when the supply is uncapped or nothing circulates yet.
pub fn dilution_potential(circulating_supply: f64, max_supply: f64) -> Option<f64> {
    if max_supply > 0.0 && circulating_supply > 0.0 {
        Some((max_supply - circulating_supply) / circulating_supply * 100.0)
    } else {
        None
    }
}

fn apply_dilution(tally: &mut Tally, circulating_supply: f64, max_supply: f64) {
    let Some(dilution) = dilution_potential(circulating_supply, max_supply) else {
        return;
    };

    if dilution > 300.0 {
        tally.adjust(-40.0, format!("Massive dilution potential: {:.1}%", dilution));
    } else if dilution > 150.0 {
        tally.adjust(-30.0, format!("High dilution potential: {:.1}%", dilution));
    } else if dilution > 50.0 {
        tally.adjust(-15.0, format!("Moderate dilution potential: {:.1}%", dilution));
    } else if dilution > 20.0 {
        tally.adjust(-5.0, format!("Low dilution potential: {:.1}%", dilution));
    } else {
        tally.note(format!(
            "Supply almost fully issued ({:.1}% remaining)",
            dilution
        ));
    }
}

fn apply_inflation_rate(tally: &mut Tally, inflation_rate: f64) {
    if inflation_rate < 0.0 {
        tally.adjust(
            10.0,
            format!("Negative inflation (net burn): {:.1}%", inflation_rate),
        );
    } else if inflation_rate <= 2.0 {
        tally.note(format!("Very low inflation: {:.1}%", inflation_rate));
    } else if inflation_rate <= 5.0 {
        tally.adjust(-5.0, format!("Moderate inflation: {:.1}%", inflation_rate));
    } else if inflation_rate <= 10.0 {
        tally.adjust(-15.0, format!("High inflation: {:.1}%", inflation_rate));
    } else if inflation_rate <= 20.0 {
        tally.adjust(-25.0, format!("Very high inflation: {:.1}%", inflation_rate));
    } else {
        tally.adjust(-35.0, format!("Excessive inflation: {:.1}%", inflation_rate));
    }
}

fn apply_emission_runway(tally: &mut Tally, emission_years_left: u32) {
    if emission_years_left >= INDEFINITE_EMISSION_YEARS {
        tally.adjust(-15.0, "Emissions continue indefinitely");
    } else if emission_years_left > 10 {
        tally.adjust(
            -15.0,
            format!("Long emission schedule ({} years)", emission_years_left),
        );
    } else if emission_years_left > 5 {
        tally.adjust(
            -8.0,
            format!("Medium emission schedule ({} years)", emission_years_left),
        );
    } else if emission_years_left > 0 {
        tally.adjust(
            -3.0,
            format!("Short emission schedule ({} years)", emission_years_left),
        );
    } else {
        tally.note("No further emissions planned");
    }
}

fn apply_circulating_ratio(tally: &mut Tally, circulating_supply: f64, total_supply: f64) {
    if total_supply <= 0.0 || circulating_supply <= 0.0 {
        return;
    }

    let ratio = circulating_supply / total_supply * 100.0;
    if ratio < 20.0 {
        tally.adjust(-10.0, format!("Very little supply circulating: {:.1}%", ratio));
    } else if ratio < 40.0 {
        tally.adjust(-5.0, format!("Little supply circulating: {:.1}%", ratio));
    } else if ratio > 90.0 {
        tally.note(format!("Supply mostly circulating: {:.1}%", ratio));
    }
}

/// [`ComponentScorer`] for [`Component::Inflation`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InflationScorer;

impl ComponentScorer for InflationScorer {
    fn component(&self) -> Component {
        Component::Inflation
    }

    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore> {
        Some(score_inflation(
            params.circulating_supply,
            params.total_supply,
            params.max_supply,
            params.inflation_rate,
            params.emission_years_left,
        ))
    }
}
