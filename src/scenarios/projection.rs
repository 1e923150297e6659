//! Yearly inflation curves.

use serde::Serialize;

/// Shape of a yearly inflation curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    /// Same rate every year
    Constant { rate: f64 },
    /// Explicit yearly rates, the last one repeats once the schedule runs out
    Schedule { rates: &'static [f64] },
    /// Rate halves every `period` years
    Halving { initial: f64, period: usize },
    /// High rate for a fixed number of years, then a lower steady rate
    Farming { high: f64, high_years: usize, after: f64 },
}

impl Projection {
    /// Rates for the first `years` years
    pub fn rates(&self, years: usize) -> Vec<f64> {
        (0..years).map(|year| self.rate_at(year)).collect()
    }

    /// Rate in year `year` (zero based)
    pub fn rate_at(&self, year: usize) -> f64 {
        match *self {
            Projection::Constant { rate } => rate,
            Projection::Schedule { rates } => rates
                .get(year)
                .or_else(|| rates.last())
                .copied()
                .unwrap_or(0.0),
            Projection::Halving { initial, period } => {
                let halvings = if period == 0 { 0 } else { year / period };
                initial / 2f64.powi(i32::try_from(halvings).unwrap_or(i32::MAX))
            }
            Projection::Farming {
                high,
                high_years,
                after,
            } => {
                if year < high_years {
                    high
                } else {
                    after
                }
            }
        }
    }
}
