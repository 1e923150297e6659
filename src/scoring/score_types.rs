//! Type-safe score scale for the viability index.
//!
//! Every component score and the final index live on the same 0-100 scale.
//! Encoding the bound in the type means a score can never leave the range,
//! whatever sequence of bonuses and deductions produced it.
//!
//! # Examples
//!
//! ```rust
//! use tokenomics::scoring::score_types::Score;
//!
//! let score = Score::new(85.0);
//! assert_eq!(score.value(), 85.0);
//!
//! // Out-of-bounds values are clamped
//! assert_eq!(Score::new(110.0).value(), 100.0);
//! assert_eq!(Score::new(-20.0).value(), 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Lower bound of the score scale.
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 100.0;

/// Score on the 0-100 scale.
///
/// Values are automatically clamped to the [0.0, 100.0] range, including
/// values read back from serialized results.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64")]
pub struct Score(f64);

impl Score {
    /// Create a new score, clamping to [0.0, 100.0].
    ///
    /// A NaN input is treated as the lower bound.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(MIN_SCORE);
        }
        Self(value.clamp(MIN_SCORE, MAX_SCORE))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Contribution of this score under the given weight.
    pub fn weighted(self, weight: f64) -> f64 {
        self.0 * weight
    }

    /// Value rounded to one decimal, as shown in reports.
    pub fn rounded(self) -> f64 {
        (self.0 * 10.0).round() / 10.0
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

// Implement Display for user-facing output
impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
