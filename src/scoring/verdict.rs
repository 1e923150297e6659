//! Verdict tiers for the final index.

use serde::{Deserialize, Serialize};

use super::score_types::Score;

/// Display colour tag bound to each verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictColor {
    Green,
    Orange,
    Red,
}

/// Verdict tier with inclusive lower bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    VeryRisky,
    Risky,
    Acceptable,
    Good,
    Excellent,
}

impl Verdict {
    /// Determine verdict from score
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            s if s >= 80.0 => Verdict::Excellent,
            s if s >= 65.0 => Verdict::Good,
            s if s >= 50.0 => Verdict::Acceptable,
            s if s >= 35.0 => Verdict::Risky,
            _ => Verdict::VeryRisky,
        }
    }

    /// Get verdict label for display
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::Acceptable => "Acceptable",
            Verdict::Risky => "Risky",
            Verdict::VeryRisky => "Very Risky",
        }
    }

    pub fn color(self) -> VerdictColor {
        match self {
            Verdict::Excellent | Verdict::Good => VerdictColor::Green,
            Verdict::Acceptable | Verdict::Risky => VerdictColor::Orange,
            Verdict::VeryRisky => VerdictColor::Red,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_lower_bounds() {
        let verdict = |v: f64| Verdict::from_score(Score::new(v));
        assert_eq!(verdict(80.0), Verdict::Excellent);
        assert_eq!(verdict(79.99), Verdict::Good);
        assert_eq!(verdict(65.0), Verdict::Good);
        assert_eq!(verdict(50.0), Verdict::Acceptable);
        assert_eq!(verdict(35.0), Verdict::Risky);
        assert_eq!(verdict(34.9), Verdict::VeryRisky);
        assert_eq!(verdict(0.0), Verdict::VeryRisky);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Verdict::Good.color(), VerdictColor::Green);
        assert_eq!(Verdict::Risky.color(), VerdictColor::Orange);
        assert_eq!(Verdict::VeryRisky.color(), VerdictColor::Red);
    }

    #[test]
    fn test_ordering_follows_quality() {
        assert!(Verdict::Excellent > Verdict::Good);
        assert!(Verdict::Risky > Verdict::VeryRisky);
    }
}
