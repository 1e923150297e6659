//! Viability index scoring.
//!
//! The index is computed in three steps:
//! - each [`ComponentScorer`] maps a narrow slice of [`TokenParameters`] to a
//!   0-100 score plus sub-factor comments
//! - the [`aggregator`] weights the component scores into the final index and
//!   maps it to a [`Verdict`]
//! - [`crate::recommendations`] derives advisory text from the result
//!
//! Every scorer is a pure function of its inputs. Rules inside a scorer are
//! additive: each contributes at most one delta and one comment, in rule order.
//!
//! Core components (inflation, distribution, utility, governance, incentives)
//! always produce a score. Market-signal components (liquidity, adoption,
//! security) produce `None` when the signals they need are absent.

pub mod adoption;
pub mod aggregator;
pub mod distribution;
pub mod engine;
pub mod governance;
pub mod incentives;
pub mod inflation;
pub mod liquidity;
pub mod score_types;
pub mod security;
pub mod utility;
pub mod verdict;
pub mod weights;

use serde::{Deserialize, Serialize};

use crate::params::TokenParameters;
use score_types::Score;

pub use aggregator::{aggregate, ComponentScores, ScoreResult};
pub use engine::{score, ScoringEngine};
pub use verdict::{Verdict, VerdictColor};
pub use weights::{Ruleset, WeightTable};

/// Separator used when rendering a component's comments as one line.
pub const COMMENT_SEPARATOR: &str = " | ";

/// Scored dimension of the viability index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Inflation,
    Distribution,
    Utility,
    Governance,
    Incentives,
    Liquidity,
    Adoption,
    Security,
}

impl Component {
    /// All components in reporting order
    pub const ALL: [Component; 8] = [
        Component::Inflation,
        Component::Distribution,
        Component::Utility,
        Component::Governance,
        Component::Incentives,
        Component::Liquidity,
        Component::Adoption,
        Component::Security,
    ];

    /// Components every ruleset scores
    pub const CORE: [Component; 5] = [
        Component::Inflation,
        Component::Distribution,
        Component::Utility,
        Component::Governance,
        Component::Incentives,
    ];

    /// Get component label for display
    pub fn label(self) -> &'static str {
        match self {
            Component::Inflation => "Inflation",
            Component::Distribution => "Distribution",
            Component::Utility => "Utility",
            Component::Governance => "Governance",
            Component::Incentives => "Incentives",
            Component::Liquidity => "Liquidity",
            Component::Adoption => "Adoption",
            Component::Security => "Security",
        }
    }

    /// Whether the component is scored only from market signals
    pub fn is_market_signal(self) -> bool {
        matches!(
            self,
            Component::Liquidity | Component::Adoption | Component::Security
        )
    }

    /// Whether the component's weight is a bonus on top of the base weights
    pub fn is_bonus(self) -> bool {
        matches!(self, Component::Security)
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score and explanation for one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub score: Score,
    pub comments: Vec<String>,
}

impl ComponentScore {
    pub fn new(score: f64, comments: Vec<String>) -> Self {
        Self {
            score: Score::new(score),
            comments,
        }
    }

    /// Raw 0-100 value
    pub fn value(&self) -> f64 {
        self.score.value()
    }

    /// Sub-factor comments joined with [`COMMENT_SEPARATOR`]
    pub fn comment(&self) -> String {
        self.comments.join(COMMENT_SEPARATOR)
    }
}

/// Pluggable scorer behind the `(params -> score, comment)` contract.
///
/// New rules are added by implementing this trait and registering the scorer
/// with a [`ScoringEngine`]; the aggregator only sees component scores.
pub trait ComponentScorer: Send + Sync {
    /// Component this scorer produces
    fn component(&self) -> Component;

    /// Score the parameters, or `None` when the required inputs are absent
    fn evaluate(&self, params: &TokenParameters) -> Option<ComponentScore>;
}

/// Running point total for one component.
///
/// Starts from a base value and records one comment per rule. Clamping is
/// applied once, when the tally is finished.
#[derive(Debug, Clone)]
pub(crate) struct Tally {
    points: f64,
    comments: Vec<String>,
}

impl Tally {
    pub(crate) fn starting_at(base: f64) -> Self {
        Self {
            points: base,
            comments: Vec::new(),
        }
    }

    /// Apply a delta and record why
    pub(crate) fn adjust(&mut self, delta: f64, comment: impl Into<String>) {
        self.points += delta;
        self.comments.push(comment.into());
    }

    /// Record a comment without changing the score
    pub(crate) fn note(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub(crate) fn finish(self) -> ComponentScore {
        ComponentScore::new(self.points, self.comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_clamps_once_at_finish() {
        let mut tally = Tally::starting_at(100.0);
        tally.adjust(10.0, "bonus");
        tally.adjust(-5.0, "deduction");
        let score = tally.finish();
        assert_eq!(score.value(), 100.0);
        assert_eq!(score.comment(), "bonus | deduction");
    }

    #[test]
    fn test_tally_note_keeps_points() {
        let mut tally = Tally::starting_at(40.0);
        tally.note("informational");
        let score = tally.finish();
        assert_eq!(score.value(), 40.0);
        assert_eq!(score.comments, vec!["informational".to_string()]);
    }

    #[test]
    fn test_component_partitions() {
        let market: Vec<_> = Component::ALL
            .iter()
            .filter(|c| c.is_market_signal())
            .collect();
        assert_eq!(market.len(), 3);
        assert!(Component::CORE.iter().all(|c| !c.is_market_signal()));
        assert!(Component::Security.is_bonus());
        assert!(!Component::Liquidity.is_bonus());
    }
}
