//! Scoring orchestration: validate, run the ruleset's scorers, aggregate.

use std::collections::BTreeMap;
use tracing::debug_span;

use super::adoption::AdoptionScorer;
use super::aggregator::{aggregate, ComponentScores, ScoreResult};
use super::distribution::DistributionScorer;
use super::governance::GovernanceScorer;
use super::incentives::IncentivesScorer;
use super::inflation::InflationScorer;
use super::liquidity::LiquidityScorer;
use super::security::SecurityScorer;
use super::utility::UtilityScorer;
use super::weights::{Ruleset, WeightTable};
use super::{Component, ComponentScore, ComponentScorer};
use crate::errors::{Error, Result};
use crate::params::TokenParameters;

/// Default scorer for a component
fn default_scorer(component: Component) -> Box<dyn ComponentScorer> {
    match component {
        Component::Inflation => Box::new(InflationScorer),
        Component::Distribution => Box::new(DistributionScorer),
        Component::Utility => Box::new(UtilityScorer),
        Component::Governance => Box::new(GovernanceScorer),
        Component::Incentives => Box::new(IncentivesScorer),
        Component::Liquidity => Box::new(LiquidityScorer),
        Component::Adoption => Box::new(AdoptionScorer),
        Component::Security => Box::new(SecurityScorer),
    }
}

/// Configured scoring pipeline.
///
/// Holds no mutable state; one engine can score any number of tokens,
/// from any number of threads.
pub struct ScoringEngine {
    ruleset: Ruleset,
    weights: WeightTable,
    scorers: Vec<Box<dyn ComponentScorer>>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(Ruleset::default())
    }
}

impl ScoringEngine {
    /// Engine with the ruleset's default scorers and weights
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            weights: WeightTable::for_ruleset(ruleset),
            scorers: ruleset.components().iter().map(|c| default_scorer(*c)).collect(),
        }
    }

    /// Replace the weight table after validating it
    pub fn with_weights(mut self, weights: WeightTable) -> Result<Self> {
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }

    /// Register a scorer, replacing any scorer for the same component
    pub fn with_scorer(mut self, scorer: Box<dyn ComponentScorer>) -> Self {
        let component = scorer.component();
        self.scorers.retain(|s| s.component() != component);
        self.scorers.push(scorer);
        self
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Score one token.
    pub fn score(&self, params: &TokenParameters) -> Result<ScoreResult> {
        let _span = debug_span!("score_token", ruleset = %self.ruleset).entered();
        params.validate()?;

        let mut scored: BTreeMap<Component, ComponentScore> = BTreeMap::new();
        for scorer in &self.scorers {
            let component = scorer.component();
            match scorer.evaluate(params) {
                Some(score) => {
                    log::debug!("{} scored {}", component, score.score);
                    scored.insert(component, score);
                }
                None => log::debug!("{} not applicable, weight redistributed", component),
            }
        }

        let mut take_core = |component: Component| {
            scored.remove(&component).ok_or_else(|| {
                Error::Configuration(format!("no score produced for core component {}", component))
            })
        };
        let inflation = take_core(Component::Inflation)?;
        let distribution = take_core(Component::Distribution)?;
        let utility = take_core(Component::Utility)?;
        let governance = take_core(Component::Governance)?;
        let incentives = take_core(Component::Incentives)?;

        let scores = ComponentScores {
            inflation,
            distribution,
            utility,
            governance,
            incentives,
            liquidity: scored.remove(&Component::Liquidity),
            adoption: scored.remove(&Component::Adoption),
            security: scored.remove(&Component::Security),
        };

        Ok(aggregate(scores, &self.weights, self.ruleset))
    }
}

/// Score with the canonical extended ruleset and default weights.
pub fn score(params: &TokenParameters) -> Result<ScoreResult> {
    ScoringEngine::default().score(params)
}
