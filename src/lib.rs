//! Tokenomics viability index.
//!
//! Scores the economic design of a crypto token from supply, emission,
//! distribution, utility, governance and incentive parameters, optionally
//! enriched with market signals, and produces a 0-100 index with a verdict
//! and recommendations.
//!
//! ```rust
//! use tokenomics::scenarios::{PresetScenarios, ScenarioProvider};
//! use tokenomics::{recommend, score};
//!
//! let scenario = PresetScenarios.scenario("pendle-like");
//! let result = score(&scenario.params).unwrap();
//! assert!(result.final_score.value() > 50.0);
//! let _advice: Vec<String> = recommend(&result);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod output;
pub mod params;
pub mod provider;
pub mod recommendations;
pub mod reference;
pub mod scenarios;
pub mod scoring;

pub use crate::errors::{Error, Result};
pub use crate::params::{MarketSignals, TokenParameters};
pub use crate::recommendations::{generate_recommendations, recommend, Recommendation};
pub use crate::scenarios::inflation_projection;
pub use crate::scoring::{score, ScoreResult, ScoringEngine, Verdict};
