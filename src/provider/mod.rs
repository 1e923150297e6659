//! Market data provider contract and an offline implementation.
//!
//! Providers are queried by token identifier and return a
//! [`MarketSnapshot`]. The [`translate`] module turns a snapshot into
//! [`TokenParameters`](crate::params::TokenParameters) using heuristics and
//! curated overrides. No network client ships with the crate; snapshots are
//! supplied in memory or from a JSON file.

mod snapshot;
mod static_data;
pub mod translate;

use thiserror::Error;

pub use snapshot::MarketSnapshot;
pub use static_data::StaticMarketData;
pub use translate::{params_from_snapshot, TranslatedParams};

/// Failures reported by a market data provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No data exists for the requested token
    #[error("No market data found for '{token}'")]
    NotFound { token: String },

    /// Data exists but cannot be used
    #[error("Malformed market data for '{token}': {reason}")]
    Malformed { token: String, reason: String },
}

/// Source of market snapshots
pub trait MarketDataProvider {
    /// Fetch the latest snapshot for a symbol or identifier
    fn fetch(&self, token: &str) -> Result<MarketSnapshot, ProviderError>;
}
