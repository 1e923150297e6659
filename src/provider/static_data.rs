use std::collections::HashMap;
use std::path::Path;

use super::{MarketDataProvider, MarketSnapshot, ProviderError};
use crate::errors::{Error, Result};
use crate::reference::normalize_token_id;

/// Provider backed by snapshots held in memory.
///
/// Lookups accept the canonical identifier, a known ticker alias, or the
/// snapshot's own symbol, in any case.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketData {
    snapshots: HashMap<String, MarketSnapshot>,
}

impl StaticMarketData {
    pub fn new(snapshots: impl IntoIterator<Item = MarketSnapshot>) -> Self {
        let snapshots = snapshots
            .into_iter()
            .map(|s| (s.id.to_lowercase(), s))
            .collect();
        Self { snapshots }
    }

    /// Load a JSON array of snapshots.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Cannot read market data", path, e))?;
        let snapshots: Vec<MarketSnapshot> = serde_json::from_str(&contents)?;
        log::debug!(
            "Loaded {} market snapshots from {}",
            snapshots.len(),
            path.display()
        );
        Ok(Self::new(snapshots))
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl MarketDataProvider for StaticMarketData {
    fn fetch(&self, token: &str) -> std::result::Result<MarketSnapshot, ProviderError> {
        let id = normalize_token_id(token);
        let snapshot = self
            .snapshots
            .get(&id)
            .or_else(|| {
                self.snapshots
                    .values()
                    .find(|s| s.symbol.eq_ignore_ascii_case(&id))
            })
            .ok_or_else(|| ProviderError::NotFound {
                token: token.to_string(),
            })?;
        snapshot.check()?;
        Ok(snapshot.clone())
    }
}
