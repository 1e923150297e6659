use serde::{Deserialize, Serialize};

use super::ProviderError;

/// Market fields for one token at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Canonical identifier, e.g. `ethereum`
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub circulating_supply: f64,
    #[serde(default)]
    pub total_supply: f64,
    /// `None` for uncapped supply
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub market_cap_usd: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub price_change_30d: Option<f64>,
}

impl MarketSnapshot {
    /// Reject snapshots whose supply figures are unusable.
    pub fn check(&self) -> Result<(), ProviderError> {
        let malformed = |reason: String| ProviderError::Malformed {
            token: self.id.clone(),
            reason,
        };

        let supplies = [
            ("circulating_supply", Some(self.circulating_supply)),
            ("total_supply", Some(self.total_supply)),
            ("max_supply", self.max_supply),
            ("market_cap_usd", self.market_cap_usd),
            ("volume_24h", self.volume_24h),
        ];
        for (field, value) in supplies {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(malformed(format!("{} must be a non-negative number", field)));
                }
            }
        }
        if self.market_cap_rank == Some(0) {
            return Err(malformed("market_cap_rank starts at 1".to_string()));
        }
        Ok(())
    }
}
