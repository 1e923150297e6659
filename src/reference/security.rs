//! Audit and bug bounty reference records.
//!
//! The figures are illustrative snapshots of public audit reports and bounty
//! programs. They are not refreshed at runtime.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::symbols::normalize_token_id;

/// Security track record for one token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecurityRecord {
    /// Number of independent audits published
    pub audits: u32,
    /// Largest bug bounty payout on offer, in USD
    pub bug_bounty_usd: f64,
}

const fn record(audits: u32, bug_bounty_usd: f64) -> SecurityRecord {
    SecurityRecord {
        audits,
        bug_bounty_usd,
    }
}

static SECURITY_RECORDS: Lazy<HashMap<&'static str, SecurityRecord>> = Lazy::new(|| {
    HashMap::from([
        ("bitcoin", record(6, 0.0)),
        ("ethereum", record(8, 1_000_000.0)),
        ("solana", record(4, 1_000_000.0)),
        ("cardano", record(5, 0.0)),
        ("polkadot", record(5, 1_000_000.0)),
        ("avalanche-2", record(4, 1_000_000.0)),
        ("arbitrum", record(5, 2_000_000.0)),
        ("optimism", record(5, 2_000_000.0)),
        ("matic-network", record(4, 2_000_000.0)),
        ("chainlink", record(6, 3_000_000.0)),
        ("uniswap", record(7, 2_250_000.0)),
        ("aave", record(9, 1_000_000.0)),
        ("maker", record(8, 10_000_000.0)),
        ("curve-dao-token", record(6, 250_000.0)),
        ("compound-governance-token", record(6, 150_000.0)),
        ("lido-dao", record(7, 2_000_000.0)),
        ("rocket-pool", record(5, 500_000.0)),
        ("pendle", record(4, 250_000.0)),
        ("sushi", record(3, 200_000.0)),
        ("pancakeswap-token", record(3, 1_000_000.0)),
        ("1inch", record(4, 500_000.0)),
        ("the-sandbox", record(2, 50_000.0)),
        ("axie-infinity", record(2, 0.0)),
        ("decentraland", record(2, 50_000.0)),
        ("dogecoin", record(1, 0.0)),
        ("shiba-inu", record(1, 0.0)),
    ])
});

/// Look up a token's security record.
///
/// Accepts a ticker symbol or an identifier in any case.
pub fn security_record(token: &str) -> Option<SecurityRecord> {
    SECURITY_RECORDS
        .get(normalize_token_id(token).as_str())
        .copied()
}
