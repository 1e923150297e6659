//! Symbol aliases for popular tokens.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Ticker symbol (lower case) to canonical identifier.
static SYMBOL_TO_ID: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("btc", "bitcoin"),
        ("eth", "ethereum"),
        ("usdt", "tether"),
        ("bnb", "binancecoin"),
        ("sol", "solana"),
        ("xrp", "ripple"),
        ("usdc", "usd-coin"),
        ("ada", "cardano"),
        ("avax", "avalanche-2"),
        ("doge", "dogecoin"),
        ("trx", "tron"),
        ("dot", "polkadot"),
        ("matic", "matic-network"),
        ("link", "chainlink"),
        ("wbtc", "wrapped-bitcoin"),
        ("shib", "shiba-inu"),
        ("dai", "dai"),
        ("uni", "uniswap"),
        ("atom", "cosmos"),
        ("etc", "ethereum-classic"),
        ("ltc", "litecoin"),
        ("bch", "bitcoin-cash"),
        ("xlm", "stellar"),
        ("near", "near"),
        ("apt", "aptos"),
        ("arb", "arbitrum"),
        ("op", "optimism"),
        ("vet", "vechain"),
        ("algo", "algorand"),
        ("fil", "filecoin"),
        ("icp", "internet-computer"),
        ("inj", "injective-protocol"),
        ("mkr", "maker"),
        ("aave", "aave"),
        ("crv", "curve-dao-token"),
        ("snx", "havven"),
        ("comp", "compound-governance-token"),
        ("sushi", "sushi"),
        ("1inch", "1inch"),
        ("grt", "the-graph"),
        ("axs", "axie-infinity"),
        ("sand", "the-sandbox"),
        ("mana", "decentraland"),
        ("ftm", "fantom"),
        ("hbar", "hedera-hashgraph"),
        ("cake", "pancakeswap-token"),
        ("ldo", "lido-dao"),
        ("rpl", "rocket-pool"),
        ("pendle", "pendle"),
    ])
});

/// Normalize user input (symbol or identifier) to a canonical identifier.
///
/// Input is trimmed and lower-cased; known symbols are mapped to their
/// identifier, anything else is returned as-is since it may already be one.
pub fn normalize_token_id(input: &str) -> String {
    let normalized = input.trim().to_lowercase();
    match SYMBOL_TO_ID.get(normalized.as_str()) {
        Some(id) => (*id).to_string(),
        None => normalized,
    }
}
