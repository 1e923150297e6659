//! Immutable reference data loaded once per process.
//!
//! - [`symbols`]: ticker symbol to canonical token identifier
//! - [`security`]: audit and bug bounty records per identifier
//! - [`known_tokens`]: curated parameter overrides for well-known tokens
//!
//! All tables are keyed by the canonical, lower-case identifier returned by
//! [`symbols::normalize_token_id`].

pub mod known_tokens;
pub mod security;
pub mod symbols;

pub use known_tokens::{known_token, KnownToken};
pub use security::{security_record, SecurityRecord};
pub use symbols::normalize_token_id;
