//! `.tokenomics.toml` configuration.
//!
//! ```toml
//! [scoring]
//! ruleset = "extended"
//!
//! [scoring.weights]
//! inflation = 0.25
//! utility = 0.15
//!
//! [output]
//! default_format = "terminal"
//! ```

mod core;
mod loader;

pub use self::core::{OutputConfig, ScoringConfig, TokenomicsConfig, WeightOverrides};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML,
};
