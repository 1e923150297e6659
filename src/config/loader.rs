use std::fs;
use std::path::{Path, PathBuf};

use super::core::TokenomicsConfig;
use crate::errors::{Error, Result};

/// File searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".tokenomics.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Written by `tokenomics init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# Tokenomics viability index configuration

[scoring]
# "extended" (8 components, canonical) or "legacy" (5 core components)
ruleset = "extended"

# Optional per-component weight overrides. Base weights (everything except
# security) must sum to 1.0; security is a bonus of at most 0.05.
# [scoring.weights]
# inflation = 0.20
# distribution = 0.15
# utility = 0.20
# governance = 0.10
# incentives = 0.10
# liquidity = 0.15
# adoption = 0.10
# security = 0.05

[output]
# "terminal" or "json"
default_format = "terminal"
"#;

/// Parse a config document, dropping invalid weight overrides.
///
/// Syntax errors are reported. Weights that fail validation are replaced by
/// the ruleset defaults with a warning so that a typo in one weight does not
/// stop scoring altogether.
pub fn parse_and_validate_config(contents: &str) -> Result<TokenomicsConfig> {
    let mut config: TokenomicsConfig = toml::from_str(contents)?;

    if config.scoring.weights.is_some() {
        if let Err(e) = config.scoring.weight_table().validate() {
            log::warn!("Invalid scoring weights: {}. Using defaults.", e);
            config.scoring.weights = None;
        }
    }

    Ok(config)
}

/// Load an explicitly named config file. Every failure is an error.
pub fn load_config_from(path: &Path) -> Result<TokenomicsConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Cannot read config file", path, e))?;
    parse_and_validate_config(&contents).map_err(|e| match e {
        Error::Toml(toml_error) => Error::Configuration(format!(
            "Failed to parse {}: {}",
            path.display(),
            toml_error
        )),
        other => other,
    })
}

fn try_load_config_from_path(path: &Path) -> Option<TokenomicsConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}. Using defaults.", path.display(), e);
            None
        }
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tokenomics").join("config.toml"))
}

/// Discover configuration from `start` upward, then the user config dir.
pub(crate) fn discover_config(start: PathBuf) -> TokenomicsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No config found, using defaults");
            TokenomicsConfig::default()
        })
}

/// Discover configuration from the current directory.
pub fn load_config() -> TokenomicsConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            TokenomicsConfig::default()
        }
    }
}
