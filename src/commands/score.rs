use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{load_config, load_config_from, TokenomicsConfig};
use crate::output::{create_writer, FormattingConfig, OutputFormat, ScoreReport};
use crate::params::TokenParameters;
use crate::provider::{params_from_snapshot, MarketDataProvider, StaticMarketData};
use crate::scenarios::{PresetScenarios, ScenarioProvider};
use crate::scoring::{Ruleset, ScoringEngine};

/// Where the parameters come from
#[derive(Debug, Clone)]
pub enum InputSource {
    File(PathBuf),
    Scenario(String),
    Market { token: String, data: PathBuf },
}

pub struct ScoreConfig {
    pub source: InputSource,
    pub ruleset: Option<Ruleset>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

/// Parameters plus what the report should say about them
pub struct ResolvedInput {
    pub subject: String,
    pub params: TokenParameters,
    pub description: Option<String>,
    pub notes: Vec<String>,
}

pub fn resolve_input(source: &InputSource) -> Result<ResolvedInput> {
    match source {
        InputSource::File(path) => Ok(ResolvedInput {
            subject: path.display().to_string(),
            params: read_params_file(path)?,
            description: None,
            notes: Vec::new(),
        }),
        InputSource::Scenario(id) => {
            let scenario = PresetScenarios.scenario(id);
            let notes = if scenario.is_fallback {
                vec![format!(
                    "Unknown scenario '{}'; default parameters were scored instead",
                    id
                )]
            } else {
                Vec::new()
            };
            Ok(ResolvedInput {
                subject: scenario.id,
                params: scenario.params,
                description: Some(scenario.description),
                notes,
            })
        }
        InputSource::Market { token, data } => {
            let provider = StaticMarketData::from_json_file(data)?;
            let snapshot = provider.fetch(token)?;
            let translated = params_from_snapshot(&snapshot)?;
            let notes = if translated.enriched {
                Vec::new()
            } else {
                vec!["Qualitative parameters are estimated from market rank, not verified".to_string()]
            };
            Ok(ResolvedInput {
                subject: snapshot.id,
                params: translated.params,
                description: Some(translated.description),
                notes,
            })
        }
    }
}

fn read_params_file(path: &Path) -> Result<TokenParameters> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter file {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let params = if is_toml {
        TokenParameters::from_toml_str(&contents)
    } else {
        TokenParameters::from_json_str(&contents)
    };
    params.with_context(|| format!("Invalid parameters in {}", path.display()))
}

/// Engine for the configured ruleset. A ruleset chosen on the command line
/// that differs from the config file discards the file's weight overrides.
pub fn build_engine(config: &TokenomicsConfig, ruleset: Option<Ruleset>) -> Result<ScoringEngine> {
    let mut scoring = config.scoring.clone();
    if let Some(ruleset) = ruleset {
        if ruleset != scoring.ruleset {
            scoring.ruleset = ruleset;
            scoring.weights = None;
        }
    }
    let engine = ScoringEngine::new(scoring.ruleset).with_weights(scoring.weight_table())?;
    Ok(engine)
}

pub fn score_token(config: ScoreConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };

    let engine = build_engine(&file_config, config.ruleset)?;
    let input = resolve_input(&config.source)?;
    log::debug!("Scoring {} with the {} ruleset", input.subject, engine.ruleset());

    let result = engine.score(&input.params)?;
    let mut report = ScoreReport::new(input.subject, result);
    if let Some(description) = input.description {
        report = report.with_description(description);
    }
    for note in input.notes {
        report = report.with_note(note);
    }

    let format = config
        .format
        .unwrap_or(file_config.output.default_format);
    let (writer, formatting): (Box<dyn Write>, FormattingConfig) = match &config.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            (Box::new(file), FormattingConfig::plain())
        }
        None => {
            let formatting = if config.plain {
                FormattingConfig::plain()
            } else {
                FormattingConfig::from_env()
            };
            (Box::new(std::io::stdout()), formatting)
        }
    };

    create_writer(format, writer, formatting).write_report(&report)
}
