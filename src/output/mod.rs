//! Report rendering.
//!
//! A [`ScoreReport`] bundles a scoring result with its recommendations and
//! provenance. Writers implement [`OutputWriter`] and render it to any
//! `io::Write` sink.

mod formatting;
mod json;
mod terminal;

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::recommendations::{generate_recommendations, Recommendation};
use crate::scoring::ScoreResult;

pub use formatting::{ColorMode, FormattingConfig};
pub use json::JsonWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Everything shown to the user for one scored token
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// What was scored, e.g. a scenario id or token identifier
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caveats about the inputs (fallback scenario, estimated parameters)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub result: ScoreResult,
    pub recommendations: Vec<Recommendation>,
}

impl ScoreReport {
    pub fn new(subject: impl Into<String>, result: ScoreResult) -> Self {
        let recommendations = generate_recommendations(&result);
        Self {
            subject: subject.into(),
            description: None,
            notes: Vec::new(),
            result,
            recommendations,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
