use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

use crate::output::OutputFormat;
use crate::scenarios::{PresetScenarios, Scenario};

#[derive(Serialize)]
struct ScenarioSummary<'a> {
    id: &'a str,
    category: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Scenario> for ScenarioSummary<'a> {
    fn from(scenario: &'a Scenario) -> Self {
        Self {
            id: &scenario.id,
            category: scenario.category.label(),
            description: &scenario.description,
        }
    }
}

pub fn write_scenarios(writer: &mut dyn Write, format: OutputFormat) -> Result<()> {
    let summaries: Vec<ScenarioSummary> =
        PresetScenarios.all().iter().map(ScenarioSummary::from).collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &summaries)?;
            writeln!(writer)?;
        }
        OutputFormat::Terminal => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Scenario", "Category", "Description"]);
            for summary in &summaries {
                table.add_row(vec![summary.id, summary.category, summary.description]);
            }
            writeln!(writer, "{table}")?;
        }
    }
    Ok(())
}

pub fn list_scenarios(format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_scenarios(&mut handle, format)
}
