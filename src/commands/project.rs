use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::output::OutputFormat;
use crate::scenarios::{PresetScenarios, ScenarioProvider};

#[derive(Debug, Serialize)]
struct ProjectionReport<'a> {
    scenario: &'a str,
    is_fallback: bool,
    rates: Vec<f64>,
}

pub fn write_projection(
    writer: &mut dyn Write,
    scenario_id: &str,
    years: usize,
    format: OutputFormat,
) -> Result<()> {
    let scenario = PresetScenarios.scenario(scenario_id);
    let report = ProjectionReport {
        scenario: &scenario.id,
        is_fallback: scenario.is_fallback,
        rates: scenario.projection.rates(years),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &report)?;
            writeln!(writer)?;
        }
        OutputFormat::Terminal => {
            if report.is_fallback {
                writeln!(
                    writer,
                    "Unknown scenario '{}', showing the default {:.1}% curve",
                    scenario_id,
                    scenario.projection.rate_at(0)
                )?;
            }
            for (year, rate) in report.rates.iter().enumerate() {
                writeln!(writer, "Year {:>2}: {:>6.2}%", year + 1, rate)?;
            }
        }
    }
    Ok(())
}

pub fn project(scenario_id: &str, years: usize, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_projection(&mut handle, scenario_id, years, format)
}
