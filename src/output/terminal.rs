use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

use super::{FormattingConfig, OutputWriter, ScoreReport};
use crate::recommendations::Severity;
use crate::scoring::VerdictColor;

const TABLE_WIDTH: u16 = 100;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }

    fn write_header(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("Tokenomics Viability Index: {}", report.subject).bold()
        )?;
        if let Some(description) = &report.description {
            writeln!(self.writer, "{}", description.dimmed())?;
        }
        for note in &report.notes {
            writeln!(self.writer, "{} {}", "note:".yellow().bold(), note)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_verdict(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let result = &report.result;
        let headline = format!("{} / 100  {}", result.final_score, result.verdict);
        let headline = match result.verdict_color() {
            VerdictColor::Green => headline.green().bold(),
            VerdictColor::Orange => headline.yellow().bold(),
            VerdictColor::Red => headline.red().bold(),
        };
        writeln!(self.writer, "Final score: {}", headline)?;
        writeln!(
            self.writer,
            "{}",
            format!("Ruleset: {}", result.ruleset).dimmed()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_components(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let result = &report.result;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(TABLE_WIDTH)
            .set_header(vec!["Component", "Score", "Weight", "Details"]);

        for (component, score) in result.components() {
            table.add_row(vec![
                component.label().to_string(),
                score.score.to_string(),
                format!("{:.1}%", result.weights.get(component) * 100.0),
                score.comments.join("\n"),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Recommendations".bold())?;
        if report.recommendations.is_empty() {
            writeln!(self.writer, "  No significant issues detected")?;
            return Ok(());
        }
        for rec in &report.recommendations {
            let symbol = match rec.severity {
                Severity::Positive => rec.severity.symbol().green(),
                Severity::Warning => rec.severity.symbol().yellow(),
                Severity::Critical => rec.severity.symbol().red(),
            };
            writeln!(self.writer, "  {} {}", symbol, rec.text)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        self.formatting.apply();
        self.write_header(report)?;
        self.write_verdict(report)?;
        self.write_components(report)?;
        self.write_recommendations(report)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::tests::reference_params;
    use crate::scoring::score;

    fn render(report: &ScoreReport) -> String {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_report(report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_terminal_report_contents() {
        let report = ScoreReport::new("reference", score(&reference_params()).unwrap())
            .with_note("parameters were typed by hand");
        let text = render(&report);
        assert!(text.contains("68.2 / 100  Good"));
        assert!(text.contains("Utilities: Staking, Governance"));
        assert!(text.contains("note: parameters were typed by hand"));
        assert!(text.contains("Weak utility"));
        assert!(!text.contains("Liquidity"));
    }
}
