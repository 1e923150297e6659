use std::io::Write;

use super::{OutputWriter, ScoreReport};

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::tests::reference_params;
    use crate::scoring::score;

    #[test]
    fn test_json_report_shape() {
        let report = ScoreReport::new("reference", score(&reference_params()).unwrap());
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["subject"], "reference");
        assert_eq!(value["result"]["verdict"], "good");
        assert_eq!(value["result"]["ruleset"], "extended");
        assert!(value["result"].get("liquidity").is_none());
        assert_eq!(value["recommendations"][0]["component"], "utility");
        assert!(value["result"]["utility"]["comments"].is_array());
    }
}
