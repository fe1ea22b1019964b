//! @ai:module:intent Format summaries and records for different formats (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_summary, format_records
//! @ai:module:depends_on metrics, record
//! @ai:module:stateless true

use crate::metrics::{Direction, MetricSummary, RunSummary};
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a run summary as a string
/// @ai:effects pure
pub fn format_summary(summary: &RunSummary, format: OutputFormat, precision: usize) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
        OutputFormat::Text => format_summary_text(summary, precision),
    }
}

/// @ai:intent Format a run summary as plain numeric text
/// @ai:effects pure
fn format_summary_text(summary: &RunSummary, precision: usize) -> String {
    let mut output = String::new();

    output.push_str("Heuristic Benchmark Summary\n");
    output.push_str("===========================\n\n");

    output.push_str(&format!("Records:    {}", summary.record_count));

    if summary.dropped_lines > 0 {
        output.push_str(&format!(" ({} data lines dropped)", summary.dropped_lines));
    }

    output.push('\n');
    output.push_str(&format!("Heuristics: {}\n", summary.heuristics.join(", ")));

    for metric in &summary.metrics {
        output.push('\n');
        output.push_str(&format!("{}: {}\n", heading(metric), metric.best));

        for entry in &metric.means {
            output.push_str(&format!(
                "  {:<35} {:>14.prec$}\n",
                entry.heuristic,
                entry.mean,
                prec = precision
            ));
        }
    }

    output
}

/// @ai:intent Heading for one metric section
/// @ai:effects pure
fn heading(summary: &MetricSummary) -> String {
    let side = match summary.direction {
        Direction::Max => "Highest",
        Direction::Min => "Lowest",
    };

    format!("{} mean {}", side, summary.metric.label())
}

/// @ai:intent Format the full record sequence as a string
/// @ai:effects pure
pub fn format_records(records: &[Record], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(records).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(records).unwrap_or_default(),
        OutputFormat::Text => {
            let mut output = String::new();

            for record in records {
                output.push_str(&format_record_line(record));
                output.push('\n');
            }

            output
        }
    }
}

/// @ai:intent Render one record as a canonical delimiter-clean line
/// @ai:effects pure
fn format_record_line(record: &Record) -> String {
    let alpha = record
        .alpha
        .map(|a| a.to_string())
        .unwrap_or_else(|| "NA".to_string());

    format!(
        "{},{},{},{},{},{},{},{},{}",
        record.heuristic,
        record.n,
        record.m,
        record.rep,
        record.time_ms,
        record.iterations,
        record.makespan_initial,
        record.makespan_final,
        alpha
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Summarizer, SummarizerTrait};
    use crate::parser::parse_str;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "A,10,3,0,10.0,50,1000,800,NA\n\
                          A,10,3,1,20.0,70,1000,750,NA\n\
                          B,10,3,0,5.0,30,1000,900,0.7\n\
                          B,10,3,1,15.0,40,1000,850,0.7\n";

    #[test]
    fn test_text_summary_contains_numeric_means() {
        let run = parse_str(SAMPLE).unwrap();
        let summary = Summarizer::new().summarize(&run.records, run.dropped);

        let text = format_summary(&summary, OutputFormat::Text, 2);

        assert!(text.contains("Records:    4"));
        assert!(text.contains("Heuristics: A, B"));
        assert!(text.contains("Highest mean time (ms): A"));
        assert!(text.contains("15.00"));
        assert!(text.contains("10.00"));
        assert!(text.contains("Lowest mean final/initial ratio"));
    }

    #[test]
    fn test_json_summary_is_machine_readable() {
        let run = parse_str(SAMPLE).unwrap();
        let summary = Summarizer::new().summarize(&run.records, run.dropped);

        let json = format_summary(&summary, OutputFormat::Json, 2);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["record_count"], 4);
        assert_eq!(parsed["heuristics"][0], "A");
    }

    #[test]
    fn test_record_line_is_locale_clean() {
        let run = parse_str("H,10,3,1,123,456 ms,50,1000,800,NA\n").unwrap();
        let text = format_records(&run.records, OutputFormat::Text);

        assert_eq!(text, "H,10,3,1,123.456,50,1000,800,NA\n");
    }

    #[test]
    fn test_records_json_roundtrip() {
        let run = parse_str(SAMPLE).unwrap();
        let json = format_records(&run.records, OutputFormat::Json);

        let parsed: Vec<Record> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, run.records);
    }
}
