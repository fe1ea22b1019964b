//! @ai:module:intent heurbench library for analyzing heuristic benchmark logs
//! @ai:module:layer application
//! @ai:module:public_api config, error, metrics, output, parser, record
//! @ai:module:stateless true
//!
//! # heurbench
//!
//! A library for parsing semi-structured benchmark result logs from
//! task-distribution heuristic runs and aggregating them into per-heuristic
//! statistical summaries.
//!
//! The parser absorbs the writer's locale quirks (decimal commas, a timing
//! value split across two delimited fields, BOM-prefixed files, mixed line
//! endings) and applies per-line best-effort recovery: one corrupt line never
//! aborts the batch, but a file with no valid records at all is a hard error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use heurbench::{parser, OutputFormat, Summarizer, SummarizerTrait};
//! use std::path::Path;
//!
//! let run = parser::parse_file(Path::new("Resultado.txt")).unwrap();
//! let summary = Summarizer::new().summarize(&run.records, run.dropped);
//! println!("{}", heurbench::output::format_summary(&summary, OutputFormat::Text, 2));
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod record;

pub use config::{AnalysisConfig, OutputConfig, RecordFilter, RunConfig};
pub use error::{Error, Result};
pub use metrics::{
    Direction, Extremal, Group, Groups, HeuristicMean, MetricSummary, RunSummary, Summarizer,
    SummarizerTrait,
};
pub use output::{format_records, format_summary, OutputFormat};
pub use parser::{parse_file, parse_str, ParsedRun};
pub use record::{Metric, RawRecord, Record};
