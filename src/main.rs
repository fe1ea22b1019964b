//! @ai:module:intent CLI for the heurbench results analyzer
//! @ai:module:layer presentation

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use heurbench::{
    config::{AnalysisConfig, RecordFilter},
    metrics::{Groups, Summarizer, SummarizerTrait},
    output, parser, OutputFormat,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heurbench")]
#[command(about = "Benchmark results analyzer for task-distribution heuristics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a results file per heuristic
    Summary {
        /// Path to the results file
        file: PathBuf,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Filter by heuristic names (comma-separated)
        #[arg(long)]
        heuristics: Option<String>,

        /// Filter by instance sizes n (comma-separated)
        #[arg(long)]
        sizes: Option<String>,

        /// Filter by replication indices (comma-separated)
        #[arg(long)]
        reps: Option<String>,

        /// Output format
        #[arg(long, short, value_enum)]
        format: Option<Format>,

        /// Decimal places for printed means
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Dump the parsed record sequence
    Records {
        /// Path to the results file
        file: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "json-pretty")]
        format: Format,
    },

    /// Parse a results file and report what was accepted
    Validate {
        /// Path to the results file
        file: PathBuf,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "heurbench.toml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("heurbench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            file,
            config,
            heuristics,
            sizes,
            reps,
            format,
            precision,
        } => summarize(SummaryArgs {
            file,
            config,
            heuristics,
            sizes,
            reps,
            format,
            precision,
        }),
        Commands::Records { file, format } => dump_records(file, format),
        Commands::Validate { file } => validate(file),
        Commands::Init { output } => init_config(output),
    }
}

struct SummaryArgs {
    file: PathBuf,
    config: Option<PathBuf>,
    heuristics: Option<String>,
    sizes: Option<String>,
    reps: Option<String>,
    format: Option<Format>,
    precision: Option<usize>,
}

/// @ai:intent Summarize one results file per heuristic
/// @ai:effects fs:read, io
fn summarize(args: SummaryArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config)?;

    if let Some(filter) = build_filter(args.heuristics, args.sizes, args.reps)? {
        config.run.filter = filter;
    }

    if let Some(format) = args.format {
        config.output.format = format.into();
    }

    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }

    let run = parser::parse_file(&args.file)?;
    tracing::info!(
        "Loaded {} records ({} dropped) from {}",
        run.records.len(),
        run.dropped,
        args.file.display()
    );

    let records: Vec<_> = run
        .records
        .into_iter()
        .filter(|r| config.run.filter.matches(r))
        .collect();

    if records.is_empty() {
        anyhow::bail!("No records match the filter criteria");
    }

    let summary = Summarizer::new().summarize(&records, run.dropped);

    println!(
        "{}",
        output::format_summary(&summary, config.output.format, config.output.precision)
    );

    Ok(())
}

/// @ai:intent Dump the parsed record sequence to stdout
/// @ai:effects fs:read, io
fn dump_records(file: PathBuf, format: Format) -> Result<()> {
    let run = parser::parse_file(&file)?;

    println!("{}", output::format_records(&run.records, format.into()));
    Ok(())
}

/// @ai:intent Parse a results file and report acceptance counts
/// @ai:effects fs:read, io
fn validate(file: PathBuf) -> Result<()> {
    let run = parser::parse_file(&file)?;
    let groups = Groups::from_records(&run.records);

    println!("Results file validation passed!");
    println!("Records: {} ({} data lines dropped)", run.records.len(), run.dropped);
    println!();

    for group in groups.iter() {
        println!("  {:<35} {:>6} records", group.heuristic, group.len());
    }

    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = AnalysisConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<AnalysisConfig> {
    match path {
        Some(p) => AnalysisConfig::load(&p),
        None => {
            let default_path = PathBuf::from("heurbench.toml");

            if default_path.exists() {
                AnalysisConfig::load(&default_path)
            } else {
                Ok(AnalysisConfig::default())
            }
        }
    }
}

/// @ai:intent Build a record filter from CLI arguments
/// @ai:effects pure
fn build_filter(
    heuristics: Option<String>,
    sizes: Option<String>,
    reps: Option<String>,
) -> Result<Option<RecordFilter>> {
    if heuristics.is_none() && sizes.is_none() && reps.is_none() {
        return Ok(None);
    }

    let sizes = sizes.map(parse_u32_list).transpose()?;
    let reps = reps.map(parse_u32_list).transpose()?;

    Ok(Some(RecordFilter {
        heuristics: heuristics.map(|s| s.split(',').map(|h| h.trim().to_string()).collect()),
        sizes,
        reps,
    }))
}

/// @ai:intent Parse a comma-separated list of integers
/// @ai:effects pure
fn parse_u32_list(raw: String) -> Result<Vec<u32>> {
    raw.split(',')
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid integer in list: {}", v.trim()))
        })
        .collect()
}
