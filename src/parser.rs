//! @ai:module:intent Parse benchmark result logs into validated records
//! @ai:module:layer application
//! @ai:module:public_api parse_file, parse_str, ParsedRun
//! @ai:module:depends_on record, error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::record::{RawRecord, Record};
use std::borrow::Cow;
use std::path::Path;

/// Minimum logical fields a data line must carry.
const MIN_FIELDS: usize = 9;

/// Position of the timing value; later fields shift when the time is split.
const TIME_IDX: usize = 4;

/// @ai:intent Outcome of parsing one results file
#[derive(Debug, Clone)]
pub struct ParsedRun {
    /// Valid records, in input order.
    pub records: Vec<Record>,
    /// Data lines discarded by the per-line recovery policy.
    pub dropped: usize,
}

/// @ai:intent Field layout of a single data line
///
/// The writer's locale renders the decimal separator of the timing value as a
/// comma, which collides with the field delimiter and splits the time across
/// two fields (`"123"`, `"456 ms"`). The layout is resolved once per line
/// from a single lookahead on the field after the timing field and selects a
/// fixed index table for everything that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineLayout {
    Standard,
    SplitDecimalTime,
}

/// @ai:intent Resolved field positions for one layout
#[derive(Debug, Clone, Copy)]
struct FieldTable {
    iterations: usize,
    makespan_initial: usize,
    makespan_final: usize,
    alpha: usize,
}

impl LineLayout {
    /// @ai:intent Detect the layout from the field after the timing field
    /// @ai:effects pure
    fn detect(fields: &[&str]) -> Self {
        let split = fields
            .get(TIME_IDX + 1)
            .map(|f| f.contains("ms"))
            .unwrap_or(false);

        if split {
            LineLayout::SplitDecimalTime
        } else {
            LineLayout::Standard
        }
    }

    /// @ai:intent Field index table for this layout
    /// @ai:effects pure
    fn table(self) -> FieldTable {
        let offset = match self {
            LineLayout::Standard => 0,
            LineLayout::SplitDecimalTime => 1,
        };

        FieldTable {
            iterations: 5 + offset,
            makespan_initial: 6 + offset,
            makespan_final: 7 + offset,
            alpha: 8 + offset,
        }
    }
}

/// @ai:intent Explicit outcome for one physical line
#[derive(Debug)]
enum LineOutcome {
    /// Valid data line.
    Parsed(Record),
    /// Blank or header line; produces nothing and is not counted.
    Skipped,
    /// Data line discarded by the local-recovery policy.
    Dropped,
}

/// @ai:intent Parse the full text of a results file
/// @ai:post every returned record satisfies the derived-metric invariant
/// @ai:effects pure
pub fn parse_str(text: &str) -> Result<ParsedRun> {
    let text = normalize(text);
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        match parse_line(line) {
            LineOutcome::Parsed(record) => records.push(record),
            LineOutcome::Skipped => {}
            LineOutcome::Dropped => dropped += 1,
        }
    }

    if records.is_empty() {
        return Err(Error::NoValidRecords { dropped });
    }

    if dropped > 0 {
        tracing::warn!("Dropped {} unparsable data lines", dropped);
    }

    Ok(ParsedRun { records, dropped })
}

/// @ai:intent Read and parse a results file from disk
/// @ai:pre path exists and is readable
/// @ai:effects fs:read
pub fn parse_file(path: &Path) -> Result<ParsedRun> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_str(&content)
}

/// @ai:intent Normalize raw text for line-based processing
///
/// Strips a leading UTF-8 BOM and folds CRLF/CR line endings to LF. Borrows
/// the input when no rewriting is needed.
/// @ai:effects pure
fn normalize(text: &str) -> Cow<'_, str> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// @ai:intent Classify and parse one physical line
/// @ai:effects pure
fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();

    if line.is_empty() || is_header(line) {
        return LineOutcome::Skipped;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() < MIN_FIELDS {
        return LineOutcome::Dropped;
    }

    match parse_fields(&fields) {
        Some(record) => LineOutcome::Parsed(record),
        None => LineOutcome::Dropped,
    }
}

/// @ai:intent Check whether a trimmed line is the header/label row
/// @ai:effects pure
fn is_header(line: &str) -> bool {
    let token = line.split(',').next().unwrap_or("").trim();
    token.to_lowercase().starts_with("heur")
}

/// @ai:intent Parse the delimited fields of one data line
///
/// Returns `None` on any numeric failure or missing field; the caller drops
/// the line without aborting the batch.
/// @ai:effects pure
fn parse_fields(fields: &[&str]) -> Option<Record> {
    let heuristic = fields.first()?.to_string();

    if heuristic.is_empty() {
        return None;
    }

    let n: u32 = fields.get(1)?.parse().ok()?;
    let m: u32 = fields.get(2)?.parse().ok()?;
    let rep: u32 = fields.get(3)?.parse().ok()?;

    let layout = LineLayout::detect(fields);
    let time_ms = parse_time(fields, layout)?;
    let table = layout.table();

    let iterations: u64 = fields.get(table.iterations)?.parse().ok()?;
    let makespan_initial: u64 = fields.get(table.makespan_initial)?.parse().ok()?;

    if makespan_initial == 0 {
        // Zero divisor would make the derived metrics undefined.
        tracing::debug!("Discarding record with zero initial makespan for {}", heuristic);
        return None;
    }

    let makespan_final: u64 = fields.get(table.makespan_final)?.parse().ok()?;
    let alpha = parse_alpha(fields.get(table.alpha)?)?;

    Some(Record::from(RawRecord {
        heuristic,
        n,
        m,
        rep,
        time_ms,
        iterations,
        makespan_initial,
        makespan_final,
        alpha,
    }))
}

/// @ai:intent Parse the timing value according to the resolved layout
/// @ai:effects pure
fn parse_time(fields: &[&str], layout: LineLayout) -> Option<f64> {
    match layout {
        LineLayout::SplitDecimalTime => {
            // Rejoin the integer and decimal halves the delimiter tore apart.
            let whole = fields.get(TIME_IDX)?;
            let decimal = fields.get(TIME_IDX + 1)?.replace("ms", "");

            format!("{}.{}", whole, decimal.trim()).parse().ok()
        }
        LineLayout::Standard => {
            let raw = fields.get(TIME_IDX)?.replace(',', ".");

            raw.trim_end_matches("ms").trim().parse().ok()
        }
    }
}

/// @ai:intent Parse the alpha field, mapping the NA literal to absent
/// @ai:effects pure
fn parse_alpha(raw: &str) -> Option<Option<f64>> {
    if raw.eq_ignore_ascii_case("na") {
        return Some(None);
    }

    raw.replace(',', ".").parse().ok().map(Some)
}
