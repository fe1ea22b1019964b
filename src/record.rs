//! @ai:module:intent Domain records for heuristic benchmark measurements
//! @ai:module:layer domain
//! @ai:module:public_api Record, RawRecord, Metric
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent One validated measurement from a benchmark results file
///
/// Created exactly once by the parser and never mutated. `reduction_pct` and
/// `ratio` are derived from the two makespan values at construction, so
/// `reduction_pct / 100 == 1 - ratio` holds for every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub heuristic: String,
    pub n: u32,
    pub m: u32,
    pub rep: u32,
    pub time_ms: f64,
    pub iterations: u64,
    pub makespan_initial: u64,
    pub makespan_final: u64,
    pub alpha: Option<f64>,
    pub reduction_pct: f64,
    pub ratio: f64,
}

/// @ai:intent Raw fields of a data line, before metric derivation
/// @ai:effects pure
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub heuristic: String,
    pub n: u32,
    pub m: u32,
    pub rep: u32,
    pub time_ms: f64,
    pub iterations: u64,
    pub makespan_initial: u64,
    pub makespan_final: u64,
    pub alpha: Option<f64>,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        let (reduction_pct, ratio) = derive_quality(raw.makespan_initial, raw.makespan_final);

        Record {
            heuristic: raw.heuristic,
            n: raw.n,
            m: raw.m,
            rep: raw.rep,
            time_ms: raw.time_ms,
            iterations: raw.iterations,
            makespan_initial: raw.makespan_initial,
            makespan_final: raw.makespan_final,
            alpha: raw.alpha,
            reduction_pct,
            ratio,
        }
    }
}

/// @ai:intent Derive makespan reduction percentage and final/initial ratio
/// @ai:pre makespan_initial > 0
/// @ai:effects pure
pub fn derive_quality(makespan_initial: u64, makespan_final: u64) -> (f64, f64) {
    let initial = makespan_initial as f64;
    let final_ = makespan_final as f64;

    let reduction_pct = (initial - final_) / initial * 100.0;
    let ratio = final_ / initial;

    (reduction_pct, ratio)
}

/// @ai:intent Numeric fields a summary can aggregate over
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Time,
    Iterations,
    ReductionPct,
    Ratio,
    MakespanInitial,
    MakespanFinal,
}

impl Metric {
    /// @ai:intent Convert metric to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Time => "time",
            Metric::Iterations => "iterations",
            Metric::ReductionPct => "reduction_pct",
            Metric::Ratio => "ratio",
            Metric::MakespanInitial => "makespan_initial",
            Metric::MakespanFinal => "makespan_final",
        }
    }

    /// @ai:intent Human-readable label for report headings
    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Time => "time (ms)",
            Metric::Iterations => "iterations",
            Metric::ReductionPct => "makespan reduction (%)",
            Metric::Ratio => "final/initial ratio",
            Metric::MakespanInitial => "initial makespan",
            Metric::MakespanFinal => "final makespan",
        }
    }

    /// @ai:intent Read this metric's value from a record
    /// @ai:effects pure
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Metric::Time => record.time_ms,
            Metric::Iterations => record.iterations as f64,
            Metric::ReductionPct => record.reduction_pct,
            Metric::Ratio => record.ratio,
            Metric::MakespanInitial => record.makespan_initial as f64,
            Metric::MakespanFinal => record.makespan_final as f64,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(initial: u64, final_: u64) -> Record {
        Record::from(RawRecord {
            heuristic: "H".to_string(),
            n: 10,
            m: 3,
            rep: 1,
            time_ms: 12.34,
            iterations: 50,
            makespan_initial: initial,
            makespan_final: final_,
            alpha: None,
        })
    }

    #[test]
    fn test_derive_quality() {
        let (reduction_pct, ratio) = derive_quality(1000, 800);
        assert!((reduction_pct - 20.0).abs() < 1e-9);
        assert!((ratio - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_derived_metrics_are_consistent() {
        for (initial, final_) in [(1000, 800), (500, 500), (1, 0), (7, 13)] {
            let record = sample(initial, final_);
            assert!((record.reduction_pct / 100.0 - (1.0 - record.ratio)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_metric_value_accessor() {
        let record = sample(1000, 800);
        assert!((Metric::Time.value(&record) - 12.34).abs() < 1e-9);
        assert!((Metric::Iterations.value(&record) - 50.0).abs() < 1e-9);
        assert!((Metric::ReductionPct.value(&record) - 20.0).abs() < 1e-9);
        assert!((Metric::Ratio.value(&record) - 0.8).abs() < 1e-9);
        assert!((Metric::MakespanFinal.value(&record) - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_as_str() {
        assert_eq!(Metric::Time.as_str(), "time");
        assert_eq!(Metric::ReductionPct.as_str(), "reduction_pct");
    }
}
