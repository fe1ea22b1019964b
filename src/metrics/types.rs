//! @ai:module:intent Summary types for aggregated benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api Direction, HeuristicMean, Extremal, MetricSummary, RunSummary
//! @ai:module:stateless true

use crate::record::Metric;
use serde::{Deserialize, Serialize};

/// @ai:intent Direction for extremal selection
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Max,
    Min,
}

impl Direction {
    /// @ai:intent Convert direction to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Max => "max",
            Direction::Min => "min",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Mean of one metric for one heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicMean {
    pub heuristic: String,
    pub mean: f64,
}

/// @ai:intent Extremal selection result
///
/// The winning heuristic together with the full per-heuristic mean mapping it
/// was selected from, in first-encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremal {
    pub heuristic: String,
    pub means: Vec<HeuristicMean>,
}

/// @ai:intent Per-metric summary for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub metric: Metric,
    pub direction: Direction,
    /// Heuristic whose mean is extremal in `direction`.
    pub best: String,
    pub means: Vec<HeuristicMean>,
}

/// @ai:intent Complete summary of one analyzed results file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub timestamp: String,
    pub record_count: usize,
    pub dropped_lines: usize,
    /// Heuristic names in first-encounter order.
    pub heuristics: Vec<String>,
    pub metrics: Vec<MetricSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_as_str() {
        assert_eq!(Direction::Max.as_str(), "max");
        assert_eq!(Direction::Min.as_str(), "min");
    }

    #[test]
    fn test_metric_summary_serializes_with_plain_names() {
        let summary = MetricSummary {
            metric: Metric::ReductionPct,
            direction: Direction::Max,
            best: "A".to_string(),
            means: vec![HeuristicMean {
                heuristic: "A".to_string(),
                mean: 20.0,
            }],
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"reduction_pct\""));
        assert!(json.contains("\"max\""));
    }
}
