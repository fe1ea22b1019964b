//! @ai:module:intent Grouping and statistical aggregation over records
//! @ai:module:layer application
//! @ai:module:public_api Groups, Group, Summarizer
//! @ai:module:depends_on record, metrics::types
//! @ai:module:stateless true

use crate::metrics::types::{Direction, Extremal, HeuristicMean, MetricSummary, RunSummary};
use crate::record::{Metric, Record};
use std::collections::HashMap;

/// @ai:intent Records of a single heuristic, in input order
#[derive(Debug)]
pub struct Group<'a> {
    pub heuristic: &'a str,
    pub records: Vec<&'a Record>,
}

impl<'a> Group<'a> {
    /// @ai:intent Arithmetic mean of a metric across this group
    ///
    /// An empty group yields 0.0; groups built by `Groups::from_records` are
    /// never empty.
    /// @ai:effects pure
    pub fn mean(&self, metric: Metric) -> f64 {
        average(self.records.iter().map(|r| metric.value(r)))
    }

    /// @ai:intent Records sorted ascending by replication index
    ///
    /// The sort is stable: ties keep input order. Used by every
    /// replication-indexed view.
    /// @ai:effects pure
    pub fn ordered_by_replication(&self) -> Vec<&'a Record> {
        let mut ordered = self.records.clone();
        ordered.sort_by_key(|r| r.rep);
        ordered
    }

    /// @ai:intent Number of records in this group
    /// @ai:effects pure
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// @ai:intent Check whether the group holds no records
    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// @ai:intent Per-heuristic partition of a record sequence
///
/// Groups appear in first-encounter order of their heuristic; records keep
/// input order within each group. The partition borrows the underlying
/// records, owns no independent state, and is recomputed rather than updated
/// when the record sequence changes.
#[derive(Debug)]
pub struct Groups<'a> {
    groups: Vec<Group<'a>>,
    slots: HashMap<&'a str, usize>,
}

impl<'a> Groups<'a> {
    /// @ai:intent Partition records by heuristic name
    /// @ai:effects pure
    pub fn from_records(records: &'a [Record]) -> Self {
        let mut groups: Vec<Group<'a>> = Vec::new();
        let mut slots: HashMap<&'a str, usize> = HashMap::new();

        for record in records {
            let slot = *slots.entry(record.heuristic.as_str()).or_insert_with(|| {
                groups.push(Group {
                    heuristic: &record.heuristic,
                    records: Vec::new(),
                });
                groups.len() - 1
            });

            groups[slot].records.push(record);
        }

        Self { groups, slots }
    }

    /// @ai:intent Iterate groups in first-encounter order
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = &Group<'a>> {
        self.groups.iter()
    }

    /// @ai:intent Look up a group by heuristic name
    /// @ai:effects pure
    pub fn get(&self, heuristic: &str) -> Option<&Group<'a>> {
        self.slots.get(heuristic).map(|&slot| &self.groups[slot])
    }

    /// @ai:intent Heuristic names in first-encounter order
    /// @ai:effects pure
    pub fn heuristics(&self) -> Vec<&'a str> {
        self.groups.iter().map(|g| g.heuristic).collect()
    }

    /// @ai:intent Number of groups
    /// @ai:effects pure
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// @ai:intent Check whether the partition holds no groups
    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// @ai:intent Mean of a metric for every group, in encounter order
    /// @ai:effects pure
    pub fn means(&self, metric: Metric) -> Vec<HeuristicMean> {
        self.groups
            .iter()
            .map(|g| HeuristicMean {
                heuristic: g.heuristic.to_string(),
                mean: g.mean(metric),
            })
            .collect()
    }

    /// @ai:intent Heuristic with the extremal mean of a metric
    ///
    /// Returns the winner paired with the full mean mapping it was selected
    /// from; `None` only when there are no groups at all.
    /// @ai:effects pure
    pub fn extremal(&self, metric: Metric, direction: Direction) -> Option<Extremal> {
        let means = self.means(metric);

        let best = match direction {
            Direction::Max => means.iter().max_by(|a, b| a.mean.total_cmp(&b.mean)),
            Direction::Min => means.iter().min_by(|a, b| a.mean.total_cmp(&b.mean)),
        }?;

        let heuristic = best.heuristic.clone();
        Some(Extremal { heuristic, means })
    }
}

/// @ai:intent Calculate average of an iterator of f64
/// @ai:effects pure
fn average<I: Iterator<Item = f64>>(iter: I) -> f64 {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// @ai:intent Trait for building run summaries
pub trait SummarizerTrait: Send + Sync {
    /// @ai:intent Aggregate records into a run summary
    fn summarize(&self, records: &[Record], dropped: usize) -> RunSummary;
}

/// @ai:intent Builds per-metric summaries for the reporting layer
pub struct Summarizer {
    selections: Vec<(Metric, Direction)>,
}

impl Summarizer {
    /// @ai:intent Create a summarizer over the default metrics of interest
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::with_selections(vec![
            (Metric::Iterations, Direction::Max),
            (Metric::Time, Direction::Max),
            (Metric::ReductionPct, Direction::Max),
            (Metric::Ratio, Direction::Min),
        ])
    }

    /// @ai:intent Create a summarizer over explicit metric selections
    /// @ai:effects pure
    pub fn with_selections(selections: Vec<(Metric, Direction)>) -> Self {
        Self { selections }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SummarizerTrait for Summarizer {
    /// @ai:intent Aggregate records into a run summary
    /// @ai:effects pure
    fn summarize(&self, records: &[Record], dropped: usize) -> RunSummary {
        let groups = Groups::from_records(records);

        let metrics = self
            .selections
            .iter()
            .filter_map(|&(metric, direction)| {
                let extremal = groups.extremal(metric, direction)?;

                Some(MetricSummary {
                    metric,
                    direction,
                    best: extremal.heuristic,
                    means: extremal.means,
                })
            })
            .collect();

        RunSummary {
            timestamp: chrono::Utc::now().to_rfc3339(),
            record_count: records.len(),
            dropped_lines: dropped,
            heuristics: groups.heuristics().iter().map(|h| h.to_string()).collect(),
            metrics,
        }
    }
}
