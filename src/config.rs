//! @ai:module:intent Configuration structs for the analyzer
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalysisConfig, RunConfig, OutputConfig, RecordFilter
//! @ai:module:stateless true

use crate::output::OutputFormat;
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// @ai:intent Main configuration for an analysis run
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// @ai:intent Run configuration for record selection
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub filter: RecordFilter,
}

/// @ai:intent Output options for the numeric summary
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// @ai:intent Filter configuration for selecting records
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    pub heuristics: Option<Vec<String>>,
    /// Instance sizes (n) to keep.
    pub sizes: Option<Vec<u32>>,
    /// Replication indices to keep.
    pub reps: Option<Vec<u32>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    2
}

impl AnalysisConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl RecordFilter {
    /// @ai:intent Check if the filter matches a record
    /// @ai:effects pure
    pub fn matches(&self, record: &Record) -> bool {
        let heuristic_match = self
            .heuristics
            .as_ref()
            .map(|h| h.iter().any(|name| name == &record.heuristic))
            .unwrap_or(true);

        let size_match = self
            .sizes
            .as_ref()
            .map(|s| s.iter().any(|&n| n == record.n))
            .unwrap_or(true);

        let rep_match = self
            .reps
            .as_ref()
            .map(|r| r.iter().any(|&rep| rep == record.rep))
            .unwrap_or(true);

        heuristic_match && size_match && rep_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRecord;
    use tempfile::TempDir;

    fn record(heuristic: &str, n: u32, rep: u32) -> Record {
        Record::from(RawRecord {
            heuristic: heuristic.to_string(),
            n,
            m: 3,
            rep,
            time_ms: 1.0,
            iterations: 10,
            makespan_initial: 1000,
            makespan_final: 800,
            alpha: None,
        })
    }

    #[test]
    fn test_filter_matches_all_when_empty() {
        let filter = RecordFilter::default();
        assert!(filter.matches(&record("A", 10, 0)));
    }

    #[test]
    fn test_filter_matches_specific_heuristic() {
        let filter = RecordFilter {
            heuristics: Some(vec!["A".to_string()]),
            ..Default::default()
        };

        assert!(filter.matches(&record("A", 10, 0)));
        assert!(!filter.matches(&record("B", 10, 0)));
    }

    #[test]
    fn test_filter_matches_multiple_criteria() {
        let filter = RecordFilter {
            heuristics: Some(vec!["A".to_string()]),
            sizes: Some(vec![10, 20]),
            ..Default::default()
        };

        assert!(filter.matches(&record("A", 10, 0)));
        assert!(filter.matches(&record("A", 20, 3)));
        assert!(!filter.matches(&record("A", 30, 0)));
        assert!(!filter.matches(&record("B", 10, 0)));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("heurbench.toml");

        let config = AnalysisConfig {
            run: RunConfig {
                filter: RecordFilter {
                    heuristics: Some(vec!["BLM randomizada".to_string()]),
                    sizes: None,
                    reps: Some(vec![0, 1, 2]),
                },
            },
            output: OutputConfig {
                format: OutputFormat::Json,
                precision: 4,
            },
        };

        config.save(&path).unwrap();
        let loaded = AnalysisConfig::load(&path).unwrap();

        assert_eq!(loaded.output.precision, 4);
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert_eq!(
            loaded.run.filter.heuristics,
            Some(vec!["BLM randomizada".to_string()])
        );
        assert_eq!(loaded.run.filter.reps, Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_config_defaults_from_empty_toml() {
        let config: AnalysisConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.run.filter.heuristics.is_none());
    }
}
