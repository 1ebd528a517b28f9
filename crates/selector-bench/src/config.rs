//! Configuration parsing for benchmark runs
//!
//! This module provides TOML-based configuration for a benchmark run: the
//! repetition count and tree size shared by every case, which cases to run,
//! and any extra cases to add to the built-in catalogue.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::case::{CaseFilter, QueryCase};
use crate::catalogue::{self, DEFAULT_NODE_COUNT, DEFAULT_REPETITIONS};

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Run-wide parameters
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    /// Case selection
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Extra cases appended after the built-in catalogue
    #[serde(default)]
    pub cases: Vec<QueryCase>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - The values fail [`Config::validate`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use selector_bench::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("selectors.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use selector_bench::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let toml = r#"
    ///     [benchmark]
    ///     repetitions = 50
    ///
    ///     [selection]
    ///     cases = ["find_id"]
    /// "#;
    /// let config = Config::from_str(toml)?;
    /// assert_eq!(config.benchmark.repetitions, 50);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a run meaningless
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.benchmark.repetitions == 0 {
            bail!("benchmark.repetitions must be at least 1");
        }
        if self.benchmark.node_count == 0 {
            bail!("benchmark.node_count must be at least 1");
        }

        let mut seen = std::collections::HashSet::new();
        for case in self.all_cases() {
            if !seen.insert(case.name.clone()) {
                bail!("duplicate case name '{}'", case.name);
            }
        }
        Ok(())
    }

    /// Built-in cases (unless disabled) followed by the configured ones
    pub fn all_cases(&self) -> Vec<QueryCase> {
        let mut cases = if self.benchmark.include_builtin {
            catalogue::builtin()
        } else {
            Vec::new()
        };
        cases.extend(self.cases.iter().cloned());
        cases
    }

    /// Selection filter described by the `[selection]` table
    pub fn filter(&self) -> CaseFilter {
        match &self.selection.cases {
            Some(names) => CaseFilter::Named(names.clone()),
            None => CaseFilter::All,
        }
    }
}

/// Run-wide parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Name of the benchmark suite
    #[serde(default = "default_name")]
    pub name: String,
    /// Timed repetitions per case (default: 200)
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    /// Generated nodes per tree (default: 3000)
    #[serde(default = "default_node_count")]
    pub node_count: usize,
    /// Whether to run the built-in catalogue (default: true)
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            repetitions: default_repetitions(),
            node_count: default_node_count(),
            include_builtin: default_include_builtin(),
        }
    }
}

fn default_name() -> String {
    "selector benchmarks".to_string()
}

fn default_repetitions() -> u32 {
    DEFAULT_REPETITIONS
}

fn default_node_count() -> usize {
    DEFAULT_NODE_COUNT
}

fn default_include_builtin() -> bool {
    true
}

/// Which cases to run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Case names to run; absent means every case
    #[serde(default)]
    pub cases: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Traversal;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_str("").unwrap();

        assert_eq!(config.benchmark.repetitions, 200);
        assert_eq!(config.benchmark.node_count, 3000);
        assert!(config.benchmark.include_builtin);
        assert_eq!(config.filter(), CaseFilter::All);
        assert_eq!(config.all_cases().len(), catalogue::builtin().len());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r##"
            [benchmark]
            name = "Full Test"
            repetitions = 50
            node_count = 100
            include_builtin = false

            [selection]
            cases = ["custom"]

            [[cases]]
            name = "custom"
            container = "ul"
            shape = { kind = "uniform", tag = "li" }
            scope = "ul"
            selector = "li:nth-child(7)"
            traversal = "children"
        "##;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.benchmark.name, "Full Test");
        assert_eq!(config.benchmark.repetitions, 50);
        assert_eq!(config.benchmark.node_count, 100);
        assert_eq!(config.filter(), CaseFilter::only(["custom"]));

        let cases = config.all_cases();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].traversal, Traversal::Children);
    }

    #[test]
    fn test_extra_cases_follow_builtin() {
        let toml = r##"
            [[cases]]
            name = "custom"
            container = "dl"
            shape = { kind = "alternating", first = "dt", second = "dd" }
            scope = "dl"
            selector = "dd"
            traversal = "children"
        "##;

        let config = Config::from_str(toml).unwrap();
        let cases = config.all_cases();
        assert_eq!(cases.last().unwrap().name, "custom");
        assert_eq!(cases.len(), catalogue::builtin().len() + 1);
    }

    #[test]
    fn test_empty_selection_is_allowed() {
        let config = Config::from_str("[selection]\ncases = []").unwrap();

        assert_eq!(config.filter(), CaseFilter::Named(Vec::new()));
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let err = Config::from_str("[benchmark]\nrepetitions = 0").unwrap_err();

        assert!(err.to_string().contains("repetitions"));
    }

    #[test]
    fn test_zero_node_count_rejected() {
        assert!(Config::from_str("[benchmark]\nnode_count = 0").is_err());
    }

    #[test]
    fn test_duplicate_case_name_rejected() {
        let toml = r##"
            [[cases]]
            name = "find_id"
            container = "ul"
            shape = { kind = "uniform", tag = "li" }
            scope = "ul"
            selector = "li"
            traversal = "children"
        "##;

        let err = Config::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(Config::from_str("[benchmark\nname = ").is_err());
    }
}
