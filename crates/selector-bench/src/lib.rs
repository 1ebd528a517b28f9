//! Micro-benchmark harness for CSS selector evaluation
//!
//! This crate measures the mean latency of a fixed catalogue of selector
//! queries (structural pseudo-classes, attribute selectors, sibling
//! traversal, text matching) run against deterministically generated trees.
//!
//! # Features
//!
//! - **Tree generation**: uniform or alternating children with markers for
//!   ids, classes, attributes and text
//! - **Declarative catalogue**: every case is a row of data, not a function
//! - **Timing harness**: one untimed call for the match count, then a tight
//!   timed loop reporting the raw mean
//! - **Isolation**: a failing case is reported and the run continues
//! - **Multiple Output Formats**: JSON, Console, and Markdown reports
//!
//! # Example
//!
//! ```no_run
//! use selector_bench::{run_benchmarks, CaseFilter, Config, OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::from_file("selectors.toml")?;
//! let results = run_benchmarks(&config, &config.filter());
//!
//! Reporter::new(OutputFormat::Console).report(&results)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [benchmark]
//! name = "selector micro-benchmarks"
//! repetitions = 200
//! node_count = 3000
//!
//! [selection]
//! cases = ["find_id", "nth_child"]
//! ```

pub mod case;
pub mod catalogue;
pub mod config;
pub mod engine;
pub mod error;
pub mod harness;
pub mod reporter;
pub mod runner;
pub mod traversal;
pub mod tree;

// Re-export main types for convenience
pub use case::{CaseFilter, QueryCase};
pub use config::Config;
pub use engine::{SelectorEngine, VisdomEngine};
pub use error::{CaseError, EngineError, TreeError};
pub use harness::{measure, Measurement};
pub use reporter::{OutputFormat, Reporter};
pub use runner::{BenchmarkResults, BenchmarkRunner, CaseOutcome, CaseResult};
pub use traversal::Traversal;

/// Run the configured catalogue against the visdom engine
///
/// Cases come from [`Config::all_cases`]; `filter` picks which of them run.
/// The returned results are in catalogue order and contain one entry per
/// selected case, measured or failed.
pub fn run_benchmarks(config: &Config, filter: &CaseFilter) -> BenchmarkResults {
    BenchmarkRunner::new(config.benchmark.clone()).run_suite(&config.all_cases(), filter)
}
