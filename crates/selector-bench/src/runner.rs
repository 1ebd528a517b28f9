//! Benchmark execution orchestration
//!
//! The runner walks an ordered list of query cases and, for each one, builds
//! a fresh tree, hands its markup to the selector engine, resolves the scope
//! once and times the case's traversal with [`crate::harness::measure`].
//!
//! ```text
//! QueryCase ──► Tree ──► markup ──► engine.parse_document
//!                                        │
//!                          scope = query_descendants(root, case.scope)
//!                                        │
//!                 measure(|| traversal(scope, case.selector).count)
//!                                        │
//!                                   CaseResult
//! ```
//!
//! Cases run strictly one after another on the calling thread. A failing
//! case is recorded and the run moves on; nothing is silently skipped.
//!
//! # Example
//!
//! ```no_run
//! use selector_bench::{catalogue, BenchmarkRunner, CaseFilter, Config};
//!
//! let config = Config::default();
//! let runner = BenchmarkRunner::new(config.benchmark.clone());
//! let results = runner.run_suite(&catalogue::builtin(), &CaseFilter::only(["find_id"]));
//!
//! for result in &results.results {
//!     println!("{}: {:?}", result.selector, result.outcome);
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::case::{CaseFilter, QueryCase};
use crate::config::BenchmarkConfig;
use crate::engine::{guard, SelectorEngine, VisdomEngine};
use crate::error::{CaseError, Phase, TreeError};
use crate::harness::{self, Measurement};
use crate::traversal::Traversal;

/// Results from a complete benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResults {
    /// Name of the benchmark suite
    pub suite_name: String,
    /// Selector engine under measurement
    pub engine: String,
    /// Timed repetitions per case
    pub repetitions: u32,
    /// Default generated nodes per tree
    pub node_count: usize,
    /// Results in catalogue order
    pub results: Vec<CaseResult>,
    /// Total duration of the run
    pub total_duration_ms: u64,
    /// Timestamp when the run started
    pub started_at: String,
}

impl BenchmarkResults {
    /// Whether every case produced a measurement
    pub fn passed(&self) -> bool {
        self.results.iter().all(CaseResult::is_measured)
    }

    /// Cases that failed
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.is_measured())
    }
}

/// Result of executing one query case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    /// Case name
    pub name: String,
    /// Selector under measurement
    pub selector: String,
    /// Traversal used
    pub traversal: Traversal,
    pub outcome: CaseOutcome,
}

impl CaseResult {
    pub fn is_measured(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Measured(_))
    }

    /// Match count, if the case was measured
    pub fn match_count(&self) -> Option<usize> {
        match &self.outcome {
            CaseOutcome::Measured(m) => Some(m.match_count),
            CaseOutcome::Failed { .. } => None,
        }
    }
}

/// Either a timing or the reason there is none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Measured(Measurement),
    Failed {
        /// Error category, see [`CaseError::kind`]
        kind: String,
        message: String,
    },
}

impl From<Result<Measurement, CaseError>> for CaseOutcome {
    fn from(result: Result<Measurement, CaseError>) -> Self {
        match result {
            Ok(measurement) => CaseOutcome::Measured(measurement),
            Err(err) => CaseOutcome::Failed {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// The benchmark runner
pub struct BenchmarkRunner<E: SelectorEngine = VisdomEngine> {
    engine: E,
    config: BenchmarkConfig,
}

impl BenchmarkRunner<VisdomEngine> {
    /// Create a runner measuring the visdom engine
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_engine(VisdomEngine::new(), config)
    }
}

impl<E: SelectorEngine> BenchmarkRunner<E> {
    /// Create a runner for any engine
    pub fn with_engine(engine: E, config: BenchmarkConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run `cases` in order and return one result per case
    pub fn run(&self, cases: &[QueryCase]) -> Vec<CaseResult> {
        self.run_filtered(cases, &CaseFilter::All)
    }

    /// Run the cases selected by `filter`, keeping catalogue order
    pub fn run_filtered(&self, cases: &[QueryCase], filter: &CaseFilter) -> Vec<CaseResult> {
        for name in filter.unknown_names(cases) {
            warn!("No case named '{}' in the catalogue", name);
        }

        filter
            .apply(cases)
            .into_iter()
            .map(|case| self.run_case(case))
            .collect()
    }

    /// Run the selected cases and wrap the results with run metadata
    pub fn run_suite(&self, cases: &[QueryCase], filter: &CaseFilter) -> BenchmarkResults {
        let start_time = Instant::now();
        let started_at = chrono::Utc::now().to_rfc3339();

        info!(
            "Starting benchmark suite '{}' against {} ({} repetitions, {} nodes)",
            self.config.name,
            self.engine.name(),
            self.config.repetitions,
            self.config.node_count
        );

        let results = self.run_filtered(cases, filter);
        let total_duration = start_time.elapsed();

        let suite = BenchmarkResults {
            suite_name: self.config.name.clone(),
            engine: self.engine.name().to_string(),
            repetitions: self.config.repetitions,
            node_count: self.config.node_count,
            results,
            total_duration_ms: total_duration.as_millis() as u64,
            started_at,
        };

        let failed = suite.failures().count();
        if failed == 0 {
            info!(
                "Benchmark suite '{}' completed {} cases in {}ms",
                suite.suite_name,
                suite.results.len(),
                suite.total_duration_ms
            );
        } else {
            warn!(
                "Benchmark suite '{}' completed with {} failed cases",
                suite.suite_name, failed
            );
        }

        suite
    }

    /// Check every selected case's tree recipe without running anything
    pub fn validate<'a>(
        &self,
        cases: &'a [QueryCase],
        filter: &CaseFilter,
    ) -> Vec<(&'a str, TreeError)> {
        filter
            .apply(cases)
            .into_iter()
            .filter_map(|case| {
                case.validate(self.config.node_count)
                    .err()
                    .map(|err| (case.name.as_str(), err))
            })
            .collect()
    }

    /// Run a single case
    #[instrument(skip(self, case), fields(case = %case.name))]
    pub fn run_case(&self, case: &QueryCase) -> CaseResult {
        let outcome = self.execute(case);

        match &outcome {
            Ok(m) => debug!(
                "{} matched {} in {:?}/rep",
                case.selector,
                m.match_count,
                m.average()
            ),
            Err(err) => warn!("Case '{}' failed: {}", case.name, err),
        }

        CaseResult {
            name: case.name.clone(),
            selector: case.selector.clone(),
            traversal: case.traversal,
            outcome: outcome.into(),
        }
    }

    fn execute(&self, case: &QueryCase) -> Result<Measurement, CaseError> {
        let tree = case.build_tree(self.config.node_count)?;
        debug!("Generated {} nodes", tree.node_count);

        let setup_failed = |cause| CaseError::CaseFailed {
            phase: Phase::Setup,
            cause,
        };

        let markup = tree.to_markup();
        drop(tree);
        let document = guard(|| self.engine.parse_document(&markup)).map_err(setup_failed)?;

        let scope = guard(|| {
            self.engine
                .query_descendants(self.engine.root(&document), &case.scope)
        })
        .map_err(setup_failed)?;

        let scope_size = self.engine.count(&scope);
        if scope_size == 0 {
            return Err(CaseError::ScopeNotFound {
                scope: case.scope.clone(),
            });
        }
        debug!("Scope '{}' resolved to {} nodes", case.scope, scope_size);

        harness::measure(
            || case.traversal.count(&self.engine, &scope, &case.selector),
            self.config.repetitions,
        )
    }
}
