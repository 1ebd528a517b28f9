//! Console reporter for benchmark results
//!
//! Provides human-readable output with an ASCII table and a failure list.

use anyhow::Result;
use std::fmt::Write;

use super::format_average;
use crate::runner::{BenchmarkResults, CaseOutcome, CaseResult};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format benchmark results for console output
    pub fn format(results: &BenchmarkResults) -> Result<String> {
        let mut output = String::new();

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                 SELECTOR BENCHMARK RESULTS                   ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Suite:        {}", results.suite_name)?;
        writeln!(output, "Engine:       {}", results.engine)?;
        writeln!(output, "Started:      {}", results.started_at)?;
        writeln!(output, "Duration:     {}ms", results.total_duration_ms)?;
        writeln!(output, "Repetitions:  {}", results.repetitions)?;
        writeln!(output, "Node count:   {}", results.node_count)?;
        writeln!(output)?;

        let selector_width = results
            .results
            .iter()
            .map(|r| r.selector.chars().count())
            .max()
            .unwrap_or(0)
            .max("Selector".len());

        writeln!(
            output,
            "  {:<selector_width$}  {:<21}  {:>8}  {:>12}",
            "Selector", "Traversal", "Matches", "Avg/rep"
        )?;
        writeln!(output, "  {}", "─".repeat(selector_width + 49))?;

        for result in &results.results {
            Self::format_row(&mut output, result, selector_width)?;
        }

        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        let failed: Vec<&CaseResult> = results.failures().collect();
        if failed.is_empty() {
            writeln!(output, "Overall Status: ✓ {} cases measured", results.results.len())?;
        } else {
            writeln!(
                output,
                "Overall Status: ✗ {} of {} cases FAILED",
                failed.len(),
                results.results.len()
            )?;
            writeln!(output)?;
            writeln!(output, "Failures:")?;
            for result in failed {
                if let CaseOutcome::Failed { kind, message } = &result.outcome {
                    writeln!(output, "  • {} [{}]: {}", result.name, kind, message)?;
                }
            }
        }

        writeln!(output)?;
        Ok(output)
    }

    fn format_row(output: &mut String, result: &CaseResult, selector_width: usize) -> Result<()> {
        match &result.outcome {
            CaseOutcome::Measured(m) => writeln!(
                output,
                "  {:<selector_width$}  {:<21}  {:>8}  {:>12}",
                result.selector,
                result.traversal.as_str(),
                m.match_count,
                format_average(m.average_nanos)
            )?,
            CaseOutcome::Failed { .. } => writeln!(
                output,
                "  {:<selector_width$}  {:<21}  {:>8}  {:>12}",
                result.selector,
                result.traversal.as_str(),
                "-",
                "FAILED"
            )?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::fixtures;

    #[test]
    fn test_console_format_contains_suite_name() {
        let results = fixtures::results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("Test Suite"));
        assert!(output.contains("visdom"));
    }

    #[test]
    fn test_console_format_contains_rows() {
        let results = fixtures::results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("#target"));
        assert!(output.contains("descendants"));
        assert!(output.contains("12.5µs"));
    }

    #[test]
    fn test_console_format_marks_failures() {
        let results = fixtures::results();
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("FAILED"));
        assert!(output.contains("broken [case_failed]"));
    }

    #[test]
    fn test_console_format_all_passed() {
        let mut results = fixtures::results();
        results.results.truncate(1);
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("✓ 1 cases measured"));
        assert!(!output.contains("FAILED"));
    }
}
