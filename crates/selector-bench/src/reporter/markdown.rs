//! Markdown reporter for benchmark results

use anyhow::Result;
use std::fmt::Write;

use super::format_average;
use crate::runner::{BenchmarkResults, CaseOutcome};

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Format benchmark results as a Markdown document
    pub fn format(results: &BenchmarkResults) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# {}", results.suite_name)?;
        writeln!(output)?;
        writeln!(
            output,
            "Engine `{}`, {} repetitions per case, {} nodes per tree, started {}.",
            results.engine, results.repetitions, results.node_count, results.started_at
        )?;
        writeln!(output)?;
        writeln!(output, "| Case | Selector | Traversal | Matches | Avg/rep |")?;
        writeln!(output, "|------|----------|-----------|--------:|--------:|")?;

        for result in &results.results {
            let (matches, average) = match &result.outcome {
                CaseOutcome::Measured(m) => {
                    (m.match_count.to_string(), format_average(m.average_nanos))
                }
                CaseOutcome::Failed { kind, .. } => ("-".to_string(), format!("**FAILED** ({})", kind)),
            };
            writeln!(
                output,
                "| {} | `{}` | {} | {} | {} |",
                result.name,
                result.selector.replace('|', "\\|"),
                result.traversal,
                matches,
                average
            )?;
        }

        let failures: Vec<_> = results.failures().collect();
        if !failures.is_empty() {
            writeln!(output)?;
            writeln!(output, "## Failures")?;
            writeln!(output)?;
            for result in failures {
                if let CaseOutcome::Failed { message, .. } = &result.outcome {
                    writeln!(output, "- **{}**: {}", result.name, message)?;
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::fixtures;

    #[test]
    fn test_markdown_table() {
        let output = MarkdownReporter::format(&fixtures::results()).unwrap();

        assert!(output.starts_with("# Test Suite\n"));
        assert!(output.contains("| find_id | `#target` | descendants | 1 | 12.5µs |"));
    }

    #[test]
    fn test_markdown_failures_section() {
        let output = MarkdownReporter::format(&fixtures::results()).unwrap();

        assert!(output.contains("**FAILED** (case_failed)"));
        assert!(output.contains("## Failures"));
        assert!(output.contains("- **broken**: Case failed during untimed execution"));
    }
}
