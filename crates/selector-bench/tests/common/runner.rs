//! Shared helpers for integration tests

#![allow(dead_code)]

use selector_bench::config::BenchmarkConfig;
use selector_bench::tree::Shape;
use selector_bench::{BenchmarkRunner, CaseResult, QueryCase, Traversal};

/// Runner with a small repetition count so tests stay fast
pub fn runner(node_count: usize) -> BenchmarkRunner {
    BenchmarkRunner::new(BenchmarkConfig {
        repetitions: 3,
        node_count,
        ..Default::default()
    })
}

pub fn list_case(name: &str, selector: &str, traversal: Traversal) -> QueryCase {
    QueryCase::new(name, "ul", Shape::uniform("li"), "ul", selector, traversal)
}

pub fn pairs_case(name: &str, selector: &str, traversal: Traversal) -> QueryCase {
    QueryCase::new(
        name,
        "dl",
        Shape::alternating("dt", "dd"),
        "dl",
        selector,
        traversal,
    )
}

/// Match count of a case that must have been measured
pub fn matches(result: &CaseResult) -> usize {
    result
        .match_count()
        .unwrap_or_else(|| panic!("case '{}' failed: {:?}", result.name, result.outcome))
}
