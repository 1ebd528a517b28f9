//! Run selector benchmarks from a TOML config file
//!
//! Usage: cargo run -p selector-bench --example run_benchmark -- <config.toml>

use anyhow::{Context, Result};
use selector_bench::config::Config;
use selector_bench::reporter::{OutputFormat, Reporter};
use selector_bench::run_benchmarks;
use std::env;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = env::args()
        .nth(1)
        .context("Usage: run_benchmark <config.toml>")?;

    println!("Loading config from: {}", config_path);
    let config = Config::from_file(&config_path)?;

    println!("Starting benchmark: {}", config.benchmark.name);
    println!("  Repetitions: {}", config.benchmark.repetitions);
    println!("  Node count: {}", config.benchmark.node_count);
    println!("  Cases: {}", config.all_cases().len());
    println!();

    let results = run_benchmarks(&config, &config.filter());

    let reporter = Reporter::new(OutputFormat::Console);
    reporter.report(&results)?;

    Ok(())
}
