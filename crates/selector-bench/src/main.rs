//! Selector benchmark binary
//!
//! Runs the query case catalogue and prints a report on stdout. Logs go to
//! stderr so the report can be piped.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use selector_bench::{BenchmarkRunner, CaseFilter, Config, OutputFormat, Reporter};

#[derive(Parser, Debug)]
#[command(name = "selector-bench")]
#[command(version, about = "Micro-benchmarks for CSS selector queries on synthetic trees")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run only the named case (repeatable)
    #[arg(long = "case", value_name = "NAME")]
    cases: Vec<String>,

    /// Timed repetitions per case
    #[arg(short, long)]
    repetitions: Option<u32>,

    /// Generated nodes per tree
    #[arg(short, long)]
    node_count: Option<usize>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List case names and exit
    #[arg(long)]
    list: bool,

    /// Validate the selected cases without timing them
    #[arg(long)]
    check: bool,

    /// Exit with an error if any case failed
    #[arg(long)]
    fail_on_error: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(repetitions) = args.repetitions {
        config.benchmark.repetitions = repetitions;
    }
    if let Some(node_count) = args.node_count {
        config.benchmark.node_count = node_count;
    }
    config.validate()?;

    let cases = config.all_cases();
    let filter = if args.cases.is_empty() {
        config.filter()
    } else {
        CaseFilter::Named(args.cases.clone())
    };

    if args.list {
        for case in filter.apply(&cases) {
            println!("{:<22} {:<21} {}", case.name, case.traversal, case.selector);
        }
        return Ok(());
    }

    let runner = BenchmarkRunner::new(config.benchmark.clone());

    if args.check {
        let problems = runner.validate(&cases, &filter);
        for (name, err) in &problems {
            eprintln!("{}: {}", name, err);
        }
        if !problems.is_empty() {
            bail!("{} cases are invalid", problems.len());
        }
        println!("{} cases OK", filter.apply(&cases).len());
        return Ok(());
    }

    let results = runner.run_suite(&cases, &filter);

    let reporter = Reporter::new(args.format);
    match &args.output {
        Some(path) => {
            reporter.write_to_file(&results, path)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => reporter.report(&results)?,
    }

    if args.fail_on_error && !results.passed() {
        bail!("{} cases failed", results.failures().count());
    }

    Ok(())
}
