use selector_bench::config::Config;
use selector_bench::BenchmarkRunner;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("crates/selector-bench/scenarios/selectors.toml")
    };

    println!("Validating config file: {}", config_path.display());

    let config = Config::from_file(&config_path)?;

    println!("\n✓ Successfully parsed configuration!");
    println!("\nBenchmark: {}", config.benchmark.name);
    println!("Repetitions: {}", config.benchmark.repetitions);
    println!("Node count: {}", config.benchmark.node_count);
    println!("Built-in catalogue: {}", config.benchmark.include_builtin);

    let cases = config.all_cases();
    let filter = config.filter();
    let selected = filter.apply(&cases);

    println!("\nCases ({} of {}):", selected.len(), cases.len());
    for (i, case) in selected.iter().enumerate() {
        println!(
            "  {}. {} ({} {:?} from {:?})",
            i + 1,
            case.name,
            case.traversal,
            case.selector,
            case.scope
        );
    }

    let unknown = filter.unknown_names(&cases);
    if !unknown.is_empty() {
        println!("\n⚠ Unknown case names: {}", unknown.join(", "));
    }

    let problems = BenchmarkRunner::new(config.benchmark.clone()).validate(&cases, &filter);
    if !problems.is_empty() {
        for (name, err) in &problems {
            println!("  ✗ {}: {}", name, err);
        }
        anyhow::bail!("{} cases are invalid", problems.len());
    }

    println!("\n✓ All validations passed!");

    Ok(())
}
