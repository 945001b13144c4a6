use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use grid_search::batch_simulation::BatchSimulation;
use grid_search::config::Config;
use grid_search::environment::{EnvironmentSetup, MapSpec};
use grid_search::error::Result;
use grid_search::map_io;
use grid_search::statistics::{print_comparison_results, RunReport};
use std::path::{Path, PathBuf};

fn setup_logging(quiet: bool) {
    let default_filter = if quiet { "grid_search=warn" } else { "grid_search=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

/// `output.txt` -> `output.greedy.txt`
fn output_path_for(base: &Path, suffix: &str) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let file_name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}.{}", stem, suffix, ext),
        None => format!("{}.{}", stem, suffix),
    };
    base.with_file_name(file_name)
}

fn generate(config: &Config) -> Result<()> {
    let setup = EnvironmentSetup::generate(&MapSpec::from(config), config.seed)?;
    let grid = setup.create_grid();
    map_io::write_map(&config.input, &grid)?;

    println!(
        "Generated {}x{} map with {} walls and {} goals (seed {}) -> {}",
        grid.rows(),
        grid.cols(),
        setup.walls.len(),
        grid.goals().len(),
        setup.seed,
        config.input.display()
    );
    Ok(())
}

fn search(config: &Config) -> Result<()> {
    let strategies = config.strategies()?;
    let grid = map_io::read_map(&config.input)?;
    info!(
        input = %config.input.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        goals = grid.goals().len(),
        "map loaded"
    );

    let mut reports = Vec::with_capacity(strategies.len());
    for &strategy in &strategies {
        let mut marked = grid.clone();
        let report = RunReport::measure(strategy, &mut marked);

        let output = if strategies.len() == 1 {
            config.output.clone()
        } else {
            output_path_for(&config.output, strategy.as_str())
        };
        map_io::write_output(&output, &marked, &report.result)?;
        info!(%strategy, result = %report.result, output = %output.display(), "result written");

        if !config.quiet {
            println!("{}", report);
        }
        if config.visualize {
            print!("{}", marked.render_ascii());
            println!();
        }
        reports.push(report);
    }

    if reports.len() > 1 && !config.quiet {
        print_comparison_results(&reports);
    }
    Ok(())
}

fn run(config: Config) -> Result<()> {
    config.validate()?;

    if config.generate {
        generate(&config)
    } else if config.batch_mode {
        let mut batch = BatchSimulation::new(config.clone());
        batch.run()?;
        if !config.quiet {
            batch.print_summary();
        }
        Ok(())
    } else {
        search(&config)
    }
}

fn main() {
    let config = Config::parse();
    setup_logging(config.quiet);

    if let Err(e) = run(config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
