use crate::algorithms::Strategy;
use crate::config::Config;
use crate::environment::{EnvironmentSetup, MapSpec};
use crate::error::Result;
use crate::statistics::RunReport;
use rustc_hash::FxHashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const CSV_HEADER: &str = "simulation_id,seed,algorithm,rows,cols,num_walls,num_goals,found,length,optimal_length,time,elapsed_ns";

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub simulation_id: usize,
    pub seed: u64,
    pub strategy: Strategy,
    pub rows: usize,
    pub cols: usize,
    pub num_walls: usize,
    pub num_goals: usize,
    pub found: bool,
    pub length: i64,
    pub optimal_length: Option<usize>,
    pub time: usize,
    pub elapsed: Duration,
}

impl BatchResult {
    fn from_report(simulation_id: usize, setup: &EnvironmentSetup, spec: &MapSpec, report: &RunReport) -> Self {
        BatchResult {
            simulation_id,
            seed: setup.seed,
            strategy: report.strategy,
            rows: spec.rows,
            cols: spec.cols,
            num_walls: setup.walls.len(),
            num_goals: spec.num_goals,
            found: report.result.is_found(),
            length: report.result.length,
            optimal_length: report.optimal_length,
            time: report.result.time,
            elapsed: report.elapsed,
        }
    }

    fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.simulation_id,
            self.seed,
            self.strategy,
            self.rows,
            self.cols,
            self.num_walls,
            self.num_goals,
            self.found,
            self.length,
            self.optimal_length.map_or(-1, |o| o as i64),
            self.time,
            self.elapsed.as_nanos()
        )
    }
}

/// Per-strategy aggregate printed after a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategySummary {
    pub runs: usize,
    pub found: usize,
    pub total_time: usize,
    pub total_overhead: usize,
    pub optimal_hits: usize,
}

impl StrategySummary {
    fn record(&mut self, result: &BatchResult) {
        self.runs += 1;
        self.total_time += result.time;
        if result.found {
            self.found += 1;
            if let Some(optimal) = result.optimal_length {
                let overhead = (result.length as usize).saturating_sub(optimal);
                self.total_overhead += overhead;
                if overhead == 0 {
                    self.optimal_hits += 1;
                }
            }
        }
    }

    pub fn mean_time(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_time as f64 / self.runs as f64
        }
    }

    pub fn mean_overhead(&self) -> f64 {
        if self.found == 0 {
            0.0
        } else {
            self.total_overhead as f64 / self.found as f64
        }
    }
}

pub struct BatchSimulation {
    config: Config,
    results: Vec<BatchResult>,
    summaries: FxHashMap<Strategy, StrategySummary>,
    start_time: Instant,
    batch_size: usize,
    total_results_written: usize,
    next_simulation_id: usize,
}

impl BatchSimulation {
    pub fn new(config: Config) -> Self {
        BatchSimulation {
            config,
            results: Vec::new(),
            summaries: FxHashMap::default(),
            start_time: Instant::now(),
            batch_size: 100,
            total_results_written: 0,
            next_simulation_id: 0,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn run(&mut self) -> Result<()> {
        self.config.validate()?;
        self.initialize_csv_file()?;
        let strategies = self.config.strategies()?;
        let base_seed = self.config.seed.unwrap_or_else(rand::random::<u64>);

        info!(
            rows = self.config.rows,
            cols = self.config.cols,
            min_walls = self.config.min_walls,
            max_walls = self.config.max_walls,
            simulations = self.config.num_simulations,
            base_seed,
            output = %self.config.output_file.display(),
            "batch simulation started"
        );

        let wall_counts: Vec<usize> = (self.config.min_walls..=self.config.max_walls)
            .step_by(self.config.wall_step)
            .collect();
        for (configuration, &num_walls) in wall_counts.iter().enumerate() {
            if !self.config.quiet {
                println!(
                    "Configuration {}/{}: {} walls",
                    configuration + 1,
                    wall_counts.len(),
                    num_walls
                );
            }
            self.run_configuration(num_walls, base_seed, &strategies)?;

            if self.results.len() >= self.batch_size {
                self.flush_results_to_csv()?;
            }
        }

        self.flush_results_to_csv()?;
        info!(
            written = self.total_results_written,
            elapsed = ?self.start_time.elapsed(),
            "batch simulation finished"
        );
        Ok(())
    }

    fn run_configuration(&mut self, num_walls: usize, base_seed: u64, strategies: &[Strategy]) -> Result<()> {
        let spec = MapSpec {
            rows: self.config.rows,
            cols: self.config.cols,
            num_walls,
            num_goals: self.config.num_goals,
        };

        for _ in 0..self.config.num_simulations {
            let simulation_id = self.next_simulation_id;
            self.next_simulation_id += 1;

            let seed = base_seed.wrapping_add(simulation_id as u64);
            let setup = EnvironmentSetup::generate(&spec, Some(seed))?;
            let grid = setup.create_grid();

            for &strategy in strategies {
                let mut copy = grid.clone();
                let report = RunReport::measure(strategy, &mut copy);
                let result = BatchResult::from_report(simulation_id, &setup, &spec, &report);

                self.summaries.entry(strategy).or_default().record(&result);
                self.results.push(result);
            }
        }
        Ok(())
    }

    fn initialize_csv_file(&self) -> Result<()> {
        let mut file = File::create(&self.config.output_file)?;
        writeln!(file, "{}", CSV_HEADER)?;
        Ok(())
    }

    fn flush_results_to_csv(&mut self) -> Result<()> {
        if self.results.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.config.output_file)?;
        for result in &self.results {
            writeln!(file, "{}", result.csv_row())?;
        }
        self.total_results_written += self.results.len();
        self.results.clear();
        Ok(())
    }

    pub fn summary(&self, strategy: Strategy) -> Option<&StrategySummary> {
        self.summaries.get(&strategy)
    }

    pub fn total_results_written(&self) -> usize {
        self.total_results_written
    }

    pub fn print_summary(&self) {
        println!("\n=== BATCH SUMMARY ===");
        println!("Results written: {}", self.total_results_written);
        println!("Elapsed: {:.2?}", self.start_time.elapsed());
        println!();
        println!(
            "{:<12} {:<8} {:<8} {:<12} {:<14} {:<10}",
            "Algorithm", "Runs", "Found", "Optimal", "Avg overhead", "Avg time"
        );
        println!("{}", "-".repeat(66));

        for strategy in Strategy::ALL {
            let Some(summary) = self.summaries.get(&strategy) else {
                continue;
            };
            println!(
                "{:<12} {:<8} {:<8} {:<12} {:<14.3} {:<10.1}",
                strategy.to_string(),
                summary.runs,
                summary.found,
                summary.optimal_hits,
                summary.mean_overhead(),
                summary.mean_time()
            );
        }

        // Every strategy sees the same maps, so reachability must agree.
        let found: Vec<usize> = self.summaries.values().map(|s| s.found).collect();
        if found.windows(2).any(|w| w[0] != w[1]) {
            warn!(?found, "strategies disagree on reachability");
        }
    }
}
