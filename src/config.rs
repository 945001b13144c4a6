use crate::algorithms::Strategy;
use crate::error::{GridSearchError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Grid map path search", long_about = None)]
pub struct Config {
    /// Map file to read (or to write with --generate)
    #[arg(long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Where the marked map and result summary are written
    #[arg(long, default_value = "output.txt")]
    pub output: PathBuf,

    /// best_first, greedy, ids, or all
    #[arg(long, default_value = "best_first")]
    pub algorithm: String,

    /// Print the marked grid to the terminal
    #[arg(long, default_value_t = false)]
    pub visualize: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Write a random map to --input and exit
    #[arg(long, default_value_t = false)]
    pub generate: bool,

    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    #[arg(long, default_value_t = 1)]
    pub num_goals: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Run every strategy over many generated maps and write CSV
    #[arg(long, default_value_t = false)]
    pub batch_mode: bool,

    #[arg(long, default_value_t = 10)]
    pub num_simulations: usize,

    #[arg(long, default_value_t = 0)]
    pub min_walls: usize,

    #[arg(long, default_value_t = 100)]
    pub max_walls: usize,

    #[arg(long, default_value_t = 10)]
    pub wall_step: usize,

    #[arg(long, default_value = "batch_results.csv")]
    pub output_file: PathBuf,
}

impl Config {
    /// Strategies selected by `--algorithm`.
    pub fn strategies(&self) -> Result<Vec<Strategy>> {
        if self.algorithm == "all" {
            return Ok(Strategy::ALL.to_vec());
        }
        self.algorithm
            .parse::<Strategy>()
            .map(|strategy| vec![strategy])
            .map_err(GridSearchError::Config)
    }

    pub fn validate(&self) -> Result<()> {
        self.strategies()?;
        if self.batch_mode {
            if self.min_walls > self.max_walls {
                return Err(GridSearchError::Config(format!(
                    "--min-walls ({}) exceeds --max-walls ({})",
                    self.min_walls, self.max_walls
                )));
            }
            if self.wall_step == 0 {
                return Err(GridSearchError::Config("--wall-step must be positive".into()));
            }
        }
        Ok(())
    }
}
