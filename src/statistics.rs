use crate::algorithms::Strategy;
use crate::engine::PathfindingEngine;
use crate::grid::{Cell, Grid, Position};
use crate::result::SearchResult;
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::{Duration, Instant};

/// Shortest possible path length on `grid`, counted in the same unit as
/// [`SearchResult::length`] (cells strictly between start and goal).
pub fn optimal_length(grid: &Grid) -> Option<usize> {
    let path = bfs(
        &grid.start(),
        |p: &Position| {
            grid.neighbors(p)
                .into_iter()
                .filter(|n| grid.kind_at(*n).is_traversable())
                .collect::<Vec<_>>()
        },
        |p| grid.kind_at(*p) == Cell::Goal,
    )?;
    Some(path.len().saturating_sub(2))
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub strategy: Strategy,
    pub result: SearchResult,
    pub optimal_length: Option<usize>,
    pub elapsed: Duration,
}

impl RunReport {
    /// Runs `strategy` on `grid` (marking the path on it) and times the call.
    pub fn measure(strategy: Strategy, grid: &mut Grid) -> Self {
        let optimal_length = optimal_length(grid);
        let engine = PathfindingEngine::new(strategy);
        let started = Instant::now();
        let result = engine.calc(grid);
        let elapsed = started.elapsed();

        RunReport {
            strategy: engine.strategy(),
            result,
            optimal_length,
            elapsed,
        }
    }

    /// Extra cells compared to the shortest path, when both exist.
    pub fn overhead(&self) -> Option<usize> {
        let optimal = self.optimal_length?;
        if !self.result.is_found() {
            return None;
        }
        Some((self.result.length as usize).saturating_sub(optimal))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.strategy)?;
        if self.result.is_found() {
            writeln!(f, "Path length: {}", self.result.length)?;
        } else {
            writeln!(f, "Path length: no result")?;
        }
        writeln!(f, "Expansions: {}", self.result.time)?;
        match self.optimal_length {
            Some(optimal) => writeln!(f, "Optimal length (BFS): {}", optimal)?,
            None => writeln!(f, "Optimal length (BFS): unreachable")?,
        }
        if let Some(overhead) = self.overhead() {
            writeln!(f, "Extra cells over optimal: {}", overhead)?;
        }
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Prints a side-by-side table of strategies run on the same map.
pub fn print_comparison_results(reports: &[RunReport]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<12} {:<8} {:<8} {:<8} {:<10} {:<12}",
        "Algorithm", "Found", "Length", "Optimal", "Expansions", "Time"
    );
    println!("{}", "-".repeat(62));

    for report in reports {
        let found = if report.result.is_found() { "yes" } else { "no" };
        let length = if report.result.is_found() {
            report.result.length.to_string()
        } else {
            "-".to_string()
        };
        let optimal = report
            .optimal_length
            .map_or_else(|| "-".to_string(), |o| o.to_string());
        println!(
            "{:<12} {:<8} {:<8} {:<8} {:<10} {:<12}",
            report.strategy.to_string(),
            found,
            length,
            optimal,
            report.result.time,
            format!("{:.2?}", report.elapsed)
        );
    }

    if let Some(fewest) = reports
        .iter()
        .filter(|r| r.result.is_found())
        .min_by_key(|r| r.result.time)
    {
        println!();
        println!(
            "Fewest expansions: {} ({} nodes)",
            fewest.strategy, fewest.result.time
        );
    }
}
