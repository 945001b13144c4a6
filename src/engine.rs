use crate::algorithms::{BestFirst, LevelOrder, SearchAlgorithm, Strategy};
use crate::grid::Grid;
use crate::result::{build_result, SearchResult};
use tracing::debug;

/// Runs one strategy against a grid and marks the resulting path on it.
#[derive(Debug, Clone, Copy)]
pub struct PathfindingEngine {
    strategy: Strategy,
}

impl PathfindingEngine {
    pub fn new(strategy: Strategy) -> Self {
        PathfindingEngine { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn algorithm(&self) -> Box<dyn SearchAlgorithm> {
        match self.strategy {
            Strategy::BestFirst => Box::new(BestFirst::new()),
            Strategy::Greedy => Box::new(BestFirst::greedy()),
            Strategy::LevelOrder => Box::new(LevelOrder::new()),
        }
    }

    /// Searches `grid` and rewrites the road cells on the found path to `PathMarked`.
    /// All per-search state is dropped before returning.
    pub fn calc(&self, grid: &mut Grid) -> SearchResult {
        let outcome = self.algorithm().search(grid);
        let result = build_result(grid, &outcome);
        debug!(strategy = %self.strategy, %result, "calc complete");
        result
    }
}

/// Convenience wrapper for a single search.
pub fn calc(grid: &mut Grid, strategy: Strategy) -> SearchResult {
    PathfindingEngine::new(strategy).calc(grid)
}
