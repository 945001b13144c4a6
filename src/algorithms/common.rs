use crate::algorithms::search_tree::{NodeId, SearchTree};
use crate::grid::Grid;
use std::fmt;
use std::str::FromStr;

/// What a strategy leaves behind once its frontier is exhausted or a goal is reached.
#[derive(Debug)]
pub struct SearchOutcome {
    pub tree: SearchTree,
    /// Last node before the goal. The path runs from here up to, but not including, the start.
    pub track: Option<NodeId>,
    /// Number of node expansions.
    pub time: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.track.is_some()
    }
}

pub trait SearchAlgorithm {
    fn search(&mut self, grid: &Grid) -> SearchOutcome;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Frontier ordered by cost so far plus nearest-goal distance.
    BestFirst,
    /// Frontier ordered by nearest-goal distance only.
    Greedy,
    /// Level-synchronous breadth-first expansion.
    LevelOrder,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BestFirst, Strategy::Greedy, Strategy::LevelOrder];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::BestFirst => "best_first",
            Strategy::Greedy => "greedy",
            Strategy::LevelOrder => "ids",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best_first" | "a_star" => Ok(Strategy::BestFirst),
            "greedy" | "gbs" => Ok(Strategy::Greedy),
            "ids" | "level_order" => Ok(Strategy::LevelOrder),
            other => Err(format!(
                "unknown algorithm '{}': select 'best_first', 'greedy', 'ids', or 'all'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn aliases_are_accepted() {
        assert_eq!("a_star".parse::<Strategy>(), Ok(Strategy::BestFirst));
        assert_eq!("gbs".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("level_order".parse::<Strategy>(), Ok(Strategy::LevelOrder));
        assert!("dijkstra".parse::<Strategy>().is_err());
    }
}
