use crate::algorithms::common::{SearchAlgorithm, SearchOutcome};
use crate::algorithms::search_tree::{NodeId, SearchTree};
use crate::grid::{Cell, Grid};
use crate::visited::VisitedSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// How frontier nodes are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierOrder {
    /// `cost_so_far + heuristic`
    CostPlusHeuristic,
    /// `heuristic` alone
    HeuristicOnly,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct QueueEntry {
    priority: usize,
    sequence: u64,
    node: NodeId,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; earlier insertions win ties.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            other => other,
        }
    }
}

/// Priority-queue search guided by Manhattan distance to the nearest goal.
pub struct BestFirst {
    ordering: FrontierOrder,
}

impl BestFirst {
    pub fn new() -> Self {
        BestFirst {
            ordering: FrontierOrder::CostPlusHeuristic,
        }
    }

    pub fn greedy() -> Self {
        BestFirst {
            ordering: FrontierOrder::HeuristicOnly,
        }
    }

    fn priority(&self, tree: &SearchTree, id: NodeId) -> usize {
        let node = tree.node(id);
        match self.ordering {
            FrontierOrder::CostPlusHeuristic => node.cost_so_far + node.heuristic,
            FrontierOrder::HeuristicOnly => node.heuristic,
        }
    }
}

impl Default for BestFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for BestFirst {
    fn search(&mut self, grid: &Grid) -> SearchOutcome {
        let start = grid.start();
        let mut visited = VisitedSet::new(grid);
        let mut tree = SearchTree::new(start, grid.nearest_goal_distance(&start));
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0u64;
        let mut time = 0usize;

        frontier.push(QueueEntry {
            priority: self.priority(&tree, tree.root()),
            sequence,
            node: tree.root(),
        });

        let mut track = None;
        while let Some(entry) = frontier.pop() {
            time += 1;
            let current = tree.node(entry.node).position;
            trace!(?current, priority = entry.priority, "expanding");

            if grid.kind_at(current) == Cell::Goal {
                track = tree.node(entry.node).parent;
                break;
            }

            for neighbor in grid.neighbors(&current) {
                if !visited.is_eligible(grid, neighbor) {
                    continue;
                }
                visited.mark_visited(neighbor);

                let heuristic = grid.nearest_goal_distance(&neighbor);
                let child = tree.add_child(entry.node, neighbor, heuristic);
                sequence += 1;
                frontier.push(QueueEntry {
                    priority: self.priority(&tree, child),
                    sequence,
                    node: child,
                });
            }
        }

        debug!(
            algorithm = self.name(),
            time,
            nodes = tree.len(),
            leftover = frontier.len(),
            found = track.is_some(),
            "search finished"
        );

        SearchOutcome { tree, track, time }
    }

    fn name(&self) -> &'static str {
        match self.ordering {
            FrontierOrder::CostPlusHeuristic => "best_first",
            FrontierOrder::HeuristicOnly => "greedy",
        }
    }
}
