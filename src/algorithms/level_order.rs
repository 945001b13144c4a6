use crate::algorithms::common::{SearchAlgorithm, SearchOutcome};
use crate::algorithms::search_tree::{NodeId, SearchTree};
use crate::grid::{Cell, Grid};
use crate::visited::{VisitStatus, VisitedSet};
use tracing::{debug, trace};

/// Level-by-level expansion from the start.
///
/// Historically called "iterative deepening", but every level is expanded exactly
/// once, so this behaves as a breadth-first search. A goal is detected while looking
/// at the neighbors of a node; the goal cell itself never becomes a node.
#[derive(Default)]
pub struct LevelOrder;

impl LevelOrder {
    pub fn new() -> Self {
        LevelOrder
    }

    /// Returns true when a goal neighbor was seen. Children created before that point
    /// stay in the tree but are not queued.
    fn expand(
        grid: &Grid,
        visited: &mut VisitedSet,
        tree: &mut SearchTree,
        node: NodeId,
        next_level: &mut Vec<NodeId>,
    ) -> bool {
        let position = tree.node(node).position;
        let mut children = Vec::with_capacity(4);

        for neighbor in grid.neighbors(&position) {
            match grid.kind_at(neighbor) {
                Cell::Goal => return true,
                Cell::Road if visited.status_at(neighbor) == VisitStatus::Unvisited => {
                    visited.mark_visited(neighbor);
                    // Level order never ranks nodes, so no heuristic is computed.
                    children.push(tree.add_child(node, neighbor, 0));
                }
                _ => {}
            }
        }

        next_level.extend(children);
        false
    }
}

impl SearchAlgorithm for LevelOrder {
    fn search(&mut self, grid: &Grid) -> SearchOutcome {
        let start = grid.start();
        let mut visited = VisitedSet::new(grid);
        let mut tree = SearchTree::new(start, 0);
        let mut level = vec![tree.root()];
        let mut depth = 0usize;
        let mut time = 0usize;
        let mut track = None;

        'levels: while !level.is_empty() {
            trace!(depth, width = level.len(), "expanding level");
            let mut next_level = Vec::new();

            for &node in &level {
                let found = Self::expand(grid, &mut visited, &mut tree, node, &mut next_level);
                time += 1;
                if found {
                    track = Some(node);
                    break 'levels;
                }
            }

            level = next_level;
            depth += 1;
        }

        debug!(
            algorithm = self.name(),
            time,
            depth,
            nodes = tree.len(),
            found = track.is_some(),
            "search finished"
        );

        SearchOutcome { tree, track, time }
    }

    fn name(&self) -> &'static str {
        "ids"
    }
}
