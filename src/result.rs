use crate::algorithms::SearchOutcome;
use crate::grid::Grid;
use std::fmt;

/// Length reported when no goal could be reached.
pub const NO_PATH: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Cells between start and goal, or [`NO_PATH`].
    pub length: i64,
    /// Node expansions performed by the search.
    pub time: usize,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.length != NO_PATH
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_found() {
            write!(f, "length={} time={}", self.length, self.time)
        } else {
            write!(f, "time={} no result", self.time)
        }
    }
}

/// Marks the path held by `outcome` onto `grid` and summarises it.
///
/// The walk starts at the track node and follows parents until it reaches the
/// start cell, which is never marked. The goal cell is never marked either.
pub fn build_result(grid: &mut Grid, outcome: &SearchOutcome) -> SearchResult {
    let Some(track) = outcome.track else {
        return SearchResult {
            length: NO_PATH,
            time: outcome.time,
        };
    };

    let start = grid.start();
    let mut length = 0i64;
    for node in outcome
        .tree
        .ancestors(track)
        .take_while(|node| node.position != start)
    {
        grid.mark_path(node.position);
        length += 1;
    }

    SearchResult {
        length,
        time: outcome.time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::SearchTree;
    use crate::grid::tests::grid_from_codes;
    use crate::grid::{Cell, Position};

    #[test]
    fn missing_track_leaves_grid_untouched() {
        let mut grid = grid_from_codes(1, 3, &[3, 2, 4]);
        let before = grid.clone();
        let outcome = SearchOutcome {
            tree: SearchTree::new(grid.start(), 0),
            track: None,
            time: 7,
        };

        let result = build_result(&mut grid, &outcome);

        assert_eq!(result, SearchResult { length: NO_PATH, time: 7 });
        assert!(!result.is_found());
        assert_eq!(grid, before);
    }

    #[test]
    fn walk_marks_every_cell_except_start() {
        let mut grid = grid_from_codes(1, 4, &[3, 2, 2, 4]);
        let mut tree = SearchTree::new(grid.start(), 0);
        let a = tree.add_child(tree.root(), Position::new(0, 1), 0);
        let b = tree.add_child(a, Position::new(0, 2), 0);
        let outcome = SearchOutcome {
            tree,
            track: Some(b),
            time: 3,
        };

        let result = build_result(&mut grid, &outcome);

        assert_eq!(result, SearchResult { length: 2, time: 3 });
        assert_eq!(
            grid.cells(),
            &[Cell::Start, Cell::PathMarked, Cell::PathMarked, Cell::Goal]
        );
    }

    #[test]
    fn root_track_gives_zero_length() {
        let mut grid = grid_from_codes(1, 2, &[3, 4]);
        let tree = SearchTree::new(grid.start(), 1);
        let outcome = SearchOutcome {
            track: Some(tree.root()),
            tree,
            time: 1,
        };

        let result = build_result(&mut grid, &outcome);
        assert_eq!(result.length, 0);
        assert!(result.is_found());
    }

    #[test]
    fn display_matches_outcome() {
        assert_eq!(SearchResult { length: 4, time: 9 }.to_string(), "length=4 time=9");
        assert_eq!(
            SearchResult { length: NO_PATH, time: 2 }.to_string(),
            "time=2 no result"
        );
    }
}
