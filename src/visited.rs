use crate::grid::{Grid, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    Unvisited,
    Visited,
    Start,
    Goal,
}

/// Per-search overlay recording which cells have already been claimed by the frontier.
///
/// Goal cells keep their `Goal` status for the whole search, so a goal stays
/// reachable from every direction even after one branch has queued it.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    cols: usize,
    status: Vec<VisitStatus>,
}

impl VisitedSet {
    pub fn new(grid: &Grid) -> Self {
        let mut visited = VisitedSet {
            cols: grid.cols(),
            status: vec![VisitStatus::Unvisited; grid.rows() * grid.cols()],
        };

        let start = visited.index(grid.start());
        visited.status[start] = VisitStatus::Start;
        for goal in grid.goals() {
            let idx = visited.index(*goal);
            visited.status[idx] = VisitStatus::Goal;
        }
        visited
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn status_at(&self, pos: Position) -> VisitStatus {
        self.status[self.index(pos)]
    }

    pub fn mark_visited(&mut self, pos: Position) {
        let idx = self.index(pos);
        if self.status[idx] == VisitStatus::Unvisited {
            self.status[idx] = VisitStatus::Visited;
        }
    }

    pub fn is_open(&self, pos: Position) -> bool {
        matches!(
            self.status_at(pos),
            VisitStatus::Unvisited | VisitStatus::Goal
        )
    }

    /// A neighbor may be expanded when it is traversable on the grid and still open here.
    pub fn is_eligible(&self, grid: &Grid, pos: Position) -> bool {
        grid.kind_at(pos).is_traversable() && self.is_open(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::grid_from_codes;

    #[test]
    fn initial_status_reflects_start_and_goals() {
        let grid = grid_from_codes(1, 4, &[3, 2, 4, 4]);
        let visited = VisitedSet::new(&grid);

        assert_eq!(visited.status_at(Position::new(0, 0)), VisitStatus::Start);
        assert_eq!(visited.status_at(Position::new(0, 1)), VisitStatus::Unvisited);
        assert_eq!(visited.status_at(Position::new(0, 2)), VisitStatus::Goal);
        assert_eq!(visited.status_at(Position::new(0, 3)), VisitStatus::Goal);
    }

    #[test]
    fn goals_survive_mark_visited() {
        let grid = grid_from_codes(1, 3, &[3, 2, 4]);
        let mut visited = VisitedSet::new(&grid);

        visited.mark_visited(Position::new(0, 1));
        visited.mark_visited(Position::new(0, 2));

        assert_eq!(visited.status_at(Position::new(0, 1)), VisitStatus::Visited);
        assert_eq!(visited.status_at(Position::new(0, 2)), VisitStatus::Goal);
        assert!(!visited.is_open(Position::new(0, 1)));
        assert!(visited.is_open(Position::new(0, 2)));
    }

    #[test]
    fn walls_and_start_are_never_eligible() {
        let grid = grid_from_codes(1, 4, &[3, 1, 2, 4]);
        let visited = VisitedSet::new(&grid);

        assert!(!visited.is_eligible(&grid, Position::new(0, 0)));
        assert!(!visited.is_eligible(&grid, Position::new(0, 1)));
        assert!(visited.is_eligible(&grid, Position::new(0, 2)));
        assert!(visited.is_eligible(&grid, Position::new(0, 3)));
    }
}
