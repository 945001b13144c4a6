use std::fmt::Write as _;

/// Largest accepted extent along either axis.
pub const MAX_DIMENSION: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Road,
    Start,
    Goal,
    PathMarked,
}

impl Cell {
    /// Decodes a map file cell code. `PathMarked` is output-only and never decoded.
    pub fn from_code(code: i64) -> Option<Cell> {
        match code {
            1 => Some(Cell::Wall),
            2 => Some(Cell::Road),
            3 => Some(Cell::Start),
            4 => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Cell::Wall => 1,
            Cell::Road => 2,
            Cell::Start => 3,
            Cell::Goal => 4,
            Cell::PathMarked => 5,
        }
    }

    /// Road and goal cells can be entered by a search.
    pub fn is_traversable(self) -> bool {
        matches!(self, Cell::Road | Cell::Goal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    goals: Vec<Position>,
}

impl Grid {
    /// Builds a grid from row-major cells. The caller guarantees `cells.len() == rows * cols`
    /// and that `start`/`goals` agree with the cell kinds.
    pub fn new(
        rows: usize,
        cols: usize,
        cells: Vec<Cell>,
        start: Position,
        goals: Vec<Position>,
    ) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid {
            rows,
            cols,
            cells,
            start,
            goals,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Panics when `pos` lies outside the grid.
    pub fn kind_at(&self, pos: Position) -> Cell {
        assert!(self.in_bounds(pos), "position {:?} out of bounds", pos);
        self.cells[self.index(pos)]
    }

    /// Orthogonal neighbors in up, right, down, left order, clipped to the grid.
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if pos.row > 0 {
            neighbors.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.col + 1 < self.cols {
            neighbors.push(Position::new(pos.row, pos.col + 1));
        }
        if pos.row + 1 < self.rows {
            neighbors.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            neighbors.push(Position::new(pos.row, pos.col - 1));
        }
        neighbors
    }

    /// Manhattan distance to the closest goal, or `rows + cols` if there are none.
    pub fn nearest_goal_distance(&self, pos: &Position) -> usize {
        self.goals
            .iter()
            .map(|goal| pos.manhattan(goal))
            .min()
            .unwrap_or(self.rows + self.cols)
    }

    /// Marks a road cell as part of the found path. Other kinds are left alone.
    pub fn mark_path(&mut self, pos: Position) {
        let idx = self.index(pos);
        if self.cells[idx] == Cell::Road {
            self.cells[idx] = Cell::PathMarked;
        }
    }

    pub fn path_cells(&self) -> Vec<Position> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| Position::new(row, col)))
            .filter(|pos| self.kind_at(*pos) == Cell::PathMarked)
            .collect()
    }

    /// Terminal-friendly rendering with a legend line.
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        out.push_str("Legend: S=Start, G=Goal, #=Wall, .=Road, *=Path\n");

        out.push_str("    ");
        for col in 0..self.cols {
            let _ = write!(out, "{} ", col % 10);
        }
        out.push('\n');

        for row in 0..self.rows {
            let _ = write!(out, "{:3} ", row);
            for col in 0..self.cols {
                let glyph = match self.kind_at(Position::new(row, col)) {
                    Cell::Wall => '#',
                    Cell::Road => '.',
                    Cell::Start => 'S',
                    Cell::Goal => 'G',
                    Cell::PathMarked => '*',
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a grid from raw cell codes, locating start and goals on the way.
    pub(crate) fn grid_from_codes(rows: usize, cols: usize, codes: &[i64]) -> Grid {
        let mut start = Position::new(0, 0);
        let mut goals = Vec::new();
        let cells = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                let pos = Position::new(i / cols, i % cols);
                let cell = Cell::from_code(code).expect("valid code");
                match cell {
                    Cell::Start => start = pos,
                    Cell::Goal => goals.push(pos),
                    _ => {}
                }
                cell
            })
            .collect();
        Grid::new(rows, cols, cells, start, goals)
    }

    #[test]
    fn neighbors_are_clipped_and_ordered() {
        let grid = grid_from_codes(2, 3, &[3, 2, 2, 2, 2, 4]);

        assert_eq!(
            grid.neighbors(&Position::new(0, 0)),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(
            grid.neighbors(&Position::new(1, 1)),
            vec![
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(1, 0)
            ]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = Grid::new(1, 1, vec![Cell::Start], Position::new(0, 0), Vec::new());
        assert!(grid.neighbors(&Position::new(0, 0)).is_empty());
    }

    #[test]
    fn nearest_goal_picks_the_closest() {
        let grid = grid_from_codes(1, 5, &[4, 2, 3, 2, 2]);
        assert_eq!(grid.nearest_goal_distance(&Position::new(0, 4)), 4);

        let grid = grid_from_codes(1, 5, &[4, 2, 3, 2, 4]);
        assert_eq!(grid.nearest_goal_distance(&Position::new(0, 3)), 1);
    }

    #[test]
    fn mark_path_only_touches_roads() {
        let mut grid = grid_from_codes(1, 3, &[3, 2, 4]);
        grid.mark_path(Position::new(0, 0));
        grid.mark_path(Position::new(0, 1));
        grid.mark_path(Position::new(0, 2));

        assert_eq!(
            grid.cells(),
            &[Cell::Start, Cell::PathMarked, Cell::Goal]
        );
        assert_eq!(grid.path_cells(), vec![Position::new(0, 1)]);
    }

    #[test]
    #[should_panic]
    fn kind_at_rejects_out_of_bounds() {
        let grid = grid_from_codes(1, 2, &[3, 4]);
        grid.kind_at(Position::new(1, 0));
    }

    #[test]
    fn render_uses_legend_glyphs() {
        let grid = grid_from_codes(1, 4, &[3, 1, 2, 4]);
        let rendered = grid.render_ascii();
        assert!(rendered.starts_with("Legend:"));
        assert!(rendered.contains("S # . G"));
    }

    #[test]
    fn render_header_lines_up_with_cells() {
        let grid = grid_from_codes(1, 3, &[3, 2, 4]);
        let rendered = grid.render_ascii();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "    0 1 2 ");
        assert_eq!(lines[2], "  0 S . G ");
    }
}
