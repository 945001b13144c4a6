use crate::config::Config;
use crate::error::{GridSearchError, Result};
use crate::grid::{Cell, Grid, Position, MAX_DIMENSION};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Shape of a random map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSpec {
    pub rows: usize,
    pub cols: usize,
    pub num_walls: usize,
    pub num_goals: usize,
}

impl From<&Config> for MapSpec {
    fn from(config: &Config) -> Self {
        MapSpec {
            rows: config.rows,
            cols: config.cols,
            num_walls: config.num_walls,
            num_goals: config.num_goals,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnvironmentSetup {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub goals: Vec<Position>,
    pub walls: FxHashSet<Position>,
    pub seed: u64,
}

impl EnvironmentSetup {
    /// Generates a random map. Without a seed one is drawn and recorded so the map can be
    /// reproduced later.
    pub fn generate(spec: &MapSpec, seed: Option<u64>) -> Result<Self> {
        if !(1..=MAX_DIMENSION).contains(&spec.rows) || !(1..=MAX_DIMENSION).contains(&spec.cols) {
            return Err(GridSearchError::Config(format!(
                "map size {}x{} outside 1..={}",
                spec.rows, spec.cols, MAX_DIMENSION
            )));
        }
        if spec.num_goals == 0 || spec.num_goals >= spec.rows * spec.cols {
            return Err(GridSearchError::Config(format!(
                "{} goals do not fit a {}x{} map with a start cell",
                spec.num_goals, spec.rows, spec.cols
            )));
        }

        let seed = seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);
        let random_position =
            |rng: &mut StdRng| Position::new(rng.gen_range(0..spec.rows), rng.gen_range(0..spec.cols));

        let start = random_position(&mut rng);

        let mut taken = FxHashSet::default();
        taken.insert(start);
        let mut goals = Vec::with_capacity(spec.num_goals);
        while goals.len() < spec.num_goals {
            let pos = random_position(&mut rng);
            if taken.insert(pos) {
                goals.push(pos);
            }
        }

        // Walls are best effort: give up after a bounded number of collisions.
        let mut walls = FxHashSet::default();
        let mut attempts = 0;
        while walls.len() < spec.num_walls && attempts < spec.num_walls * 3 {
            let pos = random_position(&mut rng);
            if !taken.contains(&pos) {
                walls.insert(pos);
            }
            attempts += 1;
        }

        debug!(
            seed,
            ?start,
            goals = goals.len(),
            walls = walls.len(),
            "generated environment"
        );

        Ok(EnvironmentSetup {
            rows: spec.rows,
            cols: spec.cols,
            start,
            goals,
            walls,
            seed,
        })
    }

    pub fn create_grid(&self) -> Grid {
        let mut cells = vec![Cell::Road; self.rows * self.cols];
        let index = |pos: &Position| pos.row * self.cols + pos.col;

        for wall in &self.walls {
            cells[index(wall)] = Cell::Wall;
        }
        cells[index(&self.start)] = Cell::Start;
        for goal in &self.goals {
            cells[index(goal)] = Cell::Goal;
        }

        // Same goal order a map loader would produce.
        let mut goals = self.goals.clone();
        goals.sort();

        Grid::new(self.rows, self.cols, cells, self.start, goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_io::{format_map, parse_map};

    fn spec(rows: usize, cols: usize, num_walls: usize, num_goals: usize) -> MapSpec {
        MapSpec {
            rows,
            cols,
            num_walls,
            num_goals,
        }
    }

    #[test]
    fn same_seed_same_map() {
        let a = EnvironmentSetup::generate(&spec(15, 12, 40, 2), Some(7)).unwrap();
        let b = EnvironmentSetup::generate(&spec(15, 12, 40, 2), Some(7)).unwrap();
        assert_eq!(a.create_grid(), b.create_grid());
        assert_eq!(a.seed, 7);
    }

    #[test]
    fn generated_map_is_valid_input() {
        let setup = EnvironmentSetup::generate(&spec(10, 10, 30, 3), Some(42)).unwrap();
        let grid = setup.create_grid();

        assert_eq!(grid.goals().len(), 3);
        assert!(setup.walls.len() <= 30);
        assert!(!setup.walls.contains(&setup.start));
        assert!(setup.goals.iter().all(|g| !setup.walls.contains(g)));

        let reparsed = parse_map(&format_map(&grid)).unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn rejects_impossible_specs() {
        assert!(EnvironmentSetup::generate(&spec(0, 5, 0, 1), None).is_err());
        assert!(EnvironmentSetup::generate(&spec(5, 501, 0, 1), None).is_err());
        assert!(EnvironmentSetup::generate(&spec(1, 2, 0, 2), None).is_err());
        assert!(EnvironmentSetup::generate(&spec(3, 3, 0, 0), None).is_err());
    }

    #[test]
    fn tiny_map_still_gets_start_and_goal() {
        let setup = EnvironmentSetup::generate(&spec(1, 2, 10, 1), Some(1)).unwrap();
        let grid = setup.create_grid();
        assert!(setup.walls.is_empty());
        assert_eq!(grid.kind_at(setup.start), Cell::Start);
    }
}
