//! Text format for maps and search results.
//!
//! Input: `rows cols` followed by `rows * cols` cell codes in row-major order.
//! Output: the (possibly path-marked) grid, a `---` line and the result summary.

use crate::error::{MapError, Result};
use crate::grid::{Cell, Grid, Position, MAX_DIMENSION};
use crate::result::SearchResult;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> std::result::Result<Option<i64>, MapError> {
    match tokens.next() {
        Some(token) => token
            .parse::<i64>()
            .map(Some)
            .map_err(|_| MapError::MalformedToken(token.to_string())),
        None => Ok(None),
    }
}

fn dimension(value: i64) -> Option<usize> {
    usize::try_from(value)
        .ok()
        .filter(|v| (1..=MAX_DIMENSION).contains(v))
}

/// Parses and validates a map. Tokens after the last expected cell are ignored.
pub fn parse_map(input: &str) -> std::result::Result<Grid, MapError> {
    let mut tokens = input.split_whitespace();

    let rows = next_int(&mut tokens)?.unwrap_or(0);
    let cols = next_int(&mut tokens)?.unwrap_or(0);
    let (row_count, col_count) = match (dimension(rows), dimension(cols)) {
        (Some(r), Some(c)) => (r, c),
        _ => return Err(MapError::InvalidDimensions { rows, cols }),
    };

    let expected = row_count * col_count;
    let mut cells = Vec::with_capacity(expected);
    let mut start: Option<Position> = None;
    let mut goals = Vec::new();

    while cells.len() < expected {
        let Some(code) = next_int(&mut tokens)? else {
            return Err(MapError::InsufficientCellData {
                expected,
                found: cells.len(),
            });
        };

        let position = Position::new(cells.len() / col_count, cells.len() % col_count);
        let cell = Cell::from_code(code).ok_or(MapError::UnknownCellCode { code, position })?;
        match cell {
            Cell::Start => {
                if let Some(first) = start {
                    return Err(MapError::DuplicateStart {
                        first,
                        second: position,
                    });
                }
                start = Some(position);
            }
            Cell::Goal => goals.push(position),
            _ => {}
        }
        cells.push(cell);
    }

    let start = match start {
        Some(start) if !goals.is_empty() => start,
        _ => return Err(MapError::MissingStartOrGoal),
    };

    debug!(rows = row_count, cols = col_count, goals = goals.len(), "map parsed");
    Ok(Grid::new(row_count, col_count, cells, start, goals))
}

pub fn read_map(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    Ok(parse_map(&text)?)
}

/// Renders a grid back into the input format.
pub fn format_map(grid: &Grid) -> String {
    let mut out = format!("{} {}\n", grid.rows(), grid.cols());
    write_cells(&mut out, grid);
    out
}

pub fn write_map(path: &Path, grid: &Grid) -> Result<()> {
    fs::write(path, format_map(grid))?;
    Ok(())
}

fn write_cells(out: &mut String, grid: &Grid) {
    for row in grid.cells().chunks(grid.cols()) {
        let line: Vec<String> = row.iter().map(|cell| cell.code().to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
}

pub fn format_output(grid: &Grid, result: &SearchResult) -> String {
    let mut out = String::new();
    write_cells(&mut out, grid);
    out.push_str("---\n");
    if result.is_found() {
        let _ = writeln!(out, "length={}", result.length);
        let _ = writeln!(out, "time={}", result.time);
    } else {
        let _ = writeln!(out, "time={}", result.time);
        out.push_str("no result\n");
    }
    out
}

pub fn write_output(path: &Path, grid: &Grid, result: &SearchResult) -> Result<()> {
    fs::write(path, format_output(grid, result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::NO_PATH;

    #[test]
    fn parses_a_valid_map() {
        let grid = parse_map("2 3\n3 2 1\n1 2 4\n").unwrap();

        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.goals(), &[Position::new(1, 2)]);
        assert_eq!(grid.kind_at(Position::new(1, 0)), Cell::Wall);
    }

    #[test]
    fn goals_keep_file_order() {
        let grid = parse_map("1 4 4 3 2 4").unwrap();
        assert_eq!(grid.goals(), &[Position::new(0, 0), Position::new(0, 3)]);
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            parse_map("0 3 3 2 4"),
            Err(MapError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            parse_map("501 1"),
            Err(MapError::InvalidDimensions { rows: 501, cols: 1 })
        );
        assert!(matches!(
            parse_map(""),
            Err(MapError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(
            parse_map("2 2 3 4 2"),
            Err(MapError::InsufficientCellData {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_duplicate_start() {
        assert_eq!(
            parse_map("1 3 3 3 4"),
            Err(MapError::DuplicateStart {
                first: Position::new(0, 0),
                second: Position::new(0, 1)
            })
        );
    }

    #[test]
    fn rejects_missing_start_or_goal() {
        assert_eq!(parse_map("1 2 2 4"), Err(MapError::MissingStartOrGoal));
        assert_eq!(parse_map("1 2 3 2"), Err(MapError::MissingStartOrGoal));
    }

    #[test]
    fn rejects_unknown_codes_and_garbage() {
        assert_eq!(
            parse_map("1 3 3 7 4"),
            Err(MapError::UnknownCellCode {
                code: 7,
                position: Position::new(0, 1)
            })
        );
        assert_eq!(
            parse_map("1 2 3 x"),
            Err(MapError::MalformedToken("x".to_string()))
        );
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let grid = parse_map("1 2 3 4 9 9 9").unwrap();
        assert_eq!(grid.cells(), &[Cell::Start, Cell::Goal]);
    }

    #[test]
    fn format_map_round_trips() {
        let text = "2 2\n3 2\n1 4\n";
        let grid = parse_map(text).unwrap();
        assert_eq!(format_map(&grid), text);
    }

    #[test]
    fn output_for_found_path() {
        let grid = parse_map("1 3 3 2 4").unwrap();
        let out = format_output(&grid, &SearchResult { length: 1, time: 3 });
        assert_eq!(out, "3 2 4\n---\nlength=1\ntime=3\n");
    }

    #[test]
    fn output_for_missing_path() {
        let grid = parse_map("1 3 3 1 4").unwrap();
        let out = format_output(
            &grid,
            &SearchResult {
                length: NO_PATH,
                time: 1,
            },
        );
        assert_eq!(out, "3 1 4\n---\ntime=1\nno result\n");
    }
}
