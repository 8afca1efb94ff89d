//! ASCII map parser.
//!
//! ```text
//! ####################
//! #S.................#      '#' wall
//! #...####.....####..#      '.' empty
//! #...#...E....#.....#      'S' start (exactly one)
//! ####################      'E' goal  (exactly one)
//! ```
//!
//! Row `y` is line `y` of the text, column `x` is the character offset.
//! Leading and trailing blank lines are ignored, as is trailing whitespace
//! on each line. Every remaining line must have the same length.

use crate::core::{CellType, GridCoord};
use crate::grid::{DenseGrid, OccupancyGrid};

use super::TrueEnvironment;
use super::error::{EnvironmentError, Result};

/// Parse an ASCII map into a true environment.
pub fn parse(text: &str) -> Result<TrueEnvironment> {
    let rows: Vec<&str> = text.trim().lines().map(str::trim_end).collect();

    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    if width == 0 {
        return Err(EnvironmentError::Empty);
    }
    let height = rows.len();

    let mut cells = DenseGrid::new(width, height);
    let mut start: Option<GridCoord> = None;
    let mut goal: Option<GridCoord> = None;

    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(EnvironmentError::InconsistentRowLength {
                row: y,
                expected: width,
                found,
            });
        }

        for (x, c) in row.chars().enumerate() {
            let cell_type =
                CellType::from_map_char(c).ok_or(EnvironmentError::InvalidCharacter {
                    row: y,
                    column: x,
                    found: c,
                })?;
            let coord = GridCoord::new(x as i32, y as i32);

            match cell_type {
                CellType::Start => record_marker(&mut start, 'S', coord)?,
                CellType::End => record_marker(&mut goal, 'E', coord)?,
                _ => {}
            }
            cells.mark(coord, cell_type);
        }
    }

    let start = start.ok_or(EnvironmentError::MissingStart)?;
    let goal = goal.ok_or(EnvironmentError::MissingGoal)?;

    Ok(TrueEnvironment::from_parts(cells, start, goal))
}

fn record_marker(slot: &mut Option<GridCoord>, marker: char, coord: GridCoord) -> Result<()> {
    if let Some(first) = *slot {
        return Err(EnvironmentError::DuplicateMarker {
            marker,
            first,
            second: coord,
        });
    }
    *slot = Some(coord);
    Ok(())
}
