//! Ground truth: the environment the agent explores.
//!
//! A [`TrueEnvironment`] is built once per episode and never mutated. Only
//! the range scanner reads it. It deliberately does not implement
//! [`OccupancyGrid`], so it cannot be handed to the planner in place of the
//! belief map.
//!
//! ```text
//! MapDescription ──► build_environment ──► TrueEnvironment
//!   ├─ Ascii(text)        ascii::parse
//!   ├─ Level(index)       levels::level
//!   └─ Procedural(cfg)    generator::generate
//! ```

pub mod ascii;
mod error;
pub mod generator;
pub mod levels;

pub use error::{EnvironmentError, Result};
pub use generator::GeneratorConfig;
pub use levels::LEVEL_COUNT;

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{CellType, GridCoord};
use crate::grid::{DenseGrid, OccupancyGrid};

/// How to build an environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapDescription {
    /// ASCII grid text (`#`, `.`, `S`, `E`)
    Ascii(String),
    /// Built-in level by index (wraps)
    Level(usize),
    /// Procedural generator
    Procedural(GeneratorConfig),
}

impl Default for MapDescription {
    fn default() -> Self {
        MapDescription::Level(0)
    }
}

/// Build an environment from a description.
pub fn build_environment(description: &MapDescription) -> Result<TrueEnvironment> {
    let env = match description {
        MapDescription::Ascii(text) => ascii::parse(text)?,
        MapDescription::Level(index) => levels::level(*index)?,
        MapDescription::Procedural(config) => generator::generate(config)?,
    };

    info!(
        "[Environment] Built {}x{} map, start={} goal={}",
        env.width(),
        env.height(),
        env.start(),
        env.goal()
    );
    Ok(env)
}

/// Immutable ground-truth grid with start and goal.
///
/// Cells hold `Wall`, `Empty`, `Start` or `End`. Never `Unknown`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrueEnvironment {
    cells: DenseGrid,
    start: GridCoord,
    goal: GridCoord,
}

impl TrueEnvironment {
    pub(crate) fn from_parts(cells: DenseGrid, start: GridCoord, goal: GridCoord) -> Self {
        Self { cells, start, goal }
    }

    /// Parse an ASCII map.
    pub fn from_ascii(text: &str) -> Result<Self> {
        ascii::parse(text)
    }

    /// Read and parse an ASCII map file.
    pub fn from_ascii_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let env = ascii::parse(&text)?;
        info!("[Environment] Loaded map from {}", path.as_ref().display());
        Ok(env)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Start cell.
    #[inline]
    pub fn start(&self) -> GridCoord {
        self.start
    }

    /// Goal cell.
    #[inline]
    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    /// Is the coordinate inside the map?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells.contains(coord)
    }

    /// True state of a cell (`Unknown` outside the map).
    #[inline]
    pub fn cell(&self, coord: GridCoord) -> CellType {
        self.cells.get_type(coord)
    }

    /// Is the cell a wall?
    #[inline]
    pub fn is_wall(&self, coord: GridCoord) -> bool {
        self.cells.is_wall(coord)
    }

    /// Read-only view of the underlying grid.
    pub fn cells(&self) -> &DenseGrid {
        &self.cells
    }

    /// Render back to the ASCII format, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() as i32 {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() as i32 {
                out.push(self.cell(GridCoord::new(x, y)).as_char());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_build_from_each_description() {
        let ascii = MapDescription::Ascii("###\n#S#\n#E#\n###".to_string());
        let env = build_environment(&ascii).unwrap();
        assert_eq!(env.goal(), GridCoord::new(1, 2));

        let level = build_environment(&MapDescription::Level(0)).unwrap();
        assert_eq!(level.width(), 20);

        let config = GeneratorConfig::default().with_seed(1);
        let generated = build_environment(&MapDescription::Procedural(config)).unwrap();
        assert_eq!((generated.width(), generated.height()), (40, 30));
    }

    #[test]
    fn test_build_propagates_errors() {
        let result = build_environment(&MapDescription::Ascii("#.#".to_string()));
        assert!(matches!(result, Err(EnvironmentError::MissingStart)));
    }

    #[test]
    fn test_from_ascii_file() {
        let path = std::env::temp_dir().join(format!("drishti-map-{}.txt", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#####\n#S.E#\n#####").unwrap();
        drop(file);

        let env = TrueEnvironment::from_ascii_file(&path).unwrap();
        assert_eq!(env.start(), GridCoord::new(1, 1));
        std::fs::remove_file(&path).ok();

        let missing = TrueEnvironment::from_ascii_file("/nonexistent/drishti/map.txt");
        assert!(matches!(missing, Err(EnvironmentError::Io(_))));
    }
}
