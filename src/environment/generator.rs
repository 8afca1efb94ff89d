//! Procedural room-and-partition map generator.
//!
//! Works in world units and rasterizes axis-aligned rectangles onto cells:
//!
//! ```text
//! +----------------------------------------+   outer walls, wall_thickness
//! |         |          |          |        |
//! |         |          |     ----------    |   horizontal partitions at
//! |  S      |    ----------           |    |   33% and 66% of height
//! |              |          |              |
//! |   ------------------    |         E    |   vertical partitions at
//! |         |          |                   |   25%, 50%, 75% of width
//! +----------------------------------------+
//! ```
//!
//! Each partition gets a random extent and then one random passage carved
//! through it. The result is not guaranteed to connect start and goal; an
//! unreachable goal is an ordinary outcome the planner reports as no route.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{CellType, GridCoord};
use crate::grid::{DenseGrid, OccupancyGrid};

use super::TrueEnvironment;
use super::error::{EnvironmentError, Result};

/// Procedural generator parameters (world units).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// World width.
    /// Default: 800.0
    #[serde(default = "defaults::width")]
    pub width: f32,

    /// World height.
    /// Default: 600.0
    #[serde(default = "defaults::height")]
    pub height: f32,

    /// Side length of one grid cell in world units.
    /// Default: 20.0
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// Thickness of walls and partitions.
    /// Default: 20.0
    #[serde(default = "defaults::wall_thickness")]
    pub wall_thickness: f32,

    /// RNG seed. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

mod defaults {
    pub fn width() -> f32 {
        800.0
    }
    pub fn height() -> f32 {
        600.0
    }
    pub fn cell_size() -> f32 {
        20.0
    }
    pub fn wall_thickness() -> f32 {
        20.0
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: defaults::width(),
            height: defaults::height(),
            cell_size: defaults::cell_size(),
            wall_thickness: defaults::wall_thickness(),
            seed: None,
        }
    }
}

/// Largest grid the generator will allocate (2000 x 2000 cells).
pub const MAX_GRID_CELLS: usize = 4_000_000;

impl GeneratorConfig {
    /// Same config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Grid width in cells.
    pub fn grid_width(&self) -> usize {
        (self.width / self.cell_size).ceil() as usize
    }

    /// Grid height in cells.
    pub fn grid_height(&self) -> usize {
        (self.height / self.cell_size).ceil() as usize
    }

    /// Cell holding the agent's start position.
    pub fn start_cell(&self) -> GridCoord {
        let p = self.wall_thickness * 3.0;
        self.cell_at(p, p)
    }

    /// Cell holding the goal.
    pub fn goal_cell(&self) -> GridCoord {
        self.cell_at(
            self.width - self.wall_thickness * 5.0,
            self.height - self.wall_thickness * 5.0,
        )
    }

    fn cell_at(&self, x: f32, y: f32) -> GridCoord {
        GridCoord::new(
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// Check the parameters can produce a map with distinct, in-bounds
    /// start and goal cells.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.width, self.height, self.cell_size, self.wall_thickness]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(invalid("dimensions must be finite"));
        }
        if self.cell_size <= 0.0 {
            return Err(invalid("cell_size must be positive"));
        }
        if self.wall_thickness <= 0.0 {
            return Err(invalid("wall_thickness must be positive"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(invalid("width and height must be positive"));
        }

        let cells = (self.width as f64 / self.cell_size as f64).ceil()
            * (self.height as f64 / self.cell_size as f64).ceil();
        if cells > MAX_GRID_CELLS as f64 {
            return Err(invalid(&format!(
                "{cells} cells exceeds the limit of {MAX_GRID_CELLS}"
            )));
        }

        let (start, goal) = (self.start_cell(), self.goal_cell());
        let (w, h) = (self.grid_width() as i32, self.grid_height() as i32);
        let inside = |c: GridCoord| c.x >= 0 && c.y >= 0 && c.x < w && c.y < h;
        if !inside(start) || !inside(goal) {
            return Err(invalid(&format!(
                "start {start} or goal {goal} outside {w}x{h} grid"
            )));
        }
        if start == goal {
            return Err(invalid(&format!("start and goal coincide at {start}")));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> EnvironmentError {
    EnvironmentError::InvalidGeneratorConfig(reason.to_string())
}

/// Generate a random environment.
pub fn generate(config: &GeneratorConfig) -> Result<TrueEnvironment> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut raster = Raster::new(config);
    let (w, h, t) = (config.width, config.height, config.wall_thickness);

    let vertical = [w * 0.25, w * 0.5, w * 0.75];
    let horizontal = [h * 0.33, h * 0.66];

    for &x in &vertical {
        let top = random_between(&mut rng, t * 2.0, h * 0.4);
        let bottom = random_between(&mut rng, h * 0.6, h - t * 2.0);
        raster.fill(x, top, t, bottom - top, CellType::Wall);
    }
    for &y in &horizontal {
        let left = random_between(&mut rng, t * 2.0, w * 0.4);
        let right = random_between(&mut rng, w * 0.6, w - t * 2.0);
        raster.fill(left, y, right - left, t, CellType::Wall);
    }

    // Passages
    for &x in &vertical {
        let py = random_between(&mut rng, t * 2.0, h - t * 3.0);
        raster.fill(x - t / 2.0, py, t * 2.0, t * 3.0, CellType::Empty);
    }
    for &y in &horizontal {
        let px = random_between(&mut rng, t * 2.0, w - t * 3.0);
        raster.fill(px, y - t / 2.0, t * 3.0, t * 2.0, CellType::Empty);
    }

    // Outer walls last so no passage breaches the border.
    raster.fill(0.0, 0.0, w, t, CellType::Wall);
    raster.fill(0.0, h - t, w, t, CellType::Wall);
    raster.fill(0.0, 0.0, t, h, CellType::Wall);
    raster.fill(w - t, 0.0, t, h, CellType::Wall);

    let start = config.start_cell();
    let goal = config.goal_cell();
    for (coord, marker) in [(start, CellType::Start), (goal, CellType::End)] {
        if raster.grid.is_wall(coord) {
            warn!("[Generator] Wall over {:?} at {}, carving it free", marker, coord);
        }
        raster.grid.mark(coord, marker);
    }

    let counts = raster.grid.count_by_type();
    debug!(
        "[Generator] {}x{} cells, {} walls, seed={:?}",
        raster.grid.width(),
        raster.grid.height(),
        counts.wall,
        config.seed
    );

    Ok(TrueEnvironment::from_parts(raster.grid, start, goal))
}

/// `floor(uniform(min, max))`, or `min` when the range is empty.
fn random_between<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min.floor();
    }
    rng.random_range(min..max).floor()
}

/// World-space rectangle rasterizer over a dense cell grid.
struct Raster {
    grid: DenseGrid,
    cell_size: f32,
}

impl Raster {
    fn new(config: &GeneratorConfig) -> Self {
        Self {
            grid: DenseGrid::filled(config.grid_width(), config.grid_height(), CellType::Empty),
            cell_size: config.cell_size,
        }
    }

    /// Set every cell overlapped by the rectangle. Cells outside the grid
    /// are skipped.
    fn fill(&mut self, x: f32, y: f32, width: f32, height: f32, cell_type: CellType) {
        let x0 = (x / self.cell_size).floor() as i32;
        let x1 = ((x + width) / self.cell_size).ceil() as i32;
        let y0 = (y / self.cell_size).floor() as i32;
        let y1 = ((y + height) / self.cell_size).ceil() as i32;

        for i in x0..x1 {
            for j in y0..y1 {
                self.grid.mark(GridCoord::new(i, j), cell_type);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GeneratorConfig {
        GeneratorConfig::default().with_seed(seed)
    }

    #[test]
    fn test_default_dimensions() {
        let config = GeneratorConfig::default();
        assert_eq!(config.grid_width(), 40);
        assert_eq!(config.grid_height(), 30);
        assert_eq!(config.start_cell(), GridCoord::new(3, 3));
        assert_eq!(config.goal_cell(), GridCoord::new(35, 25));
    }

    #[test]
    fn test_outer_walls() {
        let env = generate(&seeded(7)).unwrap();
        for x in 0..40 {
            assert!(env.is_wall(GridCoord::new(x, 0)));
            assert!(env.is_wall(GridCoord::new(x, 29)));
        }
        for y in 0..30 {
            assert!(env.is_wall(GridCoord::new(0, y)));
            assert!(env.is_wall(GridCoord::new(39, y)));
        }
    }

    #[test]
    fn test_start_and_goal_free() {
        for seed in 0..20 {
            let env = generate(&seeded(seed)).unwrap();
            assert_eq!(env.cell(env.start()), CellType::Start);
            assert_eq!(env.cell(env.goal()), CellType::End);
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let a = generate(&seeded(42)).unwrap();
        let b = generate(&seeded(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partitions_present() {
        let env = generate(&seeded(3)).unwrap();
        let border = 2 * 40 + 2 * 28;
        let interior_walls = env
            .cells()
            .iter()
            .filter(|&(c, t)| t.is_wall() && c.x > 0 && c.y > 0 && c.x < 39 && c.y < 29)
            .count();
        assert!(interior_walls > 0);
        assert!(env.cells().count_by_type().wall > border);
    }

    #[test]
    fn test_invalid_config() {
        let mut config = GeneratorConfig::default();
        config.cell_size = 0.0;
        assert!(matches!(
            generate(&config),
            Err(EnvironmentError::InvalidGeneratorConfig(_))
        ));

        let tiny = GeneratorConfig {
            width: 40.0,
            height: 40.0,
            ..GeneratorConfig::default()
        };
        assert!(tiny.validate().is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let huge = GeneratorConfig {
            width: 1e12,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(EnvironmentError::InvalidGeneratorConfig(_))
        ));
        assert!(generate(&huge).is_err());

        // Exactly at the limit is fine
        let edge = GeneratorConfig {
            width: 2000.0,
            height: 2000.0,
            cell_size: 1.0,
            wall_thickness: 1.0,
            seed: Some(1),
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_fill_rasterization() {
        let config = GeneratorConfig::default();
        let mut raster = Raster::new(&config);
        raster.fill(30.0, 10.0, 20.0, 5.0, CellType::Wall);

        // x: floor(1.5)=1 .. ceil(2.5)=3, y: floor(0.5)=0 .. ceil(0.75)=1
        assert!(raster.grid.is_wall(GridCoord::new(1, 0)));
        assert!(raster.grid.is_wall(GridCoord::new(2, 0)));
        assert!(!raster.grid.is_wall(GridCoord::new(3, 0)));
        assert!(!raster.grid.is_wall(GridCoord::new(1, 1)));
    }
}
