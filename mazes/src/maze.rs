//! Mazes as submitted by users, and solving them in both modes.

use maze_core::{Dimensions, Point, Validator, WallGrid, parse_cell};
use maze_paths::{Mode, Path, find_path};
use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// A maze as it arrives over the wire.
///
/// ```json
/// { "gridSize": "4x3", "entrance": "A1", "walls": ["B2", "B4", "C4"] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeDescription {
    /// `<rows>x<cols>`, up to `99x27`.
    pub grid_size: String,
    /// Entrance cell label on the top row.
    pub entrance: String,
    /// Wall cell labels, in any order.
    #[serde(default)]
    pub walls: Vec<String>,
}

/// A parsed maze that passed validation and may be searched.
#[derive(Clone, Debug)]
pub struct Maze {
    entrance: Point,
    grid: WallGrid,
}

/// Paths found by both modes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solutions {
    pub min: Path,
    pub max: Path,
}

impl Solutions {
    pub fn get(&self, mode: Mode) -> &Path {
        match mode {
            Mode::Shortest => &self.min,
            Mode::Longest => &self.max,
        }
    }
}

impl Maze {
    /// Read and validate a description.
    ///
    /// The grid size and entrance must parse. Wall problems, including
    /// labels that do not parse, are gathered into a single
    /// [`MazeError::Invalid`].
    pub fn parse(desc: &MazeDescription) -> Result<Self, MazeError> {
        let dims = Dimensions::parse(&desc.grid_size)?;
        let entrance = parse_cell(&desc.entrance)?;

        let mut validator = Validator::new(dims, entrance);
        let mut walls = Vec::with_capacity(desc.walls.len());
        for raw in &desc.walls {
            match parse_cell(raw) {
                Ok(p) => {
                    validator.wall(p);
                    walls.push(p);
                }
                Err(_) => validator.malformed_wall(raw),
            }
        }

        let violations = validator.finish();
        if !violations.is_empty() {
            log::info!("rejected {dims} maze: {violations}");
            return Err(MazeError::Invalid(violations));
        }

        Ok(Self {
            entrance,
            grid: WallGrid::with_walls(dims, walls),
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.grid.dims()
    }

    #[inline]
    pub fn entrance(&self) -> Point {
        self.entrance
    }

    #[inline]
    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    /// Run a single search.
    pub fn solve(&self, mode: Mode) -> Result<Path, MazeError> {
        Ok(find_path(&self.grid, self.entrance, mode)?)
    }

    /// Run both searches concurrently and require both to succeed.
    ///
    /// Both searches always run to completion. When both fail, the
    /// shortest search's error is reported.
    pub fn solve_both(&self) -> Result<Solutions, MazeError> {
        let (min, max) = rayon::join(|| self.solve(Mode::Shortest), || self.solve(Mode::Longest));
        match (min, max) {
            (Ok(min), Ok(max)) => {
                log::debug!(
                    "solved {} maze: min {} steps, max {} steps",
                    self.dims(),
                    min.steps(),
                    max.steps()
                );
                Ok(Solutions { min, max })
            }
            (Err(e), _) | (_, Err(e)) => {
                log::info!("rejected {} maze: {e}", self.dims());
                Err(e)
            }
        }
    }
}

/// Parse, validate and solve a description in both modes.
pub fn solve_description(desc: &MazeDescription) -> Result<Solutions, MazeError> {
    Maze::parse(desc)?.solve_both()
}
