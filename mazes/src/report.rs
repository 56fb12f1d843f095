//! JSON documents written by the command line tool.

use maze_paths::Path;
use serde::Serialize;

use crate::error::{ErrorCategory, FieldError, MazeError};
use crate::maze::Solutions;

/// Path found by one mode.
#[derive(Debug, Serialize)]
pub struct SolutionResponse<'a> {
    pub ok: bool,
    pub path: &'a Path,
}

/// Paths found by both modes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionsResponse<'a> {
    pub ok: bool,
    pub min_path: &'a Path,
    pub max_path: &'a Path,
}

/// Outcome of a validation-only run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidResponse {
    pub ok: bool,
    pub grid_size: String,
    pub walls: usize,
}

/// Every problem found with a maze.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub category: ErrorCategory,
    pub errors: Vec<FieldError>,
}

impl<'a> SolutionResponse<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { ok: true, path }
    }
}

impl<'a> SolutionsResponse<'a> {
    pub fn new(solutions: &'a Solutions) -> Self {
        Self {
            ok: true,
            min_path: &solutions.min,
            max_path: &solutions.max,
        }
    }
}

impl From<&MazeError> for ErrorResponse {
    fn from(e: &MazeError) -> Self {
        Self {
            ok: false,
            category: e.category(),
            errors: e.field_errors(),
        }
    }
}
