//! Maze validation and solving.
//!
//! Takes a [`MazeDescription`] (grid size, entrance and walls as cell
//! labels), validates it, and computes the minimum and maximum paths with
//! the two search modes of [`maze_paths`] run side by side.

pub mod error;
pub mod maze;
pub mod report;

pub use error::{ErrorCategory, FieldError, MazeError};
pub use maze::{Maze, MazeDescription, Solutions, solve_description};
pub use maze_paths::Mode;
