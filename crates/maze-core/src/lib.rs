//! **maze-core**: grid model for entrance-to-exit mazes.
//!
//! A maze is a rectangular grid of at most 27 columns by 99 rows. Its
//! entrance lies on the top row and any cell of the bottom row is an exit.
//! This crate provides the shared vocabulary: geometry primitives, grid
//! sizes, cell labels (`A1`, `C12`), a wall grid, and the structural
//! validator run before any search.

pub mod cell;
pub mod dims;
pub mod error;
pub mod geom;
pub mod grid;
pub mod validate;

pub use cell::{describe_cell, encode_cell, is_encodable, parse_cell};
pub use dims::{Dimensions, MAX_HEIGHT, MAX_WIDTH, in_bounds, parse_dimensions};
pub use error::ParseError;
pub use geom::{Point, Range};
pub use grid::WallGrid;
pub use validate::{Field, Validator, Violation, Violations, validate};
