use maze_core::{Point, describe_cell};
use thiserror::Error;

/// Why a search produced no path. Both maze variants describe the maze
/// itself, not a fault of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier emptied before reaching the exit row.
    #[error("Maze doesn't have a solution")]
    NoSolution,
    /// More than one column leads into the exit row.
    #[error("Maze has multiple exits (columns {} and {})", column_letter(.first), column_letter(.second))]
    MultipleExits { first: i32, second: i32 },
    /// The entrance is off the grid or walled; validation was skipped.
    #[error("Incorrect entrance: {}", cell_label(.0))]
    InvalidEntrance(Point),
}

fn cell_label(p: &Point) -> String {
    describe_cell(*p)
}

fn column_letter(x: &i32) -> String {
    let label = describe_cell(Point::new(*x, 0));
    match label.strip_suffix('1') {
        Some(letter) => letter.to_string(),
        None => label,
    }
}
