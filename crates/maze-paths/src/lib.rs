//! Path search through entrance-to-exit mazes.
//!
//! [`find_path`] runs a best-first traversal from the entrance until it pops
//! a cell of the exit row. The frontier is ordered by row, then by steps
//! taken, and the [`Mode`] picks the direction of that order:
//!
//! - [`Mode::Shortest`] dives towards the exit row,
//! - [`Mode::Longest`] sweeps the upper rows first and wanders.
//!
//! The ordering is a fixed heuristic, not a cost relaxation, so results are
//! reproducible rather than provably optimal. A maze whose exit row can be
//! entered from more than one column is rejected with
//! [`SearchError::MultipleExits`].

mod error;
mod frontier;
mod mode;
mod path;
mod search;

pub use error::SearchError;
pub use mode::{Mode, ModeParseError};
pub use path::Path;
pub use search::find_path;
