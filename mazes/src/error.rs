use maze_core::{ParseError, Violations};
use maze_paths::SearchError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong between a maze description and its paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The grid size or the entrance could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The maze is structurally illegal.
    #[error("{0}")]
    Invalid(Violations),
    /// The maze is legal but cannot be solved.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// How a surrounding service should classify a [`MazeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Malformed or structurally illegal input.
    Validation,
    /// Well-formed input describing an unsolvable maze.
    Unprocessable,
}

/// One reportable problem, keyed by the description field it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub key: String,
    pub message: String,
}

impl FieldError {
    pub fn new(key: impl Into<String>, message: impl ToString) -> Self {
        Self {
            key: key.into(),
            message: message.to_string(),
        }
    }
}

impl MazeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) | Self::Invalid(_) => ErrorCategory::Validation,
            Self::Search(SearchError::InvalidEntrance(_)) => ErrorCategory::Validation,
            Self::Search(_) => ErrorCategory::Unprocessable,
        }
    }

    /// Flatten into per-field errors. Search failures are reported under
    /// `walls`, since the walls decide whether a maze can be solved.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::Parse(e @ ParseError::MalformedDimensions(_)) => vec![FieldError::new("gridSize", e)],
            Self::Parse(e @ ParseError::MalformedCell(_)) => vec![FieldError::new("entrance", e)],
            Self::Invalid(violations) => violations
                .iter()
                .map(|v| FieldError::new(v.field().key(), v))
                .collect(),
            Self::Search(e @ SearchError::InvalidEntrance(_)) => vec![FieldError::new("entrance", e)],
            Self::Search(e) => vec![FieldError::new("walls", e)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Dimensions, Point, validate};

    #[test]
    fn parse_errors_are_validation_errors() {
        let e = MazeError::from(ParseError::MalformedDimensions("25/100".into()));
        assert_eq!(e.category(), ErrorCategory::Validation);
        assert_eq!(
            e.field_errors(),
            vec![FieldError::new("gridSize", "Incorrect grid size: \"25/100\"")]
        );
    }

    #[test]
    fn violations_keep_their_fields() {
        let dims = Dimensions::parse("4x3").unwrap();
        let e = MazeError::Invalid(validate(dims, Point::ZERO, &[Point::ZERO, Point::new(0, 199)]));
        assert_eq!(e.category(), ErrorCategory::Validation);
        assert_eq!(
            e.field_errors(),
            vec![
                FieldError::new("entrance", "Entrance is a wall cell: A1"),
                FieldError::new("walls", "Incorrect wall cell: A200"),
            ]
        );
        assert_eq!(
            e.to_string(),
            "Entrance is a wall cell: A1; Incorrect wall cell: A200"
        );
    }

    #[test]
    fn search_errors_are_unprocessable() {
        let e = MazeError::from(SearchError::NoSolution);
        assert_eq!(e.category(), ErrorCategory::Unprocessable);
        assert_eq!(
            e.field_errors(),
            vec![FieldError::new("walls", "Maze doesn't have a solution")]
        );
    }
}
