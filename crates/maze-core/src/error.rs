use thiserror::Error;

/// Errors produced while reading grid sizes and cell labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grid size is not `<rows>x<cols>` with both counts inside the
    /// domain limits.
    #[error("Incorrect grid size: {0:?}")]
    MalformedDimensions(String),
    /// The text is not a column letter followed by a 1-based row number.
    #[error("Incorrect cell: {0:?}")]
    MalformedCell(String),
}
