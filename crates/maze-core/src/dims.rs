//! Grid sizes written as `<rows>x<cols>`, e.g. `4x3` for four rows of three
//! columns.

use std::fmt;
use std::str::FromStr;

use crate::cell::parse_positive;
use crate::error::ParseError;
use crate::geom::{Point, Range};

/// Most columns a maze may have (`A` through `[`).
pub const MAX_WIDTH: i32 = 27;

/// Most rows a maze may have.
pub const MAX_HEIGHT: i32 = 99;

/// Width and height of a maze grid.
///
/// Row 0 is the entrance boundary and row `height - 1` the exit boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    /// Dimensions within the domain limits, or `None`.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        ((1..=MAX_WIDTH).contains(&width) && (1..=MAX_HEIGHT).contains(&height))
            .then_some(Self { width, height })
    }

    /// Parse a `<rows>x<cols>` descriptor. Note the row count comes first.
    pub fn parse(descriptor: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedDimensions(descriptor.to_string());

        let (rows, cols) = descriptor.split_once('x').ok_or_else(malformed)?;
        let height = parse_positive(rows.as_bytes()).ok_or_else(malformed)?;
        let width = parse_positive(cols.as_bytes()).ok_or_else(malformed)?;
        Self::new(width, height).ok_or_else(malformed)
    }

    /// The whole grid as a range anchored at the origin.
    #[inline]
    pub fn range(self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        in_bounds(p.x, p.y, self.width, self.height)
    }

    /// Index of the exit row.
    #[inline]
    pub fn exit_row(self) -> i32 {
        self.height - 1
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.range().len()
    }

    /// Always false: dimensions are at least 1x1.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }
}

impl FromStr for Dimensions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Parse a `<rows>x<cols>` descriptor into `(width, height)`.
pub fn parse_dimensions(descriptor: &str) -> Result<(i32, i32), ParseError> {
    let d = Dimensions::parse(descriptor)?;
    Ok((d.width, d.height))
}

/// Whether `(x, y)` lies on a `width` × `height` grid.
#[inline]
pub fn in_bounds(x: i32, y: i32, width: i32, height: i32) -> bool {
    x >= 0 && x < width && y >= 0 && y < height
}
