//! Cell labels: a column letter followed by a 1-based row number.
//!
//! `A1` is the top-left cell `(0, 0)`, `C12` is `(2, 11)`. Columns run from
//! `A` to `Z` plus `[` for the 27th column, which is the byte following `Z`.

use crate::error::ParseError;
use crate::geom::Point;

/// Letter of the first column.
pub const FIRST_COLUMN: u8 = b'A';

/// Letter of the last representable column (the 27th).
pub const LAST_COLUMN: u8 = b'[';

/// Parse a cell label into a 0-based point.
pub fn parse_cell(text: &str) -> Result<Point, ParseError> {
    let malformed = || ParseError::MalformedCell(text.to_string());

    let bytes = text.as_bytes();
    let (&letter, digits) = bytes.split_first().ok_or_else(malformed)?;
    if !(FIRST_COLUMN..=LAST_COLUMN).contains(&letter) {
        return Err(malformed());
    }
    let row = parse_positive(digits).ok_or_else(malformed)?;
    Ok(Point::new(i32::from(letter - FIRST_COLUMN), row - 1))
}

/// Encode a 0-based point into its canonical label.
///
/// # Panics
///
/// Panics if `p` has no label (see [`is_encodable`]). Use [`describe_cell`]
/// for points that may lie outside every grid.
pub fn encode_cell(p: Point) -> String {
    assert!(is_encodable(p), "cell {p} has no label");
    let letter = char::from(FIRST_COLUMN + p.x as u8);
    format!("{letter}{}", p.y + 1)
}

/// Whether `p` has a label.
#[inline]
pub fn is_encodable(p: Point) -> bool {
    p.x >= 0 && p.x <= i32::from(LAST_COLUMN - FIRST_COLUMN) && p.y >= 0 && p.y < i32::MAX
}

/// Label of `p` if it has one, its raw coordinates otherwise. Used when
/// reporting cells that may lie outside any grid.
pub fn describe_cell(p: Point) -> String {
    if is_encodable(p) {
        encode_cell(p)
    } else {
        p.to_string()
    }
}

/// Parse an unsigned decimal without sign or leading zeros, at least 1.
pub(crate) fn parse_positive(digits: &[u8]) -> Option<i32> {
    match digits.first() {
        None | Some(b'0') => return None,
        _ => {}
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}
