use std::fmt;

use maze_core::{Point, encode_cell, is_encodable};

/// Cells from the entrance to an exit cell, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    /// Build a path from cells already in entrance-to-exit order.
    ///
    /// Returns `None` for an empty list, for a cell without a label, or when
    /// two consecutive cells are not orthogonal neighbours.
    pub fn new(cells: Vec<Point>) -> Option<Self> {
        if cells.is_empty()
            || !cells.iter().all(|&p| is_encodable(p))
            || cells.windows(2).any(|w| !w[0].is_adjacent(w[1]))
        {
            return None;
        }
        Some(Self { cells })
    }

    pub(crate) fn from_trace(cells: Vec<Point>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells, which is `steps() + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a path holds at least the entrance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Moves made from the entrance.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    #[inline]
    pub fn entrance(&self) -> Point {
        self.cells[0]
    }

    #[inline]
    pub fn exit(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Cell labels in order, e.g. `["A1", "A2"]`.
    pub fn encode(&self) -> Vec<String> {
        self.cells.iter().map(|&p| encode_cell(p)).collect()
    }
}

/// Comma-separated labels, e.g. `A1,A2,A3`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &p) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&encode_cell(p))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter().map(|&p| encode_cell(p)))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let labels = Vec::<String>::deserialize(deserializer)?;
        let cells = labels
            .iter()
            .map(|l| maze_core::parse_cell(l).map_err(D::Error::custom))
            .collect::<Result<Vec<_>, _>>()?;
        Path::new(cells).ok_or_else(|| D::Error::custom("path cells must be consecutive neighbours"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.entrance(), Point::new(0, 0));
        assert_eq!(p.exit(), Point::new(1, 1));
        assert_eq!(p.encode(), vec!["A1", "A2", "B2"]);
        assert_eq!(p.to_string(), "A1,A2,B2");
    }

    #[test]
    fn rejects_gaps() {
        assert!(Path::new(vec![]).is_none());
        assert!(Path::new(vec![Point::new(0, 0), Point::new(1, 1)]).is_none());
        assert!(Path::new(vec![Point::new(2, 0)]).is_some());
    }

    #[test]
    fn rejects_cells_without_labels() {
        assert!(Path::new(vec![Point::new(27, 0)]).is_none());
        assert!(Path::new(vec![Point::new(0, 0), Point::new(-1, 0)]).is_none());
    }
}
