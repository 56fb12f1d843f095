//! Structural checks run on a maze before any search.
//!
//! Every problem is collected rather than stopping at the first, so a caller
//! can report all of them at once. Each [`Violation`] belongs to a [`Field`]
//! of the maze description.

use std::collections::HashSet;
use std::fmt;

use crate::cell::describe_cell;
use crate::dims::Dimensions;
use crate::geom::Point;

/// Field of a maze description a violation refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Entrance,
    Walls,
}

impl Field {
    /// Key used when reporting the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Entrance => "entrance",
            Self::Walls => "walls",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single structural problem. Cells are carried as their labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The wall list is empty.
    MissingWalls,
    /// The entrance lies outside the grid.
    InvalidEntrance(String),
    /// A wall lies outside the grid or could not be read.
    InvalidWallCell(String),
    /// A wall sits on the entrance.
    EntranceIsWall(String),
    /// A wall was listed more than once.
    DuplicateWallCell(String),
}

impl Violation {
    /// The field the violation is reported under.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidEntrance(_) | Self::EntranceIsWall(_) => Field::Entrance,
            Self::MissingWalls | Self::InvalidWallCell(_) | Self::DuplicateWallCell(_) => {
                Field::Walls
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWalls => f.write_str("Walls are required"),
            Self::InvalidEntrance(c) => write!(f, "Incorrect entrance: {c}"),
            Self::InvalidWallCell(c) => write!(f, "Incorrect wall cell: {c}"),
            Self::EntranceIsWall(c) => write!(f, "Entrance is a wall cell: {c}"),
            Self::DuplicateWallCell(c) => write!(f, "Duplicate wall cell: {c}"),
        }
    }
}

/// The violations found in one maze. Empty means the maze may be searched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Violations reported under `field`, in discovery order.
    pub fn by_field(&self, field: Field) -> impl Iterator<Item = &Violation> {
        self.0.iter().filter(move |v| v.field() == field)
    }

    pub fn contains(&self, v: &Violation) -> bool {
        self.0.contains(v)
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Incremental maze checker.
///
/// Create it with the grid size and entrance, feed it every wall, then call
/// [`finish`](Self::finish).
#[derive(Debug)]
pub struct Validator {
    dims: Dimensions,
    entrance: Point,
    seen: HashSet<Point>,
    walls: usize,
    violations: Vec<Violation>,
}

impl Validator {
    /// Start checking a maze. The entrance bounds check happens here.
    pub fn new(dims: Dimensions, entrance: Point) -> Self {
        let mut violations = Vec::new();
        if !dims.contains(entrance) {
            violations.push(Violation::InvalidEntrance(describe_cell(entrance)));
        }
        Self {
            dims,
            entrance,
            seen: HashSet::new(),
            walls: 0,
            violations,
        }
    }

    /// Check one wall cell. A single wall may produce several violations.
    pub fn wall(&mut self, p: Point) {
        self.walls += 1;
        let label = describe_cell(p);
        if !self.dims.contains(p) {
            self.violations.push(Violation::InvalidWallCell(label.clone()));
        }
        if p == self.entrance {
            self.violations.push(Violation::EntranceIsWall(label.clone()));
        }
        if !self.seen.insert(p) {
            self.violations.push(Violation::DuplicateWallCell(label));
        }
    }

    /// Record a wall whose label could not be read.
    pub fn malformed_wall(&mut self, text: &str) {
        self.walls += 1;
        self.violations.push(Violation::InvalidWallCell(text.to_string()));
    }

    /// Finish checking and return everything found.
    pub fn finish(mut self) -> Violations {
        if self.walls == 0 {
            self.violations.insert(0, Violation::MissingWalls);
        }
        Violations(self.violations)
    }
}

/// Check a maze in one go.
pub fn validate(dims: Dimensions, entrance: Point, walls: &[Point]) -> Violations {
    let mut v = Validator::new(dims, entrance);
    for &p in walls {
        v.wall(p);
    }
    v.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::parse_cell;

    fn dims() -> Dimensions {
        Dimensions::parse("4x3").unwrap()
    }

    fn cells(labels: &[&str]) -> Vec<Point> {
        labels.iter().map(|l| parse_cell(l).unwrap()).collect()
    }

    #[test]
    fn valid_maze_has_no_violations() {
        let v = validate(dims(), Point::ZERO, &cells(&["B2", "B4", "C4"]));
        assert!(v.is_empty(), "{v}");
    }

    #[test]
    fn walls_are_required() {
        let v = validate(dims(), Point::ZERO, &[]);
        assert_eq!(v.into_vec(), vec![Violation::MissingWalls]);
    }

    #[test]
    fn entrance_out_of_bounds() {
        let v = validate(dims(), Point::new(0, 999), &cells(&["B2"]));
        assert_eq!(v.into_vec(), vec![Violation::InvalidEntrance("A1000".into())]);
    }

    #[test]
    fn entrance_is_wall() {
        let v = validate(dims(), Point::ZERO, &cells(&["A1"]));
        assert_eq!(v.len(), 1);
        let first = v.iter().next().unwrap();
        assert_eq!(first, &Violation::EntranceIsWall("A1".into()));
        assert_eq!(first.field(), Field::Entrance);
        assert_eq!(first.to_string(), "Entrance is a wall cell: A1");
    }

    #[test]
    fn duplicates() {
        let v = validate(dims(), Point::ZERO, &cells(&["A2", "A2", "A2"]));
        assert_eq!(
            v.into_vec(),
            vec![
                Violation::DuplicateWallCell("A2".into()),
                Violation::DuplicateWallCell("A2".into()),
            ]
        );
    }

    #[test]
    fn one_cell_can_trigger_several_violations() {
        // Entrance outside the grid, walled twice.
        let entrance = Point::new(5, 0);
        let v = validate(dims(), entrance, &[entrance, entrance]);
        assert_eq!(
            v.into_vec(),
            vec![
                Violation::InvalidEntrance("F1".into()),
                Violation::InvalidWallCell("F1".into()),
                Violation::EntranceIsWall("F1".into()),
                Violation::InvalidWallCell("F1".into()),
                Violation::EntranceIsWall("F1".into()),
                Violation::DuplicateWallCell("F1".into()),
            ]
        );
    }

    #[test]
    fn malformed_walls_count_as_walls() {
        let mut v = Validator::new(dims(), Point::ZERO);
        v.malformed_wall("A:2");
        v.wall(Point::new(0, 199));
        let v = v.finish();
        assert!(!v.contains(&Violation::MissingWalls));
        assert_eq!(
            v.by_field(Field::Walls).map(ToString::to_string).collect::<Vec<_>>(),
            vec!["Incorrect wall cell: A:2", "Incorrect wall cell: A200"]
        );
        assert_eq!(v.by_field(Field::Entrance).count(), 0);
    }

    #[test]
    fn violations_display_joins_messages() {
        let v = validate(dims(), Point::new(0, 9), &[]);
        assert_eq!(v.to_string(), "Walls are required; Incorrect entrance: A10");
    }
}
