//! The [`WallGrid`] type: which cells of a maze are blocked.

use std::fmt;

use crate::dims::Dimensions;
use crate::geom::Point;

/// Blocked cells of a maze, stored row-major in a flat buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl WallGrid {
    /// Create a grid with no walls.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.len()],
        }
    }

    /// Create a grid with the given walls. Points outside the grid are
    /// ignored.
    pub fn with_walls(dims: Dimensions, walls: impl IntoIterator<Item = Point>) -> Self {
        let mut grid = Self::new(dims);
        for p in walls {
            grid.set_wall(p, true);
        }
        grid
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.dims.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.dims.width as usize) + (p.x as usize))
    }

    /// Size of the grid.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Whether `p` is a wall. Points outside the grid are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Whether `p` is on the grid and can be walked through.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| !self.cells[i])
    }

    /// Set or clear a wall. Returns `false` if `p` is outside the grid.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = wall;
                true
            }
            None => false,
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }

    /// Iterate over wall positions in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.dims.range().iter().filter(|&p| self.is_wall(p))
    }
}

/// Renders walls as `#` and open cells as `.`, one line per row.
impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rng = self.dims.range();
        for y in 0..rng.height() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for p in rng.line(y) {
                f.write_str(if self.is_wall(p) { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: i32, h: i32) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn empty_grid_is_open() {
        let g = WallGrid::new(dims(3, 4));
        assert_eq!(g.wall_count(), 0);
        assert!(g.is_open(Point::new(2, 3)));
        assert!(!g.is_open(Point::new(3, 3)));
        assert!(!g.is_wall(Point::new(3, 3)));
    }

    #[test]
    fn walls_block_cells() {
        let g = WallGrid::with_walls(
            dims(3, 4),
            [Point::new(1, 1), Point::new(1, 3), Point::new(2, 3), Point::new(9, 9)],
        );
        assert_eq!(g.wall_count(), 3);
        assert!(g.is_wall(Point::new(1, 1)));
        assert!(!g.is_open(Point::new(1, 1)));
        assert_eq!(
            g.walls().collect::<Vec<_>>(),
            vec![Point::new(1, 1), Point::new(1, 3), Point::new(2, 3)]
        );
    }

    #[test]
    fn set_wall_outside_reports_false() {
        let mut g = WallGrid::new(dims(2, 2));
        assert!(!g.set_wall(Point::new(-1, 0), true));
        assert!(g.set_wall(Point::new(1, 0), true));
        assert!(g.set_wall(Point::new(1, 0), false));
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn display_renders_rows() {
        let g = WallGrid::with_walls(dims(3, 4), [Point::new(1, 1), Point::new(1, 3), Point::new(2, 3)]);
        assert_eq!(g.to_string(), "...\n.#.\n...\n.##");
    }
}
