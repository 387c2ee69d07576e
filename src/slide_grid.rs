use core::fmt;
use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use grid_util::point::Point;
use thiserror::Error;

/// Errors surfaced while building a [SlideGrid]. A search that finds no path
/// is a normal result and intentionally has no variant here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The start, end or a blocked coordinate lies outside the grid bounds.
    #[error("coordinate {point} is outside the {width}x{height} grid")]
    InvalidCoordinate {
        point: Point,
        width: usize,
        height: usize,
    },
}

/// A slide-puzzle grid: fixed dimensions, one start and one end cell, and a
/// set of permanently blocked cells, with the Manhattan distance to the end
/// precomputed for every cell. Immutable once constructed; all per-run search
/// state lives in [SlideSearch](crate::SlideSearch) so independent runs over
/// the same grid never interfere.
#[derive(Clone, Debug)]
pub struct SlideGrid {
    blocked: BoolGrid,
    heuristic: SimpleGrid<i32>,
    start: Point,
    end: Point,
}

impl SlideGrid {
    /// Builds a grid from an explicit configuration. Fails with
    /// [GridError::InvalidCoordinate] if the start, end or any blocked
    /// coordinate is out of range; nothing is partially constructed. Blocking
    /// the start or end cell is accepted here and surfaces later as "no path".
    pub fn new(
        width: usize,
        height: usize,
        start: Point,
        end: Point,
        blocks: &[Point],
    ) -> Result<SlideGrid, GridError> {
        let in_bounds =
            |p: Point| p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height;
        let invalid = |point: Point| GridError::InvalidCoordinate {
            point,
            width,
            height,
        };
        if !in_bounds(start) {
            return Err(invalid(start));
        }
        if !in_bounds(end) {
            return Err(invalid(end));
        }
        let mut blocked = BoolGrid::new(width, height, false);
        for &block in blocks {
            if !in_bounds(block) {
                return Err(invalid(block));
            }
            blocked.set(block.x as usize, block.y as usize, true);
        }
        let mut heuristic = SimpleGrid::new(width, height, 0);
        for y in 0..height {
            for x in 0..width {
                heuristic.set(x, y, (x as i32 - end.x).abs() + (y as i32 - end.y).abs());
            }
        }
        Ok(SlideGrid {
            blocked,
            heuristic,
            start,
            end,
        })
    }

    pub fn width(&self) -> usize {
        self.blocked.width()
    }
    pub fn height(&self) -> usize {
        self.blocked.height()
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && self
                .blocked
                .index_in_bounds(point.x as usize, point.y as usize)
    }
    /// In-bounds and not a permanent obstacle.
    pub fn is_traversable(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.blocked.get_point(point)
    }
    /// Precomputed Manhattan distance from `point` to the end cell.
    pub fn heuristic(&self, point: Point) -> i32 {
        self.heuristic.get_point(point)
    }
}

impl fmt::Display for SlideGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x as i32, y as i32);
                let c = if p == self.start {
                    'S'
                } else if p == self.end {
                    'F'
                } else if !self.is_traversable(p) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
