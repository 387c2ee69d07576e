use crate::slide_grid::SlideGrid;
use core::fmt;
use grid_util::point::Point;

/// The four slide directions. `y` grows downward, matching the row order of
/// [SlideGrid]'s display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order used by the search engine. The order is part of the
    /// deterministic tie-break between equal-cost paths.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// Unit step taken when sliding in this direction.
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// Direction of the axis-aligned move from `from` to `to`, or [None] if
    /// the points coincide or share neither row nor column.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        match ((to.x - from.x).signum(), (to.y - from.y).signum()) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// A single slide: the landing cell and the number of cells crossed to reach
/// it, counting the landing cell itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideMove {
    pub target: Point,
    pub steps: i32,
}

impl SlideGrid {
    /// Slides from `from` as far as possible in `direction`. The end cell
    /// stops the slide early, as if it were a wall, so the goal can be landed
    /// on mid-corridor. Returns [None] when the adjacent cell is off-grid or
    /// blocked; otherwise `steps >= 1`. Sliding from an off-grid or blocked
    /// cell is a caller contract violation.
    pub fn slide(&self, from: Point, direction: Direction) -> Option<SlideMove> {
        debug_assert!(
            self.is_traversable(from),
            "slide from non-traversable cell {}",
            from
        );
        let delta = direction.delta();
        let mut current = from;
        let mut steps = 0;
        loop {
            let next = current + delta;
            if !self.is_traversable(next) {
                break;
            }
            current = next;
            steps += 1;
            if current == self.end() {
                break;
            }
        }
        (steps > 0).then_some(SlideMove {
            target: current,
            steps,
        })
    }
}
