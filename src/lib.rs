//! # slide_pathfinding
//!
//! Grid pathfinding where every move is a slide: the mover picks one of the
//! four cardinal directions and travels until an obstacle or the grid edge
//! stops it, landing on the last free cell (or on the goal cell if it lies
//! along the slide). Finds a minimum-cost sequence of slide-moves with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) guided by a
//! Manhattan heuristic. A slide over `n` cells costs `n * `[UNIT_COST].
//! Exhausting the frontier without reaching the goal is a normal outcome,
//! reported as "no path" rather than an error.

pub mod path;
pub mod search;
pub mod slide;
pub mod slide_grid;

pub use path::{SlideStep, SolutionPath};
pub use search::{solve, SearchStatus, SlideSearch};
pub use slide::{Direction, SlideMove};
pub use slide_grid::{GridError, SlideGrid};

use grid_util::point::Point;
use std::collections::VecDeque;

/// Cost of crossing a single cell during a slide. The heuristic stays in plain
/// Manhattan units, which every unit step overpays, so it never overestimates.
pub const UNIT_COST: i32 = 10;

/// Turns slide landing points into a path on the grid which can be followed
/// step by step, including every cell crossed mid-slide.
pub fn waypoints_to_path(waypoints: Vec<Point>) -> Vec<Point> {
    let mut waypoint_queue = waypoints.into_iter().collect::<VecDeque<Point>>();
    let mut path: Vec<Point> = Vec::new();
    let Some(mut current) = waypoint_queue.pop_front() else {
        return path;
    };
    path.push(current);
    for next in waypoint_queue {
        while current != next {
            let delta = Point::new((next.x - current.x).signum(), (next.y - current.y).signum());
            current = current + delta;
            path.push(current);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_waypoints_into_unit_steps() {
        let waypoints = vec![Point::new(0, 0), Point::new(0, 2), Point::new(2, 2)];
        assert_eq!(
            waypoints_to_path(waypoints),
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn empty_waypoints_expand_to_nothing() {
        assert!(waypoints_to_path(Vec::new()).is_empty());
    }
}
