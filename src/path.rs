use core::fmt;
use grid_util::point::Point;

use crate::search::SlideSearch;
use crate::slide::Direction;

/// One labeled move of a reconstructed solution. The label is derived purely
/// from coordinate deltas and exists for display; `steps` is the number of
/// cells the slide crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideStep {
    pub direction: Direction,
    pub to: Point,
    pub steps: i32,
}

/// An ordered start-to-goal solution. `cells` holds the slide landing points,
/// start first; expand them with
/// [waypoints_to_path](crate::waypoints_to_path) to get every crossed cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionPath {
    pub cells: Vec<Point>,
    pub moves: Vec<SlideStep>,
    pub cost: i32,
}

impl fmt::Display for SolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "1. Start at ({}, {})", self.cells[0].x, self.cells[0].y)?;
        for (i, step) in self.moves.iter().enumerate() {
            writeln!(
                f,
                "{}. Move {} to ({}, {})",
                i + 2,
                step.direction,
                step.to.x,
                step.to.y
            )?;
        }
        write!(f, "{}. Done!", self.moves.len() + 2)
    }
}

impl SlideSearch<'_> {
    /// Walks parent links from the goal back to the start and returns the
    /// ordered solution, flagging every cell on it. [None] unless the goal
    /// was closed by [process](Self::process).
    pub fn reconstruct(&mut self) -> Option<SolutionPath> {
        let goal_index = self.cells.get_index_of(&self.grid.end())?;
        if !self.cells[goal_index].closed {
            return None;
        }
        let cost = self.cells[goal_index].g;
        // The start's parent index is out of range, which ends the walk.
        let mut cells: Vec<Point> = itertools::unfold(goal_index, |i| {
            self.cells.get_index(*i).map(|(point, state)| {
                *i = state.parent;
                *point
            })
        })
        .collect();
        cells.reverse();
        for point in &cells {
            if let Some(state) = self.cells.get_mut(point) {
                state.in_solution = true;
            }
        }
        let moves = cells
            .windows(2)
            .map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                let direction = Direction::between(from, to)
                    .expect("parent links only join distinct axis-aligned cells");
                SlideStep {
                    direction,
                    to,
                    steps: (to.x - from.x).abs() + (to.y - from.y).abs(),
                }
            })
            .collect();
        Some(SolutionPath { cells, moves, cost })
    }

    /// Landing points flagged as part of the solution, for display.
    pub fn solution_points(&self) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|(_, state)| state.in_solution)
            .map(|(point, _)| *point)
            .collect()
    }
}
