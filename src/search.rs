use fxhash::FxBuildHasher;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::info;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::path::SolutionPath;
use crate::slide::Direction;
use crate::slide_grid::SlideGrid;
use crate::UNIT_COST;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start cell, the unique root of all reconstructed
/// paths. Deliberately out of range for any arena.
const NO_PARENT: usize = usize::MAX;

/// Heap entry for the open set. Relaxing a queued cell pushes a fresh entry
/// instead of re-keying the old one; superseded entries are discarded when
/// popped.
struct SmallestCostHolder {
    /// `g + h`, the cell's best_cost when the entry was pushed.
    estimated_cost: i32,
    /// `g`, the accumulated path cost when the entry was pushed.
    cost: i32,
    /// Index of the cell in the search arena.
    index: usize,
}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl Eq for SmallestCostHolder {}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates a subordering based
        // on cost, favoring entries that are further along their path
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Per-cell search metadata, kept in the search arena rather than in the grid.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CellState {
    /// Arena index of the cell this best cost was reached from; [NO_PARENT]
    /// for the start cell.
    pub(crate) parent: usize,
    /// Best known cost from the start.
    pub(crate) g: i32,
    /// `g` plus the cell's heuristic. Never worsens during a run.
    pub(crate) best_cost: i32,
    pub(crate) closed: bool,
    pub(crate) in_solution: bool,
}

/// Lifecycle of a [SlideSearch]: `Ready -> Running -> {Found, Exhausted}`.
/// `Exhausted` is the normal "no path exists" outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Ready,
    Running,
    Found,
    Exhausted,
}

/// One A* run over a borrowed [SlideGrid]. Holds the open heap, the closed
/// flags and the cost/parent arena for this run only.
pub struct SlideSearch<'a> {
    pub(crate) grid: &'a SlideGrid,
    pub(crate) cells: FxIndexMap<Point, CellState>,
    open: BinaryHeap<SmallestCostHolder>,
    status: SearchStatus,
}

impl<'a> SlideSearch<'a> {
    pub fn new(grid: &'a SlideGrid) -> SlideSearch<'a> {
        SlideSearch {
            grid,
            cells: FxIndexMap::default(),
            open: BinaryHeap::new(),
            status: SearchStatus::Ready,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Runs the search to completion: pops the cheapest open cell, closes it
    /// and expands it with one slide per cardinal direction, until the goal
    /// is popped ([SearchStatus::Found]) or the open set runs dry
    /// ([SearchStatus::Exhausted]). Calling this again after termination is a
    /// no-op returning the final status.
    pub fn process(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Ready {
            return self.status;
        }
        self.status = SearchStatus::Running;
        let start = self.grid.start();
        if !self.grid.is_traversable(start) {
            // A blocked cell must never enter the open set, the start included.
            info!("start cell {} is blocked, no path exists", start);
            self.status = SearchStatus::Exhausted;
            return self.status;
        }
        let h = self.grid.heuristic(start);
        self.cells.insert(
            start,
            CellState {
                parent: NO_PARENT,
                g: 0,
                best_cost: h,
                closed: false,
                in_solution: false,
            },
        );
        self.open.push(SmallestCostHolder {
            estimated_cost: h,
            cost: 0,
            index: 0,
        });
        while let Some(SmallestCostHolder { cost, index, .. }) = self.open.pop() {
            let (node, state) = {
                let (node, state) = self.cells.get_index(index).unwrap();
                (*node, *state)
            };
            // A cell may sit in the heap several times if a better way to it
            // was found while it was queued. Only the best entry matters; the
            // rest are stale and get dropped here, as do re-pops of cells
            // already closed through that best entry.
            if state.closed || cost > state.g {
                continue;
            }
            if let Some((_, state)) = self.cells.get_index_mut(index) {
                state.closed = true;
            }
            if node == self.grid.end() {
                self.status = SearchStatus::Found;
                return self.status;
            }
            for direction in Direction::CARDINALS {
                let Some(mv) = self.grid.slide(node, direction) else {
                    continue;
                };
                let g = cost + mv.steps * UNIT_COST;
                let best_cost = g + self.grid.heuristic(mv.target);
                let target_index = match self.cells.entry(mv.target) {
                    Vacant(e) => {
                        let target_index = e.index();
                        e.insert(CellState {
                            parent: index,
                            g,
                            best_cost,
                            closed: false,
                            in_solution: false,
                        });
                        target_index
                    }
                    Occupied(mut e) => {
                        let known = *e.get();
                        // Closed cells are final; open ones only improve.
                        if known.closed || best_cost >= known.best_cost {
                            continue;
                        }
                        let target_index = e.index();
                        e.insert(CellState {
                            parent: index,
                            g,
                            best_cost,
                            closed: false,
                            in_solution: false,
                        });
                        target_index
                    }
                };
                self.open.push(SmallestCostHolder {
                    estimated_cost: best_cost,
                    cost: g,
                    index: target_index,
                });
            }
        }
        info!(
            "open set exhausted, no path from {} to {}",
            self.grid.start(),
            self.grid.end()
        );
        self.status = SearchStatus::Exhausted;
        self.status
    }

    /// Best known estimated total cost per cell, [i32::MAX] where a cell was
    /// never reached. Diagnostic display only.
    pub fn best_costs(&self) -> SimpleGrid<i32> {
        let mut costs = SimpleGrid::new(self.grid.width(), self.grid.height(), i32::MAX);
        for (point, state) in &self.cells {
            costs.set_point(*point, state.best_cost);
        }
        costs
    }
}

/// Builds a search over `grid`, runs it and reconstructs the path, if any.
pub fn solve(grid: &SlideGrid) -> Option<SolutionPath> {
    let mut search = SlideSearch::new(grid);
    search.process();
    search.reconstruct()
}
