/// Fuzzes the slide search by checking for many random grids that the A* cost
/// matches a brute-force Dijkstra over the slide graph, that every returned
/// move replays as a legal slide, and that both sides agree on "no path".
use grid_util::point::Point;
use rand::prelude::*;
use slide_pathfinding::{solve, Direction, SlideGrid, SolutionPath, UNIT_COST};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> SlideGrid {
    let start = Point::new(0, 0);
    let end = Point::new(w as i32 - 1, h as i32 - 1);
    let mut blocks = Vec::new();
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            let p = Point::new(x, y);
            if p != start && p != end && rng.gen_bool(0.3) {
                blocks.push(p);
            }
        }
    }
    SlideGrid::new(w, h, start, end, &blocks).unwrap()
}

/// Reference shortest slide-path cost by plain Dijkstra over all cells.
fn dijkstra_cost(grid: &SlideGrid) -> Option<i32> {
    if !grid.is_traversable(grid.start()) {
        return None;
    }
    let width = grid.width();
    let ix = |p: Point| p.y as usize * width + p.x as usize;
    let mut dist = vec![i32::MAX; width * grid.height()];
    let mut heap = BinaryHeap::new();
    dist[ix(grid.start())] = 0;
    heap.push(Reverse((0, grid.start().x, grid.start().y)));
    while let Some(Reverse((d, x, y))) = heap.pop() {
        let p = Point::new(x, y);
        if d > dist[ix(p)] {
            continue;
        }
        if p == grid.end() {
            return Some(d);
        }
        for direction in Direction::CARDINALS {
            if let Some(mv) = grid.slide(p, direction) {
                let nd = d + mv.steps * UNIT_COST;
                if nd < dist[ix(mv.target)] {
                    dist[ix(mv.target)] = nd;
                    heap.push(Reverse((nd, mv.target.x, mv.target.y)));
                }
            }
        }
    }
    None
}

/// Replays the returned moves through the slide generator and sums their cost.
fn replay_cost(grid: &SlideGrid, path: &SolutionPath) -> i32 {
    assert_eq!(path.cells[0], grid.start());
    assert_eq!(*path.cells.last().unwrap(), grid.end());
    let mut total = 0;
    let mut current = path.cells[0];
    for step in &path.moves {
        let mv = grid
            .slide(current, step.direction)
            .expect("solution move must be a legal slide");
        assert_eq!(mv.target, step.to);
        assert_eq!(mv.steps, step.steps);
        total += mv.steps * UNIT_COST;
        current = mv.target;
    }
    assert_eq!(current, grid.end());
    total
}

#[test]
fn fuzz_optimal_cost() {
    const N_GRIDS: usize = 2500;
    let mut rng = StdRng::seed_from_u64(0);
    for (w, h) in [(4, 4), (6, 6), (6, 3)] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(w, h, &mut rng);
            let expected = dijkstra_cost(&grid);
            let found = solve(&grid);
            // Show the grid if the two searches disagree
            if found.is_some() != expected.is_some() {
                print!("{}", grid);
            }
            assert_eq!(found.is_some(), expected.is_some());
            if let (Some(path), Some(cost)) = (&found, expected) {
                if path.cost != cost {
                    print!("{}", grid);
                }
                assert_eq!(path.cost, cost);
                assert_eq!(replay_cost(&grid, path), cost);
            }
        }
    }
}

#[test]
fn fuzz_deterministic() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..N_GRIDS {
        let grid = random_grid(6, 6, &mut rng);
        assert_eq!(solve(&grid), solve(&grid));
    }
}
