use grid_util::grid::Grid;
use grid_util::point::Point;
use slide_pathfinding::{SearchStatus, SlideGrid, SlideSearch};

// Mirrors the classic text-puzzle flow: parse a character grid ('S' start,
// 'F' finish, '0' block), run the search and print the solution listing plus
// the per-cell score table.
const PUZZLE: &str = "\
.....0...0.....0....
....0...........0..0
...S................
................0...
.0....0........0....
..............0....F
....0..0............
0...........0.......
......0........0....
..0.......0.........";

fn main() {
    let rows: Vec<&str> = PUZZLE.lines().collect();
    let height = rows.len();
    let width = rows[0].chars().count();
    let mut start = Point::new(0, 0);
    let mut end = Point::new(0, 0);
    let mut blocks = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match c {
                'S' => start = p,
                'F' => end = p,
                '0' => blocks.push(p),
                _ => {}
            }
        }
    }
    let grid = SlideGrid::new(width, height, start, end, &blocks)
        .expect("puzzle coordinates are in bounds");
    println!("{}", grid);
    let mut search = SlideSearch::new(&grid);
    if search.process() == SearchStatus::Found {
        let path = search.reconstruct().expect("goal was closed");
        println!("{}", path);
        println!();
        println!("Scores for cells:");
        let costs = search.best_costs();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if !grid.is_traversable(Point::new(x as i32, y as i32)) {
                    print!("BL  ");
                } else {
                    let cost = costs.get(x, y);
                    if cost == i32::MAX {
                        print!("..  ");
                    } else {
                        print!("{:<3} ", cost);
                    }
                }
            }
            println!();
        }
    } else {
        println!("No possible path");
    }
}
