use grid_util::point::Point;
use slide_pathfinding::{solve, SlideGrid};

// In this example a path is found on a 3x3 grid with no obstacles:
// S..
// ...
// ..F
// S marks the start, F the finish. Every slide runs to the far edge, so the
// optimal solution is two full slides.
fn main() {
    let grid = SlideGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2), &[])
        .expect("coordinates are in bounds");
    match solve(&grid) {
        Some(path) => {
            println!("A path has been found:");
            for p in path.cells {
                println!("{:?}", p);
            }
            println!("Total cost: {}", path.cost);
        }
        None => println!("No possible path"),
    }
}
