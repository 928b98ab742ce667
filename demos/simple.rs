use maze_pathfinding::junction_graph::JunctionGraph;
use maze_pathfinding::maze_grid::MazeGrid;
use maze_pathfinding::solver::bfs::BfsSolver;
use maze_pathfinding::solver::MazeSolver;
use maze_pathfinding::{path_steps, waypoints_to_path};

// In this example a small maze is compressed and solved with breadth-first
// search. Cells sit at even character offsets with '-' marking open cells;
// the entrance is the first opening of the top row and the exit the first
// opening of the bottom row.
fn main() {
    let text = "\
- - - - -
  -     -
- - - - -
-
- - - - -";
    let grid = MazeGrid::parse(text).unwrap();
    let graph = JunctionGraph::build(&grid).unwrap();
    let start = grid.entrance().unwrap();
    let goal = grid.exit().unwrap();
    let solution = BfsSolver.solve(&graph, start, goal).unwrap();
    println!("Nodes visited = {}", solution.visited);
    println!("Steps in final path = {}", path_steps(&solution.path));
    println!("A path has been found:");
    for cell in waypoints_to_path(solution.path) {
        println!("{}", cell);
    }
}
