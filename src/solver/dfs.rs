use crate::cell::Direction;
use crate::solver::MazeSolver;
use crate::traversal::FrontierDiscipline;

/// Depth-first search: a stack frontier with north, east, west, south
/// push priority. Pushing south last means the stack releases it first,
/// biasing exploration south and then west. Finds some path, not the
/// shortest in general.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl MazeSolver for DfsSolver {
    fn direction_priority(&self) -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::West,
            Direction::South,
        ]
    }

    fn discipline(&self) -> FrontierDiscipline {
        FrontierDiscipline::Lifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::junction_graph::JunctionGraph;
    use crate::maze_grid::MazeGrid;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    // A ring with a short eastern side and a winding southwestern side;
    // both meet again just above the exit.
    const RING: &str = "\
-
- - - - -
-       -
- - -   -
    -   -
    - - -
        -";

    #[test]
    fn south_bias_takes_the_winding_side() {
        let grid = MazeGrid::parse(RING).unwrap();
        let graph = JunctionGraph::build(&grid).unwrap();
        let solution = DfsSolver
            .solve(&graph, grid.entrance().unwrap(), grid.exit().unwrap())
            .unwrap();
        // The stack releases the south link of (1, 0) before the east one,
        // so the run commits to the longer southwestern side.
        assert_eq!(
            solution.path,
            vec![
                cell(0, 0),
                cell(1, 0),
                cell(3, 0),
                cell(3, 2),
                cell(5, 2),
                cell(5, 4),
                cell(6, 4),
            ]
        );
        assert_eq!(solution.visited, 7);
    }
}
