use crate::cell::Direction;
use crate::solver::MazeSolver;
use crate::traversal::FrontierDiscipline;

/// Breadth-first search: a queue frontier with north, east, south, west
/// push priority. Nodes are marked explored when enqueued, so layer depth
/// never decreases and the returned path is shortest in edge count. The
/// priority order differs from the depth-first one on purpose; it decides
/// which of several shortest routes is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl MazeSolver for BfsSolver {
    fn direction_priority(&self) -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    fn discipline(&self) -> FrontierDiscipline {
        FrontierDiscipline::Fifo
    }
}
