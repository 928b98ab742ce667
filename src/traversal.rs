use core::fmt;
use std::collections::VecDeque;
use std::error;

use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

use crate::cell::{Cell, Direction};
use crate::junction_graph::JunctionGraph;

/// Index marking the traversal root, which has no parent.
const ROOT: usize = usize::MAX;

/// Backward discovery tree of a single traversal run: maps each node that
/// entered the frontier to the parent-map index of the node it was
/// discovered from. The start entry carries the root sentinel, which is
/// the insertion-ordered equivalent of the start having no parent.
pub type ParentMap = IndexMap<Cell, usize, FxBuildHasher>;

/// How the frontier releases pending nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontierDiscipline {
    /// Last in, first out: a stack, as used by depth-first search.
    Lifo,
    /// First in, first out: a queue, as used by breadth-first search.
    Fifo,
}

/// Errors raised by a solve run or by path reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The frontier was exhausted (or the component pre-check failed)
    /// without reaching the goal: the maze is unsolvable. A normal,
    /// recoverable outcome that callers are expected to check for.
    NoPathExists,
    /// The goal never entered the parent map the path is reconstructed
    /// from. Cannot occur when [SolveError::NoPathExists] is checked
    /// first; kept as a second line of defense.
    UnreachableGoal(Cell),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::NoPathExists => {
                write!(f, "no path exists between start and goal")
            }
            SolveError::UnreachableGoal(cell) => {
                write!(f, "goal {} does not appear in the parent map", cell)
            }
        }
    }
}

impl error::Error for SolveError {}

/// Outcome of one traversal run over a [JunctionGraph].
#[derive(Clone, Debug)]
pub struct TraversalRun {
    parents: ParentMap,
    reached: bool,
}

impl TraversalRun {
    /// The backward discovery tree built during the run.
    pub fn parents(&self) -> &ParentMap {
        &self.parents
    }

    /// Whether the run stopped on the goal rather than exhausting the
    /// frontier.
    pub fn reached_goal(&self) -> bool {
        self.reached
    }

    /// Number of nodes examined beyond the start: every node that entered
    /// the frontier, not counting the root.
    pub fn visited(&self) -> usize {
        self.parents.len().saturating_sub(1)
    }

    /// The node `cell` was discovered from, if any.
    pub fn parent_of(&self, cell: &Cell) -> Option<Cell> {
        let &parent_ix = self.parents.get(cell)?;
        self.parents.get_index(parent_ix).map(|(&parent, _)| parent)
    }
}

/// Runs a traversal from `start` towards `goal`, offering each node's
/// links in `priority` order and releasing pending nodes per `discipline`.
///
/// Nodes are marked explored the moment they enter the frontier, which for
/// the FIFO discipline guarantees monotonically non-decreasing layer depth
/// and therefore shortest paths in edge count. An exhausted frontier is a
/// distinct terminal state reported through
/// [reached_goal](TraversalRun::reached_goal).
pub fn traverse(
    graph: &JunctionGraph,
    start: Cell,
    goal: Cell,
    priority: [Direction; 4],
    discipline: FrontierDiscipline,
) -> TraversalRun {
    let mut parents: ParentMap = ParentMap::default();
    let mut frontier: VecDeque<usize> = VecDeque::new();
    parents.insert(start, ROOT);
    frontier.push_back(0);
    let mut reached = false;
    loop {
        let next = match discipline {
            FrontierDiscipline::Lifo => frontier.pop_back(),
            FrontierDiscipline::Fifo => frontier.pop_front(),
        };
        let Some(index) = next else { break };
        let (&current, _) = parents.get_index(index).unwrap();
        if current == goal {
            reached = true;
            break;
        }
        let Some(&links) = graph.links(&current) else {
            // The start may not qualify as a node; it then has no links.
            continue;
        };
        for direction in priority {
            if let Some(child) = links[direction.num()] {
                if let Vacant(entry) = parents.entry(child) {
                    let child_index = entry.index();
                    entry.insert(index);
                    frontier.push_back(child_index);
                }
            }
        }
    }
    TraversalRun { parents, reached }
}

/// Walks the parent map backward from `goal` and returns the ordered path
/// from `start` to `goal` inclusive.
pub fn reconstruct(
    parents: &ParentMap,
    start: Cell,
    goal: Cell,
) -> Result<Vec<Cell>, SolveError> {
    if goal == start {
        return Ok(vec![start]);
    }
    let goal_index = parents
        .get_index_of(&goal)
        .ok_or(SolveError::UnreachableGoal(goal))?;
    let mut path: Vec<Cell> = itertools::unfold(goal_index, |index| {
        parents.get_index(*index).map(|(&cell, &parent_index)| {
            *index = parent_index;
            cell
        })
    })
    .collect();
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn reconstruct_walks_backward_and_reverses() {
        let mut parents = ParentMap::default();
        parents.insert(cell(0, 0), ROOT);
        parents.insert(cell(0, 3), 0);
        parents.insert(cell(2, 3), 1);
        let path = reconstruct(&parents, cell(0, 0), cell(2, 3)).unwrap();
        assert_eq!(path, vec![cell(0, 0), cell(0, 3), cell(2, 3)]);
    }

    #[test]
    fn reconstruct_handles_equal_start_and_goal() {
        let parents = ParentMap::default();
        let path = reconstruct(&parents, cell(1, 1), cell(1, 1)).unwrap();
        assert_eq!(path, vec![cell(1, 1)]);
    }

    #[test]
    fn undiscovered_goal_is_reported() {
        let mut parents = ParentMap::default();
        parents.insert(cell(0, 0), ROOT);
        let err = reconstruct(&parents, cell(0, 0), cell(5, 5)).unwrap_err();
        assert_eq!(err, SolveError::UnreachableGoal(cell(5, 5)));
    }

    #[test]
    fn parent_of_resolves_indices() {
        let mut parents = ParentMap::default();
        parents.insert(cell(0, 0), ROOT);
        parents.insert(cell(0, 3), 0);
        let run = TraversalRun {
            parents,
            reached: true,
        };
        assert_eq!(run.parent_of(&cell(0, 3)), Some(cell(0, 0)));
        assert_eq!(run.parent_of(&cell(0, 0)), None);
        assert_eq!(run.parent_of(&cell(9, 9)), None);
        assert_eq!(run.visited(), 1);
    }
}
