use log::{info, warn};

use crate::cell::{Cell, Direction};
use crate::junction_graph::JunctionGraph;
use crate::traversal::{
    reconstruct, traverse, FrontierDiscipline, SolveError, TraversalRun,
};

pub mod bfs;
pub mod dfs;

/// A solved maze: the node-to-node path from start to goal inclusive and
/// the number of nodes examined while finding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<Cell>,
    pub visited: usize,
}

/// A traversal strategy over a [JunctionGraph], defined by its frontier
/// discipline and the order in which a node's links are offered to the
/// frontier. The priority order decides which of several equal-length
/// routes is returned, so it is part of each strategy's contract.
pub trait MazeSolver {
    /// Order in which the current node's links are pushed.
    fn direction_priority(&self) -> [Direction; 4];

    /// How the frontier releases pending nodes.
    fn discipline(&self) -> FrontierDiscipline;

    /// Runs the raw traversal, exposing the parent map, the visited count
    /// and whether the goal was reached.
    fn run(&self, graph: &JunctionGraph, start: Cell, goal: Cell) -> TraversalRun {
        traverse(
            graph,
            start,
            goal,
            self.direction_priority(),
            self.discipline(),
        )
    }

    /// Solves the maze from `start` to `goal`.
    ///
    /// Starts with a connected-component check so an unsolvable query is
    /// answered without walking the graph; a frontier exhausted mid-run
    /// reports [SolveError::NoPathExists] the same way.
    fn solve(
        &self,
        graph: &JunctionGraph,
        start: Cell,
        goal: Cell,
    ) -> Result<Solution, SolveError> {
        if graph.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(SolveError::NoPathExists);
        }
        let run = self.run(graph, start, goal);
        if !run.reached_goal() {
            warn!("reachable goal {} was not reached from {}", goal, start);
            return Err(SolveError::NoPathExists);
        }
        let path = reconstruct(run.parents(), start, goal)?;
        Ok(Solution {
            path,
            visited: run.visited(),
        })
    }
}
