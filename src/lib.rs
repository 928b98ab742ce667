//! # maze_pathfinding
//!
//! A maze-solving system built on junction-graph compression. A dense grid
//! of wall and open cells is reduced to a sparse
//! [JunctionGraph](junction_graph::JunctionGraph) whose nodes are only the
//! cells where a routing decision is possible (junctions, turns, dead ends
//! and the entrance/exit pair), with links that skip over straight corridor
//! runs. [Depth-first](solver::dfs::DfsSolver) and
//! [breadth-first](solver::bfs::BfsSolver) search then find a route between
//! the endpoints. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
pub mod cell;
pub mod junction_graph;
pub mod maze_grid;
pub mod solver;
pub mod traversal;

use std::collections::VecDeque;

use itertools::Itertools;

use crate::cell::Cell;

/// Turns a node-to-node path into a path on the grid which can be followed
/// step by step, restoring every corridor cell the links skipped over.
/// Consecutive entries are expected to be axis-aligned, as produced by a
/// solver run.
pub fn waypoints_to_path(waypoints: Vec<Cell>) -> Vec<Cell> {
    let mut waypoint_queue = waypoints.into_iter().collect::<VecDeque<Cell>>();
    let mut path: Vec<Cell> = Vec::new();
    let Some(mut current) = waypoint_queue.pop_front() else {
        return path;
    };
    path.push(current);
    for next in waypoint_queue {
        while current != next {
            let delta_row = (next.row - current.row).signum();
            let delta_col = (next.col - current.col).signum();
            current = Cell::new(current.row + delta_row, current.col + delta_col);
            path.push(current);
        }
    }
    path
}

/// Number of unit steps along a path: the sum of absolute row and column
/// deltas between consecutive entries.
pub fn path_steps(path: &[Cell]) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| a.manhattan_distance(b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn expands_corridor_runs_between_waypoints() {
        let waypoints = vec![cell(0, 0), cell(0, 3), cell(2, 3)];
        assert_eq!(
            waypoints_to_path(waypoints),
            vec![
                cell(0, 0),
                cell(0, 1),
                cell(0, 2),
                cell(0, 3),
                cell(1, 3),
                cell(2, 3),
            ]
        );
    }

    #[test]
    fn expansion_of_trivial_paths() {
        assert!(waypoints_to_path(Vec::new()).is_empty());
        assert_eq!(waypoints_to_path(vec![cell(1, 1)]), vec![cell(1, 1)]);
    }

    #[test]
    fn steps_sum_the_deltas() {
        let path = vec![cell(0, 0), cell(0, 3), cell(2, 3)];
        assert_eq!(path_steps(&path), 5);
        assert_eq!(path_steps(&[]), 0);
        assert_eq!(path_steps(&[cell(4, 4)]), 0);
    }
}
