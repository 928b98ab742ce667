use core::fmt;
use std::error;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, Direction};
use crate::maze_grid::MazeGrid;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Errors raised while compressing a grid into a [JunctionGraph].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A flagged corridor ran off the grid without reaching another node.
    /// Cannot happen for grids built by [MazeGrid], where the last open
    /// cell of a straight run always qualifies as a node itself.
    DanglingLink { node: Cell, direction: Direction },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphError::DanglingLink { node, direction } => write!(
                f,
                "corridor leaving {} heading {} runs off the grid without reaching another node",
                node, direction
            ),
        }
    }
}

impl error::Error for GraphError {}

/// Link slots of a node in `[North, East, South, West]` order; `None`
/// marks a direction without an opening.
pub type Links = [Option<Cell>; 4];

/// Sparse graph over the cells of a [MazeGrid] where a routing decision is
/// possible: junctions, turns, dead ends and the two endpoints. Straight
/// corridor cells are skipped over by the links. Built once per maze and
/// immutable afterwards; nodes are kept in row-major discovery order, so
/// equal grids always compress to equal graphs. Carries
/// [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
/// over the resolved links for constant-time reachability queries.
#[derive(Clone, Debug)]
pub struct JunctionGraph {
    nodes: FxIndexMap<Cell, Links>,
    components: UnionFind<usize>,
}

/// A cell is a node unless it has exactly two openings and they are
/// collinear (a straight corridor cell). `open` is in `[N, E, S, W]` scan
/// order, so a collinear pair is exactly `[N, S]` or `[E, W]`.
fn is_node(open: &[Direction]) -> bool {
    !matches!(
        open,
        [Direction::North, Direction::South] | [Direction::East, Direction::West]
    )
}

/// Walks from `from` in `direction` until the nearest discovered node.
fn resolve(
    grid: &MazeGrid,
    flagged: &FxIndexMap<Cell, SmallVec<[Direction; 4]>>,
    from: Cell,
    direction: Direction,
) -> Result<Cell, GraphError> {
    let mut cell = from.step(direction);
    while grid.in_bounds(cell) {
        if flagged.contains_key(&cell) {
            return Ok(cell);
        }
        cell = cell.step(direction);
    }
    Err(GraphError::DanglingLink {
        node: from,
        direction,
    })
}

impl JunctionGraph {
    /// Compresses a grid into its junction graph.
    ///
    /// The first pass records every qualifying open cell together with its
    /// open directions; the second pass walks each flagged direction until
    /// the nearest node and resolves the slot to its coordinate. Resolution
    /// only reads first-pass membership and writes the node's own slots, so
    /// the resolution order has no effect on the result.
    pub fn build(grid: &MazeGrid) -> Result<JunctionGraph, GraphError> {
        let (height, width) = grid.dimensions();

        let mut flagged: FxIndexMap<Cell, SmallVec<[Direction; 4]>> = FxIndexMap::default();
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                let cell = Cell::new(row, col);
                if !grid.open(cell) {
                    continue;
                }
                let open = grid.open_directions(cell);
                if is_node(&open) {
                    flagged.insert(cell, open);
                }
            }
        }

        let mut nodes: FxIndexMap<Cell, Links> =
            IndexMap::with_capacity_and_hasher(flagged.len(), FxBuildHasher::default());
        for (&cell, open) in &flagged {
            let mut links: Links = [None; 4];
            for &direction in open {
                links[direction.num()] = Some(resolve(grid, &flagged, cell, direction)?);
            }
            nodes.insert(cell, links);
        }

        let mut components = UnionFind::new(nodes.len());
        for (ix, (_, links)) in nodes.iter().enumerate() {
            for target in links.iter().flatten() {
                if let Some(target_ix) = nodes.get_index_of(target) {
                    components.union(ix, target_ix);
                }
            }
        }

        info!(
            "junction graph built: {} nodes over a {}x{} grid",
            nodes.len(),
            height,
            width
        );
        Ok(JunctionGraph { nodes, components })
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the cell qualified as a node.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.nodes.contains_key(cell)
    }

    /// The four link slots of a node.
    pub fn links(&self, cell: &Cell) -> Option<&Links> {
        self.nodes.get(cell)
    }

    /// The node reached by following the link of `cell` in `direction`.
    pub fn link(&self, cell: &Cell, direction: Direction) -> Option<Cell> {
        self.nodes
            .get(cell)
            .and_then(|links| links[direction.num()])
    }

    /// Nodes with their links, in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = (&Cell, &Links)> {
        self.nodes.iter()
    }

    /// Checks if start and goal are connected in the graph. Cells that are
    /// not nodes are unreachable by definition.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are on different components.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        match (
            self.nodes.get_index_of(start),
            self.nodes.get_index_of(goal),
        ) {
            (Some(start_ix), Some(goal_ix)) => !self.components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }
}
