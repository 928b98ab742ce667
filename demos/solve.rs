use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fxhash::FxHashSet;
use itertools::Itertools;

use maze_pathfinding::cell::Cell;
use maze_pathfinding::junction_graph::JunctionGraph;
use maze_pathfinding::maze_grid::{MazeGrid, OPEN_CHAR};
use maze_pathfinding::solver::bfs::BfsSolver;
use maze_pathfinding::solver::dfs::DfsSolver;
use maze_pathfinding::solver::{MazeSolver, Solution};
use maze_pathfinding::traversal::SolveError;
use maze_pathfinding::{path_steps, waypoints_to_path};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// Depth-first search.
    Dfs,
    /// Breadth-first search.
    Bfs,
}

/// Solves a text-encoded maze and prints the solution overlaid on it.
#[derive(Debug, Parser)]
struct Args {
    /// Path to the maze text file.
    maze: PathBuf,
    /// Search algorithm to run.
    #[arg(short, long, value_enum, default_value = "bfs")]
    algorithm: Algorithm,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let text = fs::read_to_string(&args.maze)
        .with_context(|| format!("reading maze file {}", args.maze.display()))?;
    let grid = MazeGrid::parse(&text)?;
    let graph = JunctionGraph::build(&grid)?;
    let start = grid.entrance()?;
    let goal = grid.exit()?;

    let started = Instant::now();
    let outcome = match args.algorithm {
        Algorithm::Dfs => DfsSolver.solve(&graph, start, goal),
        Algorithm::Bfs => BfsSolver.solve(&graph, start, goal),
    };
    let elapsed = started.elapsed();

    match outcome {
        Ok(Solution { path, visited }) => {
            println!("--- {:?} ---", elapsed);
            println!("Nodes visited = {}", visited);
            println!("Steps in final path = {}", path_steps(&path));
            println!("The final solution: [{}]", path.iter().format(", "));
            print!("{}", render_solution(&grid, &path));
        }
        Err(SolveError::NoPathExists) => println!("The maze is unsolvable"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Paints the expanded solution onto the maze, marking path cells with 'x'
/// in the same doubled-column layout the maze text uses.
fn render_solution(grid: &MazeGrid, path: &[Cell]) -> String {
    let on_path: FxHashSet<Cell> = waypoints_to_path(path.to_vec()).into_iter().collect();
    let (height, width) = grid.dimensions();
    let mut out = String::new();
    for row in 0..height as i32 {
        for col in 0..width as i32 {
            if col > 0 {
                out.push(' ');
            }
            let cell = Cell::new(row, col);
            let ch = if on_path.contains(&cell) {
                'x'
            } else if grid.open(cell) {
                OPEN_CHAR
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
