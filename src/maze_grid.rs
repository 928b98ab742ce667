use core::fmt;
use std::error;

use smallvec::SmallVec;

use crate::cell::{Cell, Direction};

/// Character marking an open cell in maze text; every other cell character
/// is a wall.
pub const OPEN_CHAR: char = '-';

/// Errors raised while constructing a [MazeGrid] or locating its endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A row did not match the width established by the first row.
    UnequalRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The entrance or exit row contains no open cell.
    NoOpeningFound { row: usize },
    /// The input contained no cells at all.
    Empty,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::UnequalRowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cell(s), expected {}",
                row, found, expected
            ),
            GridError::NoOpeningFound { row } => {
                write!(f, "no open cell in row {}", row)
            }
            GridError::Empty => write!(f, "maze contains no cells"),
        }
    }
}

impl error::Error for GridError {}

/// Rectangular grid of open and wall cells addressed by (row, column).
/// Out-of-range probes classify as walls, so neighbour queries on the
/// boundary are safe no-ops. Immutable once handed to the graph builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Vec<bool>,
    height: usize,
    width: usize,
}

impl MazeGrid {
    /// Creates a grid of the given dimensions with every cell set to `open`.
    pub fn new(height: usize, width: usize, open: bool) -> MazeGrid {
        MazeGrid {
            cells: vec![open; height * width],
            height,
            width,
        }
    }

    /// Builds a grid from rows of cell classifications (`true` = open).
    /// All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<MazeGrid, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.len();
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(GridError::UnequalRowLength {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(MazeGrid {
            cells,
            height: rows.len(),
            width,
        })
    }

    /// Parses maze text. Each line is a row; characters at even offsets are
    /// cells ([OPEN_CHAR] marks an open cell, anything else a wall) and
    /// characters at odd offsets are separators. Rows shorter than the
    /// widest row are padded with walls, which matches how ragged mazes
    /// behave when out-of-range cells classify as walls.
    pub fn parse(text: &str) -> Result<MazeGrid, GridError> {
        let mut rows: Vec<Vec<bool>> = text
            .lines()
            .map(|line| {
                line.trim_end()
                    .chars()
                    .step_by(2)
                    .map(|c| c == OPEN_CHAR)
                    .collect()
            })
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * width);
        for mut row in rows {
            row.resize(width, false);
            cells.extend_from_slice(&row);
        }
        Ok(MazeGrid {
            cells,
            height,
            width,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid dimensions as (height, width).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.width + cell.col as usize
    }

    /// Whether the cell is open. Out-of-range coordinates classify as
    /// walls.
    pub fn open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[self.ix(cell)]
    }

    /// Whether the neighbouring cell one step in `dir` is open.
    pub fn open_towards(&self, cell: Cell, dir: Direction) -> bool {
        self.open(cell.step(dir))
    }

    /// The directions with an open neighbouring cell, in `[N, E, S, W]`
    /// scan order.
    pub fn open_directions(&self, cell: Cell) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.open_towards(cell, dir))
            .collect()
    }

    /// Reclassifies a cell. Panics on out-of-range coordinates.
    pub fn set(&mut self, cell: Cell, open: bool) {
        assert!(self.in_bounds(cell), "cell {} out of range", cell);
        let ix = self.ix(cell);
        self.cells[ix] = open;
    }

    /// The first open cell of row 0, scanning left to right. The first
    /// match is the entrance by policy; further openings are ignored.
    pub fn entrance(&self) -> Result<Cell, GridError> {
        self.first_open_in_row(0)
    }

    /// The first open cell of the last row, scanning left to right, under
    /// the same first-match policy as [entrance](Self::entrance).
    pub fn exit(&self) -> Result<Cell, GridError> {
        self.first_open_in_row(self.height.saturating_sub(1))
    }

    fn first_open_in_row(&self, row: usize) -> Result<Cell, GridError> {
        (0..self.width as i32)
            .map(|col| Cell::new(row as i32, col))
            .find(|&cell| self.open(cell))
            .ok_or(GridError::NoOpeningFound { row })
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let c = if self.open(Cell::new(row, col)) {
                    OPEN_CHAR
                } else {
                    '#'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
