use core::fmt;

/// The four cardinal directions, in the `[North, East, South, West]` slot
/// order used by the junction graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Slot index of this direction.
    pub fn num(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Row and column deltas of a single step in this direction. Rows grow
    /// downward, columns to the right.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

/// A grid coordinate as a (row, column) pair. Coordinates are signed so
/// that probes can step over the grid boundary without wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The adjacent cell one step in the given direction.
    pub fn step(&self, dir: Direction) -> Cell {
        let (delta_row, delta_col) = dir.offset();
        Cell::new(self.row + delta_row, self.col + delta_col)
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_slot_order() {
        let cell = Cell::new(3, 4);
        let stepped: Vec<Cell> = Direction::ALL.iter().map(|&d| cell.step(d)).collect();
        assert_eq!(
            stepped,
            vec![
                Cell::new(2, 4),
                Cell::new(3, 5),
                Cell::new(4, 4),
                Cell::new(3, 3),
            ]
        );
        for (ix, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(dir.num(), ix);
        }
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(2, -3);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
        assert_eq!(a.manhattan_distance(&a), 0);
    }
}
