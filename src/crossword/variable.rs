use std::fmt;
use std::fmt::Display;

use crate::collections::Coord;

/// The direction a slot's word is read in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A slot in a crossword
///
/// A slot is a run of open cells that holds a single word, starting at a cell
/// and extending across or down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub fn direction(self) -> Direction {
        self.direction
    }

    /// The number of letters in a word that fits this slot
    pub fn length(self) -> usize {
        self.length
    }

    pub fn start(self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// The coordinate of the `index`th letter of this slot
    pub fn cell(self, index: usize) -> Coord {
        match self.direction {
            Direction::Across => Coord::new(self.row, self.col + index),
            Direction::Down => Coord::new(self.row + index, self.col),
        }
    }

    /// The coordinates of every cell in this slot, in word order
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        (0..self.length).map(move |i| self.cell(i))
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} : {}", self.start(), self.direction, self.length)
    }
}

#[cfg(test)]
mod test {
    use super::{Direction, Variable};
    use crate::collections::Coord;

    #[test]
    fn cells() {
        let across = Variable::new(1, 2, Direction::Across, 3);
        let down = Variable::new(1, 2, Direction::Down, 2);
        assert_eq!(
            vec![Coord::new(1, 2), Coord::new(1, 3), Coord::new(1, 4)],
            across.cells().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![Coord::new(1, 2), Coord::new(2, 2)],
            down.cells().collect::<Vec<_>>()
        );
    }

    #[test]
    fn equality_uses_every_field() {
        let v = Variable::new(0, 0, Direction::Across, 3);
        assert_eq!(v, Variable::new(0, 0, Direction::Across, 3));
        assert_ne!(v, Variable::new(0, 0, Direction::Down, 3));
        assert_ne!(v, Variable::new(0, 0, Direction::Across, 4));
        assert_ne!(v, Variable::new(0, 1, Direction::Across, 3));
    }

    #[test]
    fn display() {
        let v = Variable::new(4, 1, Direction::Down, 5);
        assert_eq!("(4, 1) down : 5", v.to_string());
    }
}
