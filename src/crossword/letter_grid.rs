use std::fmt;
use std::fmt::Display;

use crate::collections::{Coord, Grid};

const BLOCKED_CELL: char = '█';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterCell {
    Blocked,
    Empty,
    Letter(char),
}

/// The letters of a (possibly partial) fill, laid out on the crossword grid
#[derive(Clone, Debug, PartialEq)]
pub struct LetterGrid {
    cells: Grid<LetterCell>,
}

impl LetterGrid {
    pub(crate) fn new(cells: Grid<LetterCell>) -> Self {
        Self { cells }
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn get(&self, coord: Coord) -> Option<LetterCell> {
        self.cells.get(coord).copied()
    }

    pub fn letter(&self, coord: Coord) -> Option<char> {
        match self.get(coord)? {
            LetterCell::Letter(c) => Some(c),
            _ => None,
        }
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                let c = match *cell {
                    LetterCell::Blocked => BLOCKED_CELL,
                    LetterCell::Empty => ' ',
                    LetterCell::Letter(c) => c,
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
