//! Parse crossword structures from text

use std::fmt;
use std::fmt::Display;

use crate::collections::{Coord, Grid};
use crate::crossword::{Direction, Variable};
use crate::error::ParseStructureError;

const OPEN_CELL: char = '_';
const BLOCKED_CELL: char = '█';

/// The shape of a crossword: which cells hold letters and which are blocked
#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
    cells: Grid<bool>,
}

impl Structure {
    pub fn new(cells: Grid<bool>) -> Self {
        Self { cells }
    }

    /// Parses a structure with one row per line. `_` marks an open cell and any other character
    /// marks a blocked cell. Short rows are padded with blocked cells.
    pub fn parse(s: &str) -> Result<Self, ParseStructureError> {
        let lines: Vec<Vec<char>> = s.lines().map(|line| line.chars().collect()).collect();
        if lines.is_empty() {
            return Err(ParseStructureError::NoRows);
        }
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(ParseStructureError::NoColumns);
        }
        let mut cells = Grid::with_size_and_value(lines.len(), width, false);
        for (row, line) in lines.iter().enumerate() {
            for (col, &c) in line.iter().enumerate() {
                cells[Coord::new(row, col)] = c == OPEN_CELL;
            }
        }
        Ok(Self::new(cells))
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// Returns true if the cell holds a letter. Cells outside of the grid are blocked.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cells.get(coord).copied().unwrap_or(false)
    }

    /// Finds every slot of two or more cells. Cells are scanned row by row, and a down slot
    /// comes before an across slot starting at the same cell.
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = Vec::new();
        for (coord, &open) in self.cells.iter_coord() {
            if !open {
                continue;
            }
            for &direction in &[Direction::Down, Direction::Across] {
                if !self.starts_slot(coord, direction) {
                    continue;
                }
                let length = self.slot_length(coord, direction);
                if length > 1 {
                    variables.push(Variable::new(coord.row(), coord.col(), direction, length));
                }
            }
        }
        variables
    }

    fn starts_slot(&self, coord: Coord, direction: Direction) -> bool {
        let previous = match direction {
            Direction::Across => coord.col().checked_sub(1).map(|col| Coord::new(coord.row(), col)),
            Direction::Down => coord.row().checked_sub(1).map(|row| Coord::new(row, coord.col())),
        };
        previous.map_or(true, |previous| !self.is_open(previous))
    }

    fn slot_length(&self, start: Coord, direction: Direction) -> usize {
        let probe = Variable::new(start.row(), start.col(), direction, 0);
        (0..)
            .take_while(|&i| self.is_open(probe.cell(i)))
            .count()
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for &open in row {
                let c = if open { OPEN_CELL } else { BLOCKED_CELL };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
