//! Crossword puzzles: slots, their crossings, and the words that may fill them

pub use self::letter_grid::{LetterCell, LetterGrid};
pub use self::structure::Structure;
pub use self::variable::{Direction, Variable};
pub use self::word_list::{Word, WordList};

use std::fmt;
use std::fmt::Display;
use std::fs;
use std::ops::Range;
use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::collections::{Coord, Grid};
use crate::error::{CrosswordFromFileError, InvalidCrossword, ParseStructureError};
use crate::solve::Assignment;

mod letter_grid;
mod structure;
mod variable;
mod word_list;

pub type VariableId = usize;
pub type WordId = usize;

/// Where two crossing slots share a cell: letter `i` of the first slot's word must equal letter
/// `j` of the second slot's word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Overlap {
    pub i: usize,
    pub j: usize,
}

impl Overlap {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// The same overlap seen from the other slot
    pub fn reversed(self) -> Self {
        Self::new(self.j, self.i)
    }
}

impl Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// A crossword to be filled
///
/// Variables (slots) are addressed by [`VariableId`] and words by [`WordId`]. Both are indices
/// into ordered lists, and that order is used to break every remaining tie while solving.
#[derive(Debug)]
pub struct Crossword {
    structure: Option<Structure>,
    variables: Vec<Variable>,
    overlaps: AHashMap<(VariableId, VariableId), Overlap>,
    neighbors: Vec<Vec<VariableId>>,
    words: WordList,
}

impl Crossword {
    /// Creates a crossword from a structure. Slots and their overlaps are derived from the grid.
    pub fn new(structure: Structure, words: WordList) -> Self {
        let variables = structure.variables();
        let mut cell_slots: AHashMap<Coord, Vec<(VariableId, usize)>> = AHashMap::default();
        for (id, variable) in variables.iter().enumerate() {
            for (index, coord) in variable.cells().enumerate() {
                cell_slots.entry(coord).or_default().push((id, index));
            }
        }
        let mut overlaps = AHashMap::default();
        for slots in cell_slots.values() {
            for &(x, i) in slots {
                for &(y, j) in slots {
                    if x != y {
                        overlaps.insert((x, y), Overlap::new(i, j));
                    }
                }
            }
        }
        let neighbors = neighbor_lists(variables.len(), &overlaps);
        Self {
            structure: Some(structure),
            variables,
            overlaps,
            neighbors,
            words,
        }
    }

    /// Creates a crossword with explicit overlaps that need not follow grid geometry. Each overlap
    /// is given once; the reversed entry is added for the other variable.
    ///
    /// Overlap indices are not checked against variable lengths here. Solving reports them.
    pub fn from_parts(
        variables: Vec<Variable>,
        overlaps: impl IntoIterator<Item = (VariableId, VariableId, Overlap)>,
        words: WordList,
    ) -> Result<Self, InvalidCrossword> {
        if let Some(variable) = variables.iter().find(|v| v.length() == 0) {
            return Err(InvalidCrossword::new(format!(
                "variable {} has no cells",
                variable
            )));
        }
        let mut seen: AHashSet<Variable> = AHashSet::default();
        if let Some(variable) = variables.iter().find(|&&v| !seen.insert(v)) {
            return Err(InvalidCrossword::new(format!(
                "variable {} is given more than once",
                variable
            )));
        }
        let mut overlap_map = AHashMap::default();
        for (x, y, overlap) in overlaps {
            if x >= variables.len() || y >= variables.len() {
                return Err(InvalidCrossword::new(format!(
                    "overlap between unknown variables {} and {}",
                    x, y
                )));
            }
            if x == y {
                return Err(InvalidCrossword::new(format!(
                    "variable {} overlaps itself",
                    variables[x]
                )));
            }
            for &(key, value) in &[((x, y), overlap), ((y, x), overlap.reversed())] {
                if let Some(&existing) = overlap_map.get(&key) {
                    if existing != value {
                        return Err(InvalidCrossword::new(format!(
                            "conflicting overlaps {} and {} between {} and {}",
                            existing, value, variables[key.0], variables[key.1]
                        )));
                    }
                }
                overlap_map.insert(key, value);
            }
        }
        let neighbors = neighbor_lists(variables.len(), &overlap_map);
        Ok(Self {
            structure: None,
            variables,
            overlaps: overlap_map,
            neighbors,
            words,
        })
    }

    pub fn parse(structure: &str, words: &str) -> Result<Self, ParseStructureError> {
        let structure = Structure::parse(structure)?;
        Ok(Self::new(structure, WordList::parse(words)))
    }

    pub fn from_files(
        structure_path: impl AsRef<Path>,
        words_path: impl AsRef<Path>,
    ) -> Result<Self, CrosswordFromFileError> {
        let structure = Structure::parse(&fs::read_to_string(structure_path)?)?;
        let words = WordList::from_file(words_path)?;
        Ok(Self::new(structure, words))
    }

    /// The grid this crossword was derived from, if any
    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> Variable {
        self.variables[id]
    }

    pub fn variable_ids(&self) -> Range<VariableId> {
        0..self.variables.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Variables that share a cell with `id`, in ID order
    pub fn neighbors(&self, id: VariableId) -> &[VariableId] {
        &self.neighbors[id]
    }

    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// Lays out the words of an assignment on the grid. Cells that no slot covers are blocked.
    pub fn letter_grid(&self, assignment: &Assignment) -> LetterGrid {
        let mut cells = match &self.structure {
            Some(structure) => {
                let mut cells = Grid::with_size_and_value(
                    structure.height(),
                    structure.width(),
                    LetterCell::Blocked,
                );
                for row in 0..structure.height() {
                    for col in 0..structure.width() {
                        let coord = Coord::new(row, col);
                        if structure.is_open(coord) {
                            cells[coord] = LetterCell::Empty;
                        }
                    }
                }
                cells
            }
            None => {
                let (height, width) = self
                    .variables
                    .iter()
                    .map(|v| v.cell(v.length() - 1))
                    .fold((0, 0), |(height, width), end| {
                        (height.max(end.row() + 1), width.max(end.col() + 1))
                    });
                let mut cells = Grid::with_size_and_value(height, width, LetterCell::Blocked);
                for coord in self.variables.iter().flat_map(|v| v.cells()) {
                    cells[coord] = LetterCell::Empty;
                }
                cells
            }
        };
        for (id, word) in assignment.iter() {
            let variable = self.variables[id];
            for (coord, &letter) in variable.cells().zip(self.word(word).letters()) {
                if cells.contains(coord) {
                    cells[coord] = LetterCell::Letter(letter);
                }
            }
        }
        LetterGrid::new(cells)
    }
}

fn neighbor_lists(
    variable_count: usize,
    overlaps: &AHashMap<(VariableId, VariableId), Overlap>,
) -> Vec<Vec<VariableId>> {
    let mut neighbors = vec![Vec::new(); variable_count];
    for &(x, y) in overlaps.keys() {
        neighbors[x].push(y);
    }
    for list in &mut neighbors {
        list.sort_unstable();
    }
    neighbors
}
