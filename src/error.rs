use std::io;

use thiserror::Error;

use crate::crossword::{Overlap, Variable};

#[derive(Error, Debug)]
#[error("invalid crossword: {}", msg)]
pub struct InvalidCrossword {
    msg: String,
}

impl InvalidCrossword {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum CrosswordFromFileError {
    #[error("error reading crossword file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseStructureError),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseStructureError {
    #[error("structure has no rows")]
    NoRows,
    #[error("structure has no columns")]
    NoColumns,
}

/// A fault in the crossword that prevents solving. An unsolvable crossword is not an error.
#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("overlap {overlap} between {x} and {y} is out of range")]
    MalformedOverlap {
        x: Variable,
        y: Variable,
        overlap: Overlap,
    },
}
