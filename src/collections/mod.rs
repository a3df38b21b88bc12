pub mod grid;

pub use self::grid::{Coord, Grid};

use linked_hash_set::LinkedHashSet;

/// A FIFO queue that ignores values already queued
pub type LinkedAHashSet<T> = LinkedHashSet<T, ahash::RandomState>;
