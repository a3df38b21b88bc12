mod coord;

pub use self::coord::Coord;

use std::ops::{Index, IndexMut};

/// A container of elements laid out in rows and columns
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new `Grid` of a specified size and fill with a specified value
    pub fn with_size_and_value(height: usize, width: usize, val: T) -> Grid<T>
    where
        T: Clone,
    {
        Grid {
            height,
            width,
            elements: vec![val; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.height && coord.col() < self.width
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.elements[self.index_of(coord)])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on a zero width
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over every element, paired with its `Coord`, in row-major order
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i / width, i % width), e))
    }

    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "{:?} is outside of a {}x{} grid",
            coord,
            self.height,
            self.width
        );
        coord.row() * self.width + coord.col()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.index_of(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.index_of(coord);
        &mut self.elements[index]
    }
}
