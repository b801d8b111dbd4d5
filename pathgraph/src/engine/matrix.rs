//! Dense square matrix, row-major.

use std::ops::{Index, IndexMut};

/// n×n matrix stored in one `Vec`, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Matrix of `size`×`size` cells, all set to `fill`.
    pub fn filled(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> Matrix<T> {
    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics; an empty matrix has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Build a matrix of another type cell by cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            size: self.size,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Nested `Vec` copy, one inner `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.size && col < self.size);
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.size && col < self.size);
        &mut self.cells[row * self.size + col]
    }
}
