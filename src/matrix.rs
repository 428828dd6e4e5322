//! A row-major dense matrix, trimmed to the operations the cost-matrix
//! adapter needs: construction, indexing and transposition. Rotation,
//! flipping and slicing are not part of the assignment-problem domain
//! and were dropped.

use std::ops::{Index, IndexMut};

/// Matrix of an arbitrary type. Data are stored consecutively in
/// memory, by rows. Raw data can be accessed using `as_ref()`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Matrix<C> {
    /// Rows
    pub rows: usize,
    /// Columns
    pub columns: usize,
    data: Vec<C>,
}

impl<C> Matrix<C> {
    /// Create new matrix from vector values. The first value
    /// will be assigned to index (0, 0), the second one to index (0, 1),
    /// and so on.
    ///
    /// # Panics
    ///
    /// This function will panic if the number of values does not correspond
    /// to the announced size.
    pub fn from_vec(rows: usize, columns: usize, values: Vec<C>) -> Matrix<C> {
        assert_eq!(
            rows * columns,
            values.len(),
            "length of vector does not correspond to announced dimensions"
        );
        Matrix {
            rows,
            columns,
            data: values,
        }
    }

    /// Index in raw data of a given position.
    pub fn idx(&self, i: &(usize, usize)) -> usize {
        i.0 * self.columns + i.1
    }

    /// Iterate over the rows of the matrix as slices.
    pub fn iter(&self) -> impl Iterator<Item = &[C]> {
        self.data.chunks(self.columns)
    }
}

impl<C: Clone> Matrix<C> {
    /// Return a copy of the matrix after transposition.
    pub fn transposed(&self) -> Matrix<C> {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.columns {
            for r in 0..self.rows {
                data.push(self.data[r * self.columns + c].clone());
            }
        }
        Matrix {
            rows: self.columns,
            columns: self.rows,
            data,
        }
    }
}

impl<'a, C> Index<&'a (usize, usize)> for Matrix<C> {
    type Output = C;

    fn index(&self, index: &'a (usize, usize)) -> &C {
        &self.data[self.idx(index)]
    }
}

impl<'a, C> IndexMut<&'a (usize, usize)> for Matrix<C> {
    fn index_mut(&mut self, index: &'a (usize, usize)) -> &mut C {
        let i = self.idx(index);
        &mut self.data[i]
    }
}

impl<C> AsRef<[C]> for Matrix<C> {
    fn as_ref(&self) -> &[C] {
        &self.data
    }
}
