//! Dense DP matrices and their mode-specific initialization.
//!
//! Both matrices have shape `(len(A)+1) × (len(B)+1)`. Index 0 on either axis
//! is the empty-prefix boundary, so cell `(i, j)` refers to the prefixes
//! `A[0..i)` and `B[0..j)`.
use std::ops::{Index, IndexMut};

use crate::scoring::AlignMode;

/// Row-major dense 2-D matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix<T> {
    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self { data: vec![value; rows * cols], rows, cols }
    }

    /// Build from row vectors.
    ///
    /// # Panics
    /// Panics if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|r| r.len() == cols), "ragged rows");
        Self { data: rows.into_iter().flatten().collect(), rows: n, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `r` as a slice.
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Iterate over `((row, col), value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.data.iter().enumerate().map(move |(k, v)| ((k / cols, k % cols), v))
    }

    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self[(r, c)].clone());
            }
        }
        Self { data, rows: self.cols, cols: self.rows }
    }

    /// Copy of the matrix without row 0 and column 0.
    pub fn without_boundary(&self) -> Self {
        let rows = self.rows.saturating_sub(1);
        let cols = self.cols.saturating_sub(1);
        let mut data = Vec::with_capacity(rows * cols);
        for r in 1..self.rows {
            data.extend_from_slice(&self.row(r)[1..]);
        }
        Self { data, rows, cols }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(r < self.rows && c < self.cols);
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        debug_assert!(r < self.rows && c < self.cols);
        &mut self.data[r * self.cols + c]
    }
}

/// Traceback direction stored in the pointer matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Match or mismatch: consumes one symbol of each sequence.
    #[default]
    Diagonal,
    /// Consumes a symbol of A opposite a gap in B.
    Horizontal,
    /// Consumes a symbol of B opposite a gap in A.
    Vertical,
}

/// Scoring matrix with its boundary set for `mode`.
///
/// Global: column 0 holds `i * gap` and row 0 holds `j * gap`.
/// Local: the boundary is all zero.
pub fn init_scoring_matrix(mode: AlignMode, gap: i64, a_len: usize, b_len: usize) -> Matrix<i64> {
    let mut m = Matrix::filled(a_len + 1, b_len + 1, 0i64);
    if mode == AlignMode::Global {
        for i in 1..=a_len {
            m[(i, 0)] = m[(i - 1, 0)] + gap;
        }
        for j in 1..=b_len {
            m[(0, j)] = m[(0, j - 1)] + gap;
        }
    }
    m
}

/// Pointer matrix with boundary directions set.
///
/// Column 0 can only be left by consuming A, row 0 only by consuming B.
/// Cell `(0, 0)` ends up [`Direction::Vertical`] and is never consulted.
pub fn init_pointer_matrix(a_len: usize, b_len: usize) -> Matrix<Direction> {
    let mut m = Matrix::filled(a_len + 1, b_len + 1, Direction::Diagonal);
    for i in 0..=a_len {
        m[(i, 0)] = Direction::Horizontal;
    }
    for j in 0..=b_len {
        m[(0, j)] = Direction::Vertical;
    }
    m
}
