use std::ops::{Index, IndexMut};

use serde::Serialize;

/// A dense, row-major matrix of `f64`.
///
/// When used as a linear system the last column is the right-hand side
/// (augmented form): a matrix with `cols` columns describes `cols - 1`
/// variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from row slices.
    ///
    /// Returns `None` if the rows have different lengths. An empty iterator
    /// yields a `0 × 0` matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: impl IntoIterator<Item = R>) -> Option<Self> {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;
        for row in rows {
            let row = row.as_ref();
            match cols {
                None => cols = Some(row.len()),
                Some(c) if c != row.len() => return None,
                Some(_) => {}
            }
            data.extend_from_slice(row);
            count += 1;
        }
        Some(Self {
            rows: count,
            cols: cols.unwrap_or(0),
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, including the augmented column.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of variables in augmented form (`cols - 1`, or 0).
    pub fn variables(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    /// Returns row `r` as a slice.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [f64] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Iterates over the rows. A zero-column matrix yields `rows` empty
    /// slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    /// `row[target] -= factor * row[source]`.
    pub(crate) fn sub_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        for c in 0..self.cols {
            let v = self.data[source * self.cols + c];
            self.data[target * self.cols + c] -= factor * v;
        }
    }

    /// Copies the matrix out as nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        &mut self.data[r * self.cols + c]
    }
}
