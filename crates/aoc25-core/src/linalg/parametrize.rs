use serde::Serialize;

use super::matrix::Matrix;
use super::reduce::pivot_positions;
use super::SolverConfig;

/// Every variable of a reduced system written as an affine function of the
/// free variables.
///
/// The parameter table has one row per variable and `1 + free_count`
/// columns. Column 0 is the constant term and column `1 + j` the coefficient
/// of free variable `j`. A free variable's own row is the identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parametrization {
    free_columns: Vec<usize>,
    pivot_columns: Vec<usize>,
    table: Matrix,
}

impl Parametrization {
    /// Column indices of the free variables, ascending. The position in this
    /// slice is the free variable's dense index.
    pub fn free_columns(&self) -> &[usize] {
        &self.free_columns
    }

    /// Column indices that hold a pivot, ascending.
    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivot_columns
    }

    /// Dense index of the free variable stored in `column`, if it is free.
    pub fn free_index(&self, column: usize) -> Option<usize> {
        self.free_columns.binary_search(&column).ok()
    }

    /// Number of free variables.
    pub fn free_count(&self) -> usize {
        self.free_columns.len()
    }

    /// Number of variables in the system.
    pub fn variables(&self) -> usize {
        self.table.rows()
    }

    /// The parameter table.
    pub fn table(&self) -> &Matrix {
        &self.table
    }

    /// Evaluates every variable for one assignment of the free variables.
    ///
    /// `assignment[j]` is the value of free variable `j`; missing entries are
    /// treated as zero and extra entries are ignored.
    pub fn evaluate(&self, assignment: &[f64]) -> Vec<f64> {
        self.table
            .iter_rows()
            .map(|row| {
                row[1..]
                    .iter()
                    .zip(assignment)
                    .fold(row[0], |acc, (coef, value)| acc + coef * value)
            })
            .collect()
    }
}

/// Builds the [`Parametrization`] of a matrix in reduced row-echelon form.
///
/// A pivot variable equals its row's augmented value minus the row's
/// coefficient on each free variable times that variable.
pub fn parametrize(rref: &Matrix, config: &SolverConfig) -> Parametrization {
    let variables = rref.variables();
    let pivots = pivot_positions(rref, config);

    let mut is_pivot = vec![false; variables];
    for &(_, c) in &pivots {
        is_pivot[c] = true;
    }
    let free_columns: Vec<usize> = (0..variables).filter(|&c| !is_pivot[c]).collect();
    let pivot_columns: Vec<usize> = pivots.iter().map(|&(_, c)| c).collect();

    let mut table = Matrix::zeros(variables, 1 + free_columns.len());
    for (j, &c) in free_columns.iter().enumerate() {
        table[(c, 1 + j)] = 1.0;
    }
    for &(r, c) in &pivots {
        table[(c, 0)] = rref[(r, variables)];
        for (j, &free) in free_columns.iter().enumerate() {
            let coef = rref[(r, free)];
            if !config.is_zero(coef) {
                table[(c, 1 + j)] = -coef;
            }
        }
    }

    tracing::debug!(
        variables,
        free = free_columns.len(),
        "parametrized reduced system"
    );
    Parametrization {
        free_columns,
        pivot_columns,
        table,
    }
}
