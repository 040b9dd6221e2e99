//! Gauss-Jordan elimination with partial pivoting.
use super::matrix::Matrix;
use super::{SolveError, SolverConfig};

/// Reduces an augmented matrix to reduced row-echelon form using the default
/// [`SolverConfig`].
///
/// # Errors
///
/// Returns [`SolveError::InconsistentSystem`] if the system has no solution.
pub fn reduce(matrix: &Matrix) -> Result<Matrix, SolveError> {
    reduce_with(matrix, &SolverConfig::default())
}

/// Reduces an augmented matrix to reduced row-echelon form.
///
/// The input is left untouched; the reduced copy is returned. Pivot rows are
/// ordered by increasing pivot column, each pivot is exactly 1, every other
/// entry of a pivot column is exactly 0, and zero rows sit at the bottom.
/// Entries within `config.epsilon` of zero are snapped to `0.0`.
///
/// # Errors
///
/// Returns [`SolveError::InconsistentSystem`] if, after reduction, a row is
/// zero in every coefficient column but not in the augmented column.
pub fn reduce_with(matrix: &Matrix, config: &SolverConfig) -> Result<Matrix, SolveError> {
    // No augmented column: nothing to eliminate and nothing to contradict.
    if matrix.cols() == 0 {
        return Ok(matrix.clone());
    }
    let mut m = matrix.clone();
    let rows = m.rows();
    let variables = m.variables();

    // Forward pass: one pivot per column, largest magnitude first.
    let mut pivots: Vec<(usize, usize)> = Vec::new();
    for col in 0..variables {
        let next = pivots.len();
        if next == rows {
            break;
        }

        let Some(best) =
            (next..rows).max_by(|&a, &b| m[(a, col)].abs().total_cmp(&m[(b, col)].abs()))
        else {
            break;
        };
        if config.is_zero(m[(best, col)]) {
            continue;
        }

        m.swap_rows(best, next);
        let pivot = m[(next, col)];
        for r in next + 1..rows {
            let entry = m[(r, col)];
            if !config.is_zero(entry) {
                m.sub_scaled_row(r, next, entry / pivot);
            }
            m[(r, col)] = 0.0;
        }
        pivots.push((next, col));
    }

    // Backward pass: unit pivots, clear above.
    for &(r, col) in pivots.iter().rev() {
        let pivot = m[(r, col)];
        for v in m.row_mut(r) {
            *v /= pivot;
        }
        m[(r, col)] = 1.0;
        for above in 0..r {
            let entry = m[(above, col)];
            if !config.is_zero(entry) {
                m.sub_scaled_row(above, r, entry);
            }
            m[(above, col)] = 0.0;
        }
    }

    for r in 0..rows {
        for v in m.row_mut(r) {
            if config.is_zero(*v) {
                *v = 0.0;
            }
        }
    }

    for r in pivots.len()..rows {
        if !config.is_zero(m[(r, variables)]) {
            tracing::debug!(row = r, "inconsistent system");
            return Err(SolveError::InconsistentSystem { row: r });
        }
    }

    tracing::debug!(
        rows,
        variables,
        rank = pivots.len(),
        "reduced matrix to row-echelon form"
    );
    Ok(m)
}

/// Returns `(row, column)` for every pivot of a matrix already in reduced
/// row-echelon form, in row order.
pub(crate) fn pivot_positions(rref: &Matrix, config: &SolverConfig) -> Vec<(usize, usize)> {
    let variables = rref.variables();
    rref.iter_rows()
        .enumerate()
        .filter_map(|(r, row)| {
            row[..variables]
                .iter()
                .position(|&v| !config.is_zero(v))
                .map(|c| (r, c))
        })
        .collect()
}
