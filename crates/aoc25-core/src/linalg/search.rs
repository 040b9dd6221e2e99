//! Bounded search for the minimal-sum non-negative integer solution.
use std::ops::RangeInclusive;

use serde::Serialize;

use super::matrix::Matrix;
use super::parametrize::Parametrization;
use super::{SolveError, SolverConfig};
use crate::combinations::Combinations;

/// A non-negative integer solution and its variable sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerSolution {
    /// One value per variable, in column order.
    pub values: Vec<i64>,
    /// Sum of [`IntegerSolution::values`].
    pub total: i64,
}

/// Derives an inclusive search range for every free variable of a system
/// whose coefficients are non-negative.
///
/// A free variable with a positive coefficient in some row can be at most
/// `rhs / coefficient` for that row, so its upper bound is the floor of the
/// smallest such ratio. A variable that appears in no row is pinned to
/// `0..=0`, since raising it only increases the sum.
pub fn nonnegative_bounds(
    original: &Matrix,
    params: &Parametrization,
    config: &SolverConfig,
) -> Vec<RangeInclusive<i64>> {
    let rhs_col = original.variables();
    params
        .free_columns()
        .iter()
        .map(|&col| {
            let upper = original
                .iter_rows()
                .filter(|row| row[col] > config.epsilon)
                .map(|row| (row[rhs_col] / row[col] + config.epsilon).floor())
                .min_by(f64::total_cmp)
                .unwrap_or(0.0)
                .max(0.0);
            // Saturating float-to-int conversion.
            0..=(upper as i64)
        })
        .collect()
}

/// Searches `bounds` (one inclusive range per free variable) for the
/// non-negative integer solution of `original` with the smallest sum.
///
/// Assignments are visited in lexicographic order with the first free
/// variable varying slowest; among equal sums the first one found wins.
///
/// # Errors
///
/// - [`SolveError::DimensionMismatch`] if `bounds.len()` differs from the
///   number of free variables.
/// - [`SolveError::SearchSpaceTooLarge`] if the product of range sizes
///   exceeds `config.max_candidates`.
/// - [`SolveError::NoSolutionFound`] if no candidate survives.
pub fn search_min_sum(
    original: &Matrix,
    params: &Parametrization,
    bounds: &[RangeInclusive<i64>],
    config: &SolverConfig,
) -> Result<IntegerSolution, SolveError> {
    if bounds.len() != params.free_count() {
        return Err(SolveError::DimensionMismatch {
            expected: params.free_count(),
            actual: bounds.len(),
        });
    }
    let size = Combinations::count_total(bounds);
    if size > config.max_candidates {
        return Err(SolveError::SearchSpaceTooLarge {
            size,
            limit: config.max_candidates,
        });
    }

    let mut best: Option<IntegerSolution> = None;
    let mut accepted = 0u64;
    let mut assignment = vec![0.0; bounds.len()];
    for combination in Combinations::new(bounds.to_vec()) {
        for (slot, &v) in assignment.iter_mut().zip(&combination) {
            // Search ranges are small; the conversion is exact.
            *slot = v as f64;
        }
        let candidate = params.evaluate(&assignment);

        let Some(values) = round_nonnegative(&candidate, config) else {
            tracing::trace!(?combination, "rejected: negative or fractional");
            continue;
        };
        if !satisfies(original, &values, config) {
            tracing::trace!(?combination, "rejected: violates original rows");
            continue;
        }

        accepted += 1;
        let total: i64 = values.iter().sum();
        if best.as_ref().is_none_or(|b| total < b.total) {
            best = Some(IntegerSolution { values, total });
        }
    }

    tracing::debug!(
        candidates = size,
        accepted,
        best = best.as_ref().map(|b| b.total),
        "searched free-variable assignments"
    );
    best.ok_or(SolveError::NoSolutionFound)
}

/// Rounds every value to the nearest integer if all of them are within
/// tolerance of a non-negative integer.
fn round_nonnegative(candidate: &[f64], config: &SolverConfig) -> Option<Vec<i64>> {
    candidate
        .iter()
        .map(|&v| {
            let rounded = v.round();
            if config.is_zero(v - rounded) && rounded >= 0.0 {
                Some(rounded as i64)
            } else {
                None
            }
        })
        .collect()
}

/// Checks the rounded candidate against every row of the unreduced system.
fn satisfies(original: &Matrix, values: &[i64], config: &SolverConfig) -> bool {
    let rhs_col = original.variables();
    original.iter_rows().all(|row| {
        let lhs: f64 = row[..rhs_col]
            .iter()
            .zip(values)
            .map(|(coef, &v)| coef * v as f64)
            .sum();
        let rhs = row.get(rhs_col).copied().unwrap_or(0.0);
        config.is_zero(lhs - rhs)
    })
}
