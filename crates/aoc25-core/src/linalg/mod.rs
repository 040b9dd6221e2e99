/// Linear systems over `f64`: Gauss-Jordan reduction, free-variable
/// parametrisation, and a bounded search for the minimal-sum non-negative
/// integer solution.
///
/// # Pipeline
///
/// 1. [`reduce`] brings an augmented [`Matrix`] to reduced row-echelon form,
///    failing with [`SolveError::InconsistentSystem`] when a row reads
///    `0 = c` for nonzero `c`.
/// 2. [`parametrize`] expresses every variable as an affine function of the
///    free (non-pivot) variables.
/// 3. [`search_min_sum`] enumerates integer assignments of the free variables
///    inside caller-supplied inclusive ranges and keeps the non-negative
///    integer candidate with the smallest sum that satisfies the original
///    rows.
///
/// [`solve_min_sum`] chains all three, deriving the ranges with
/// [`nonnegative_bounds`].
///
/// # Tolerance
///
/// Every zero test (pivot selection, elimination, inconsistency, integrality,
/// back-substitution check) uses the same absolute tolerance,
/// [`SolverConfig::epsilon`].
mod matrix;
mod parametrize;
mod reduce;
mod search;


pub use matrix::Matrix;
pub use parametrize::{Parametrization, parametrize};
pub use reduce::{reduce, reduce_with};
pub use search::{IntegerSolution, nonnegative_bounds, search_min_sum};

/// Absolute tolerance used to decide whether a floating-point value is zero.
pub const EPSILON: f64 = 1e-9;

/// Default cap on the number of candidate assignments a search may visit.
pub const DEFAULT_MAX_CANDIDATES: u64 = 100_000_000;

/// Tunables for the solver pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance applied to every zero test.
    pub epsilon: f64,
    /// Upper bound on the size of the free-variable search space.
    pub max_candidates: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl SolverConfig {
    pub(crate) fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }
}

/// Errors produced by the solver pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// After reduction, the row at this index is zero in every coefficient
    /// column but nonzero in the augmented column.
    InconsistentSystem {
        /// Index of the offending row in the reduced matrix.
        row: usize,
    },
    /// No candidate inside the search ranges was a non-negative integer
    /// solution of the original system.
    NoSolutionFound,
    /// The Cartesian product of the search ranges exceeds
    /// [`SolverConfig::max_candidates`].
    SearchSpaceTooLarge {
        /// Number of assignments the ranges describe (saturating).
        size: u64,
        /// The configured limit.
        limit: u64,
    },
    /// The number of search ranges differs from the number of free variables.
    DimensionMismatch {
        /// Number of free variables in the parametrisation.
        expected: usize,
        /// Number of ranges supplied.
        actual: usize,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::InconsistentSystem { row } => {
                write!(f, "matrix is inconsistent (row {row} reads 0 = c)")
            }
            SolveError::NoSolutionFound => {
                f.write_str("no non-negative integer solution within the search ranges")
            }
            SolveError::SearchSpaceTooLarge { size, limit } => {
                write!(
                    f,
                    "search space of {size} candidates exceeds the limit of {limit}"
                )
            }
            SolveError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "expected {expected} search ranges (one per free variable), got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Runs the whole pipeline on an augmented matrix whose coefficients are all
/// non-negative: reduce, parametrise, bound the free variables, search.
///
/// # Errors
///
/// Propagates every [`SolveError`] the stages produce.
pub fn solve_min_sum(
    matrix: &Matrix,
    config: &SolverConfig,
) -> Result<IntegerSolution, SolveError> {
    let rref = reduce_with(matrix, config)?;
    let params = parametrize(&rref, config);
    let bounds = nonnegative_bounds(matrix, &params, config);
    search_min_sum(matrix, &params, &bounds, config)
}
