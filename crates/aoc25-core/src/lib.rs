#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod combinations;
pub mod disjoint_set;
pub mod linalg;
pub mod spatial;
pub mod union_find;

pub use combinations::Combinations;
pub use disjoint_set::DisjointSet;
pub use linalg::{
    IntegerSolution, Matrix, Parametrization, SolveError, SolverConfig, nonnegative_bounds,
    parametrize, reduce, search_min_sum, solve_min_sum,
};
pub use spatial::{KdTree, Neighbour, Point, Point2, Point3, PointPair, distance, nearest_pairs};
pub use union_find::UnionFind;

/// Returns the current version of the aoc25-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
