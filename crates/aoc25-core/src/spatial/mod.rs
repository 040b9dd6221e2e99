/// Spatial indexing: points, a k-d tree, and nearest-pair extraction.
///
/// # Points
///
/// The [`Point`] trait is the only thing the tree needs from a coordinate
/// type: a value per axis and a way to visit every axis. [`Point2`] and
/// [`Point3`] cover the puzzle inputs; callers can plug in their own types.
///
/// # Queries
///
/// [`KdTree::k_nearest`] runs the classic pruning search with a bounded
/// max-heap. [`nearest_pairs`] composes it over a whole point set to produce
/// the ascending candidate edge list that Kruskal-style drivers feed into a
/// [`crate::UnionFind`].
pub mod kd_tree;
pub mod neighbours;
pub mod point;

pub use kd_tree::{KdTree, Neighbour};
pub use neighbours::{PointPair, nearest_pairs};
pub use point::{Point, Point2, Point3, distance};
