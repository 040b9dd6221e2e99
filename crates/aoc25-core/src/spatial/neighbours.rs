//! Candidate edge extraction for minimum-spanning-forest style drivers.
use std::collections::HashSet;

use serde::Serialize;

use super::kd_tree::KdTree;
use super::point::Point;

/// An unordered pair of input ordinals (`a < b`) and their distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointPair {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// Collects, for every point in `tree`, the pairs to its `k` nearest other
/// points.
///
/// Each unordered pair appears once. The result is sorted by ascending
/// distance, ties broken by `(a, b)`, which is the order a Kruskal-style
/// traversal consumes it in.
pub fn nearest_pairs<P: Point>(tree: &KdTree<P>, k: usize) -> Vec<PointPair> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut pairs = Vec::new();

    for (index, point) in tree.iter() {
        // One extra slot for the point itself.
        for neighbour in tree.k_nearest(point, k.saturating_add(1)) {
            if neighbour.index == index {
                continue;
            }
            let key = (index.min(neighbour.index), index.max(neighbour.index));
            if seen.insert(key) {
                pairs.push(PointPair {
                    a: key.0,
                    b: key.1,
                    distance: neighbour.distance,
                });
            }
        }
    }

    pairs.sort_by(|x, y| {
        x.distance
            .total_cmp(&y.distance)
            .then_with(|| (x.a, x.b).cmp(&(y.a, y.b)))
    });
    tracing::debug!(points = tree.len(), k, pairs = pairs.len(), "collected nearest pairs");
    pairs
}
