//! Static k-d tree with k-nearest-neighbour search.
//!
//! The tree is built once by median splitting and never mutated. Each node
//! owns one point (with its ordinal in the input sequence) and up to two
//! boxed children.
//!
//! # Median selection
//!
//! At depth `d` the remaining points are stable-sorted by their coordinate on
//! axis `d mod DIMENSIONS` using [`f64::total_cmp`], and the element at index
//! `len / 2` becomes the node. Points with equal coordinates keep their input
//! order, which makes the tree shape a pure function of the input sequence.
//!
//! # Query tie-breaking
//!
//! Candidates are ranked by distance, then by coordinates (lexicographic),
//! then by input ordinal. The k-nearest result is therefore the first `k`
//! points under that total order, so permuting the input does not change the
//! returned point set.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use super::point::{Point, cmp_coordinates, distance};

struct Node<P> {
    point: P,
    index: usize,
    left: Option<Box<Node<P>>>,
    right: Option<Box<Node<P>>>,
}

/// A k-d tree over points of type `P`.
pub struct KdTree<P> {
    root: Option<Box<Node<P>>>,
    len: usize,
}

/// One k-nearest-neighbour result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbour<'a, P> {
    /// The matched point, borrowed from the tree.
    pub point: &'a P,
    /// Position of the point in the sequence the tree was built from.
    pub index: usize,
    /// Euclidean distance from the query target.
    pub distance: f64,
}

/// Heap entry ordered so that the *farthest* candidate sits on top.
struct Candidate<'a, P> {
    neighbour: Neighbour<'a, P>,
}

impl<P: Point> Candidate<'_, P> {
    fn rank(&self, other: &Self) -> Ordering {
        self.neighbour
            .distance
            .total_cmp(&other.neighbour.distance)
            .then_with(|| cmp_coordinates(self.neighbour.point, other.neighbour.point))
            .then_with(|| self.neighbour.index.cmp(&other.neighbour.index))
    }
}

impl<P: Point> PartialEq for Candidate<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.rank(other).is_eq()
    }
}

impl<P: Point> Eq for Candidate<'_, P> {}

impl<P: Point> PartialOrd for Candidate<'_, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Point> Ord for Candidate<'_, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank(other)
    }
}

impl<P: Point> KdTree<P> {
    /// Builds a tree from `points`.
    ///
    /// Each point remembers its position in the iterator, reported back as
    /// [`Neighbour::index`]. An empty input yields an empty tree.
    pub fn build(points: impl IntoIterator<Item = P>) -> Self {
        let entries: Vec<(usize, P)> = points.into_iter().enumerate().collect();
        let len = entries.len();
        let root = build_node(entries, 0);
        tracing::debug!(points = len, "built k-d tree");
        Self { root, len }
    }

    /// Returns the number of points in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the maximum root-to-leaf depth (0 for an empty tree).
    pub fn depth(&self) -> usize {
        fn depth_of<P>(node: Option<&Node<P>>) -> usize {
            node.map_or(0, |n| {
                1 + depth_of(n.left.as_deref()).max(depth_of(n.right.as_deref()))
            })
        }
        depth_of(self.root.as_deref())
    }

    /// Returns the `k` points closest to `target`, nearest first.
    ///
    /// Returns every point when `k >= len()` and nothing when `k == 0` or the
    /// tree is empty. The target does not need to be in the tree; if it is,
    /// it is returned at distance 0.
    pub fn k_nearest(&self, target: &P, k: usize) -> Vec<Neighbour<'_, P>> {
        let k = k.min(self.len);
        if k == 0 {
            return Vec::new();
        }
        let mut heap = BinaryHeap::with_capacity(k.saturating_add(1));
        search(self.root.as_deref(), target, k, &mut heap, 0);
        heap.into_sorted_vec()
            .into_iter()
            .map(|c| c.neighbour)
            .collect()
    }

    /// Returns the single closest point to `target`, if any.
    pub fn nearest(&self, target: &P) -> Option<Neighbour<'_, P>> {
        self.k_nearest(target, 1).into_iter().next()
    }

    /// Visits every stored point together with its input ordinal, in tree
    /// pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &P)> {
        let mut stack: Vec<&Node<P>> = self.root.as_deref().into_iter().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
            Some((node.index, &node.point))
        })
    }
}

fn build_node<P: Point>(mut entries: Vec<(usize, P)>, depth: usize) -> Option<Box<Node<P>>> {
    if entries.is_empty() {
        return None;
    }

    let axis = depth % P::DIMENSIONS;
    entries.sort_by(|(_, a), (_, b)| a.coordinate(axis).total_cmp(&b.coordinate(axis)));

    let median = entries.len() / 2;
    let right = entries.split_off(median + 1);
    let (index, point) = entries.pop()?;

    Some(Box::new(Node {
        point,
        index,
        left: build_node(entries, depth + 1),
        right: build_node(right, depth + 1),
    }))
}

fn search<'a, P: Point>(
    node: Option<&'a Node<P>>,
    target: &P,
    k: usize,
    heap: &mut BinaryHeap<Candidate<'a, P>>,
    depth: usize,
) {
    let Some(node) = node else {
        return;
    };

    heap.push(Candidate {
        neighbour: Neighbour {
            point: &node.point,
            index: node.index,
            distance: distance(&node.point, target),
        },
    });
    if heap.len() > k {
        heap.pop();
    }

    let axis = depth % P::DIMENSIONS;
    let offset = target.coordinate(axis) - node.point.coordinate(axis);
    let (near, far) = if offset < 0.0 {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    search(near, target, k, heap, depth + 1);

    // Points beyond the splitting plane are at least |offset| away.
    let worth_crossing = heap.len() < k
        || heap
            .peek()
            .is_none_or(|farthest| offset.abs() <= farthest.neighbour.distance);
    if worth_crossing {
        search(far, target, k, heap, depth + 1);
    }
}
