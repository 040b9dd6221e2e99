//! Union-Find (disjoint set) over dense ordinals.
//!
//! Path compression is the full two-pass variant: [`UnionFind::find`] first
//! walks to the root, then repoints every node it visited directly at that
//! root. Union-by-rank keeps trees shallow; when ranks are equal the **lower
//! ordinal** becomes the root, so [`UnionFind::find`] returns the same
//! representative for a given merge history regardless of argument order.
//!
//! The structure also keeps a live component count so that Kruskal-style
//! drivers can stop as soon as a target number of components is reached.

/// A union-find (disjoint set) structure with path compression and
/// union-by-rank.
///
/// Each element is identified by a `usize` ordinal in `[0, len)`. New
/// singletons are appended with [`UnionFind::make_set`].
///
/// # Determinism
///
/// When two sets of equal rank are merged, the lower ordinal is chosen as the
/// new root. This guarantees that `find` returns the same representative for
/// any given merge history, independent of the order in which `union` is called.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates a new `UnionFind` with `n` singleton sets.
    ///
    /// Each element `i` is initially its own representative (`parent[i] == i`,
    /// `rank[i] == 0`).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
            components: n,
        }
    }

    /// Appends a new singleton set and returns its ordinal.
    pub fn make_set(&mut self) -> usize {
        let ordinal = self.parent.len();
        self.parent.push(ordinal);
        self.rank.push(0);
        self.components += 1;
        ordinal
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is linked directly to the
    /// root before returning, so repeated lookups are O(1) amortized.
    ///
    /// # Panics
    ///
    /// Indexing panics if `x >= len()`. That is a logic error in the caller;
    /// no valid call path produces it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged and `false` if `a` and
    /// `b` were already connected (in which case nothing changes).
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);

        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => {
                self.parent[ra] = rb;
            }
            std::cmp::Ordering::Greater => {
                self.parent[rb] = ra;
            }
            std::cmp::Ordering::Equal => {
                if ra < rb {
                    self.parent[rb] = ra;
                    self.rank[ra] = self.rank[ra].saturating_add(1);
                } else {
                    self.parent[ra] = rb;
                    self.rank[rb] = self.rank[rb].saturating_add(1);
                }
            }
        }
        self.components -= 1;
        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the current number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of every set, indexed by root ordinal.
    ///
    /// Roots are listed in ascending ordinal order.
    pub fn component_sizes(&mut self) -> Vec<(usize, usize)> {
        let mut sizes = vec![0usize; self.parent.len()];
        for x in 0..self.parent.len() {
            let root = self.find(x);
            sizes[root] += 1;
        }
        sizes
            .into_iter()
            .enumerate()
            .filter(|&(_, size)| size > 0)
            .collect()
    }

    /// Returns the rank recorded for `x`.
    ///
    /// Only meaningful for roots; kept for invariant checks.
    pub fn rank(&self, x: usize) -> u8 {
        self.rank[x]
    }

    /// Returns the number of elements in this `UnionFind`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if this `UnionFind` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
