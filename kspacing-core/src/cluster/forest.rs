//! Disjoint-set forest with union by rank and full path compression.
//!
//! Vertices are addressed by 0-based index; the clustering engine maps the
//! 1-based vertex label `l` to index `l - 1` before touching the forest.
//! Parent pointers and ranks live in parallel arrays so a lookup is a single
//! slice index.

/// A partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use kspacing_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(3);
/// assert!(forest.merge(0, 2));
/// assert!(forest.same_set(2, 0));
/// assert!(!forest.same_set(1, 2));
/// assert_eq!(forest.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl DisjointSetForest {
    /// Creates `len` singleton sets; every vertex is its own root with rank 0.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            set_count: len,
        }
    }

    /// Returns the number of vertices tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of distinct sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    /// Returns the current parent pointer of `node` without compressing.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn parent(&self, node: usize) -> usize {
        self.parent[node]
    }

    /// Returns the rank of `node`. Only meaningful for roots.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn rank(&self, node: usize) -> u8 {
        self.rank[node]
    }

    /// Returns the root of the set containing `node`.
    ///
    /// Every vertex visited on the way up is re-pointed directly at the root,
    /// so a second call on any of them resolves in one step.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root && self.parent[current] != current {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Returns `true` when `left` and `right` share a root.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn same_set(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Unites the sets containing `left` and `right`.
    ///
    /// The root with the smaller rank is attached beneath the other. On equal
    /// ranks the smaller root index becomes the parent and its rank grows by
    /// one; no other merge changes a rank. Returns `false` without touching
    /// the forest when both vertices already share a root.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn merge(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.set_count -= 1;
        true
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
