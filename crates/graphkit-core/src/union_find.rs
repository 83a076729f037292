//! Disjoint-set (union-find) over dense integer indices.
//!
//! Callers map their own element type onto `0..n` and keep the structure for
//! the duration of a single computation. `find` uses path halving: every
//! visited node is re-pointed at its grandparent, so no second pass or
//! recursion is needed. `union` is by rank.

/// A union-find structure with path halving and union-by-rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets `{0}, {1}, …, {n-1}`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of elements tracked.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently present.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The lower-rank root is attached under the higher-rank root. On equal
    /// rank, `a`'s root goes under `b`'s root and `b`'s rank grows by one.
    ///
    /// Returns `false` when `a` and `b` were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[ra] = rb;
            if self.rank[ra] == self.rank[rb] {
                self.rank[rb] = self.rank[rb].saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    /// `true` if `a` and `b` share a representative.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
