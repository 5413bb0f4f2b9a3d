use rustc_hash::FxHashMap;

use crate::IndexOutOfBounds;

/// A partition of `{0, .., n - 1}` into disjoint sets, using union by rank and
/// path compression.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<usize>,
    /// Upper bound on the height of the tree below each root.
    ranks: Vec<u32>,
    num_sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
            num_sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the representative of the set containing `x`. Every element on
    /// the way up is re-parented directly under the representative.
    pub fn find(&mut self, x: usize) -> Result<usize, IndexOutOfBounds> {
        self.check(x)?;

        let mut root = x;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut x = x;
        while x != root {
            let next = self.parents[x];
            self.parents[x] = root;
            x = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `x` and `y`. Returns `false` if they were
    /// already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, IndexOutOfBounds> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }

        let (child, root) = if self.ranks[root_x] < self.ranks[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parents[child] = root;
        if self.ranks[child] == self.ranks[root] {
            self.ranks[root] += 1;
        }
        self.num_sets -= 1;

        Ok(true)
    }

    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, IndexOutOfBounds> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the current partition, keyed by representative. Members are
    /// listed in ascending order.
    pub fn sets(&mut self) -> FxHashMap<usize, Vec<usize>> {
        let mut sets: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for x in 0..self.len() {
            let root = self.find(x).expect("x is in bounds");
            sets.entry(root).or_default().push(x);
        }
        sets
    }

    fn check(&self, x: usize) -> Result<(), IndexOutOfBounds> {
        if x < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfBounds::new(x, self.len()))
        }
    }
}
