use crate::IndexOutOfBounds;

/// A prefix sum Fenwick tree over a fixed number of `i64` values, all
/// initially zero.
///
/// Internally one-indexed: `data[i]` holds the sum of the values in the
/// half-open range `(i - lsb(i), i]`, and `data[0]` is unused.
#[derive(Clone, Debug)]
pub struct FenwickTree {
    data: Vec<i64>,
}

impl FenwickTree {
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0; len + 1],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sum of the values at indices `[0, i)`. `prefix_sum(0)` is
    /// the empty sum and `prefix_sum(len)` the sum of everything.
    pub fn prefix_sum(&self, i: usize) -> Result<i64, IndexOutOfBounds> {
        if i > self.len() {
            return Err(IndexOutOfBounds::new(i, self.len()));
        }

        let mut i = i;
        let mut res = 0;
        while i > 0 {
            res += self.data[i];
            i &= i - 1;
        }
        Ok(res)
    }

    /// Adds `delta` to the value at index `i`.
    pub fn add(&mut self, i: usize, delta: i64) -> Result<(), IndexOutOfBounds> {
        if i >= self.len() {
            return Err(IndexOutOfBounds::new(i, self.len()));
        }

        let mut i = i + 1;
        while i < self.data.len() {
            self.data[i] += delta;
            i += lsb(i);
        }
        Ok(())
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_sum_test() {
        let mut tree = FenwickTree::new(5);
        tree.add(0, 3).unwrap();
        tree.add(1, 2).unwrap();
        tree.add(2, 4).unwrap();
        tree.add(3, 10).unwrap();
        tree.add(4, 9).unwrap();
        assert_eq!(tree.prefix_sum(0), Ok(0));
        assert_eq!(tree.prefix_sum(1), Ok(3));
        assert_eq!(tree.prefix_sum(2), Ok(5));
        assert_eq!(tree.prefix_sum(3), Ok(9));
        assert_eq!(tree.prefix_sum(4), Ok(19));
        assert_eq!(tree.prefix_sum(5), Ok(28));
    }

    #[test]
    fn add_test() {
        let mut tree = FenwickTree::new(10);
        tree.add(7, 23).unwrap();
        assert_eq!(tree.prefix_sum(8), Ok(23));
        tree.add(3, 17).unwrap();
        assert_eq!(tree.prefix_sum(8), Ok(40));
        assert_eq!(tree.prefix_sum(7), Ok(17));
        tree.add(3, -17).unwrap();
        assert_eq!(tree.prefix_sum(7), Ok(0));
        assert_eq!(tree.prefix_sum(10), Ok(23));
    }

    #[test]
    fn large_values_test() {
        let mut tree = FenwickTree::new(3);
        tree.add(0, 1_000_000_000).unwrap();
        tree.add(1, 1_000_000_000).unwrap();
        tree.add(2, 1_000_000_000).unwrap();
        assert_eq!(tree.prefix_sum(3), Ok(3_000_000_000));
    }

    #[test]
    fn out_of_bounds_test() {
        let mut tree = FenwickTree::new(4);
        assert_eq!(tree.add(4, 1), Err(IndexOutOfBounds::new(4, 4)));
        assert_eq!(tree.prefix_sum(5), Err(IndexOutOfBounds::new(5, 4)));
        assert!(tree.prefix_sum(4).is_ok());

        let mut empty = FenwickTree::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.prefix_sum(0), Ok(0));
        assert!(empty.add(0, 1).is_err());
    }
}
