use std::fmt;

pub mod fenwick;
pub mod fft;
pub mod harness;
pub mod interval_cover;
pub mod knapsack;
pub mod linear_system;
pub mod lis;
pub mod scanner;
pub mod union_find;

pub use fenwick::FenwickTree;
pub use union_find::DisjointSet;

/// An index outside of the structure it was used on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfBounds {
    pub(crate) fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "index {} out of bounds for length {}", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfBounds {}
