#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::From;
use std::fmt;
use std::iter::FromIterator;
use std::iter::Iterator;

/// Number of distinct members a `BitSet` can hold.
pub const CAPACITY: usize = 32;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A set of small integers `0..32` packed in a `u32`.
///
/// Used for the labels of the children of a [`Wordlist`](crate::Wordlist) node,
/// and for the cells visited by the current search path.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitSet(u32);

/// The labels of the child nodes of a wordlist node
pub type LabelSet = BitSet;

/// The cells in use by a search path
pub type CellSet = BitSet;

impl BitSet {
    pub fn new() -> BitSet {
        BitSet(0)
    }

    pub fn contains(&self, v: u8) -> bool {
        (v as usize) < CAPACITY && self.0 & (1 << v) != 0
    }

    /// Insert `v`, return true if it was already present.
    pub fn insert(&mut self, v: u8) -> bool {
        assert!((v as usize) < CAPACITY);
        let r = (self.0 & (1 << v)) != 0;
        self.0 |= 1 << v;
        r
    }

    /// Remove `v`, return true if it was present.
    pub fn remove(&mut self, v: u8) -> bool {
        let r = self.contains(v);
        if r {
            self.0 &= !(1 << v);
        }
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorBitSet {
        IteratorBitSet::new(self.0)
    }

    /// Return the rank of `v` among the members, if present.
    pub fn index_of(&self, v: u8) -> Option<usize> {
        if !self.contains(v) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, v as u32)) as usize)
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorBitSet {
    count: u32,
    value: u32,
}

impl IteratorBitSet {
    pub fn new(value: u32) -> IteratorBitSet {
        IteratorBitSet { count: 0, value }
    }
}

impl Iterator for IteratorBitSet {
    type Item = u8;
    fn next(&mut self) -> Option<u8> {
        while self.count < CAPACITY as u32 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i as u8);
            }
        }
        None
    }
}

impl FromIterator<u8> for BitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = BitSet::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl From<Vec<u8>> for BitSet {
    fn from(v: Vec<u8>) -> Self {
        v.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = BitSet::new();
        for &n in &[2, 25, 2, 1] {
            set.insert(n);
        }
        for &n in &[1, 2, 25] {
            assert!(set.contains(n));
        }
        assert!(!set.contains(5));
        assert!(set.remove(25));
        assert!(!set.remove(25));
        assert!(!set.contains(25));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let set = BitSet::from(vec![0u8, 31]);
        assert!(!set.contains(32));
        assert!(!set.contains(200));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 31]);
    }

    #[test]
    #[should_panic]
    fn test_insert_out_of_range() {
        let mut set = BitSet::new();
        set.insert(32);
    }

    #[test]
    fn test_index() {
        let set = BitSet::from(vec![0u8, 1, 4, 5, 7, 8, 10, 12, 14, 15]);
        assert_eq!(set.index_of(0), Some(0));
        assert_eq!(set.index_of(15), Some(9));
        assert_eq!(set.index_of(2), None);
        assert_eq!(set.len(), 10);
        assert_eq!(format!("{:?}", set), "{0,1,4,5,7,8,10,12,14,15}");
    }

    #[test]
    fn test_zero_highbits() {
        let n = 0b1111_0010_u32;
        let s = 0b0001_0010_u32;
        assert_eq!(zero_highbits(n, 5), s);
    }

    #[test]
    fn test_count_ones() {
        assert_eq!(count_ones(0b0101_1010u32), 4);
    }
}
