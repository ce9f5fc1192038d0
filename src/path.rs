use crate::bitset::CAPACITY;
use std::fmt;
use std::iter::{FromIterator, IntoIterator};
use std::ops::Deref;
use tinyvec::{ArrayVec, ArrayVecIterator};

type Cells = ArrayVec<[usize; CAPACITY]>;

/// An ordered list of linear cell indices traced on a board.
///
/// A path found by the solver visits adjacent playable cells, and never visits a
/// cell twice. It holds at most 32 cells, the maximum size of a [`Layout`](crate::Layout).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Path(Cells);

impl Path {
    pub fn new() -> Path {
        Path(Cells::new())
    }

    /// Append cell `index`.
    ///
    /// ## Panics
    /// If the path already holds 32 cells.
    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl Deref for Path {
    type Target = [usize];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(usize::to_string)
            .collect::<Vec<String>>()
            .join("-");
        write!(f, "{}", s)
    }
}

impl FromIterator<usize> for Path {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = usize;
    type IntoIter = ArrayVecIterator<[usize; CAPACITY]>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> From<&'a [usize]> for Path {
    fn from(cells: &'a [usize]) -> Self {
        cells.iter().copied().collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
