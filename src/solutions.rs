use crate::Path;
use std::collections::HashSet;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

/// Points for words of length 0 to 11
const DEFAULT_POINTS: [u32; 12] = [0, 0, 0, 100, 400, 800, 1400, 1800, 2200, 2600, 3000, 3400];

/// Extra points per letter for words longer than the table
const DEFAULT_STEP: u32 = 400;

/// A word found on the board, with the path of cells that spells it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Linear cell indices, in the order the word is traced
    pub path: Path,
    /// The word as lowercase string
    pub word: String,
}

impl Solution {
    pub fn new(path: Path, word: String) -> Solution {
        Solution { path, word }
    }

    /// Number of letters in the word
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.path)
    }
}

/// Points per word length.
///
/// Lengths beyond the end of the table continue from the last entry, adding
/// `step` points per extra letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreTable {
    points: Vec<u32>,
    step: u32,
}

impl Default for ScoreTable {
    /// 3 letters: 100, 4: 400, 5: 800, 6: 1400, then 400 points for each extra letter.
    fn default() -> Self {
        ScoreTable::new(DEFAULT_POINTS.to_vec(), DEFAULT_STEP)
    }
}

impl ScoreTable {
    /// `points[n]` is the score for a word with `n` letters.
    pub fn new(points: Vec<u32>, step: u32) -> ScoreTable {
        ScoreTable { points, step }
    }

    /// Points for a word with `len` letters.
    /// ## Examples
    /// ```
    /// # use boggle_solver::ScoreTable;
    /// let table = ScoreTable::default();
    /// assert_eq!(table.points(2), 0);
    /// assert_eq!(table.points(4), 400);
    /// assert_eq!(table.points(11), 3400);
    /// assert_eq!(table.points(13), 4200);
    /// ```
    pub fn points(&self, len: usize) -> u32 {
        match self.points.get(len) {
            Some(&points) => points,
            None => {
                let last = self.points.len().saturating_sub(1);
                let extra = (len - last) as u32;
                let base = self.points.last().copied().unwrap_or(0);
                base.saturating_add(self.step.saturating_mul(extra))
            }
        }
    }
}

/// The words found on a board.
///
/// The solver collects every path that spells a word, so a word can be present
/// several times with different paths until [`dedupe`](Solutions::dedupe) is called.
#[derive(Debug, Clone, Default)]
pub struct Solutions {
    items: Vec<Solution>,
    paths: HashSet<Path>,
}

impl Solutions {
    pub fn new() -> Solutions {
        Solutions::default()
    }

    /// Add `solution`, unless a solution with the same path is present.
    /// Returns true if the solution was added.
    pub fn push(&mut self, solution: Solution) -> bool {
        if !self.paths.insert(solution.path) {
            return false;
        }
        self.items.push(solution);
        true
    }

    /// Keep only the first solution for each word.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Path, Solution, Solutions};
    /// let mut solutions = Solutions::new();
    /// solutions.push(Solution::new(Path::from(&[0, 1, 2][..]), "cat".into()));
    /// solutions.push(Solution::new(Path::from(&[8, 5, 2][..]), "cat".into()));
    /// solutions.dedupe();
    /// assert_eq!(solutions.len(), 1);
    /// assert_eq!(&solutions[0].path[..], &[0, 1, 2]);
    /// ```
    pub fn dedupe(&mut self) {
        let mut seen = HashSet::new();
        self.items.retain(|solution| seen.insert(solution.word.clone()));
        self.paths = self.items.iter().map(|solution| solution.path).collect();
    }

    /// Sort by word length, longest first. Words of equal length keep their order.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| b.len().cmp(&a.len()));
    }

    /// Return the solutions sorted with [`sort`](Solutions::sort)
    pub fn sorted(mut self) -> Solutions {
        self.sort();
        self
    }

    /// Sum of the points of all solutions.
    pub fn score(&self, table: &ScoreTable) -> u32 {
        self.items
            .iter()
            .map(|solution| table.points(solution.len()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.items.iter()
    }

    /// The words, in order
    pub fn words(&self) -> Vec<&str> {
        self.items.iter().map(|s| s.word.as_str()).collect()
    }

    /// Returns true if a solution spells `word`
    pub fn contains_word(&self, word: &str) -> bool {
        self.items.iter().any(|s| s.word == word)
    }

    /// Returns true if a solution has `path`
    pub fn contains_path(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.paths.clear();
    }
}

impl Index<usize> for Solutions {
    type Output = Solution;
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl FromIterator<Solution> for Solutions {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        let mut solutions = Solutions::new();
        for solution in iter {
            solutions.push(solution);
        }
        solutions
    }
}

impl IntoIterator for Solutions {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Solutions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
