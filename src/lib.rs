//! A boggle solver library for Rust.
//! <br>
//! This crate finds all words that can be traced on a boggle board: a grid of letters
//! where a word is spelled by moving from a cell to one of its 8 neighbors, without
//! visiting a cell twice.
//! Besides the regular 4x4 and 5x5 boards it supports irregular layouts, where some
//! cells are void and can not be used.
//!
//! # How to use `boggle_solver`
//! Start by loading a wordlist, then create a solver and configure it with the letters
//! of a board. The layout is selected by the number of letters:
//! - 16 letters: `4x4`,
//! - 20 letters: `5x5-corners`, a 5x5 board with void corners and center,
//! - 21 letters: `5x5-cross`, a 5x5 board with void cells around the center,
//! - 25 letters: `5x5`.
//!
//! The wordlist must be in utf-8 and contain one word per line. Words with other
//! characters than the letters `a` to `z` are rejected.
//!
//! # Basic usage
//!  ```
//! # use std::sync::Arc;
//! use boggle_solver::{Solver, Wordlist};
//!
//! let wordlist = Wordlist::from_words(&["cat", "dog", "road", "iron"])?;
//! let solver = Solver::new(Arc::new(wordlist));
//! solver.configure("catdwofoirdgnoas")?;
//! let report = solver.start()?;
//! assert_eq!(report.words, 4);
//! for solution in &solver.solutions() {
//!     println!("{}", solution);
//! }
//! assert_eq!(solver.score(), 1000);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The wordlist is a trie stored in breadth-first order, where each node has the index
//! of its first child and a bitset of the labels of its children. The solver does a
//! depth-first search from each playable cell, and stops extending a path as soon as no
//! word starts with its letters.
//!
//! A search runs on the calling thread. It can be stopped from another thread with a
//! [`StopHandle`], the solutions found so far are kept.
mod bitset;
mod board;
mod codec;
mod error;
mod layout;
mod path;
mod solutions;
mod solver;
mod wordlist;

pub use bitset::{BitSet, CellSet, LabelSet};
pub use board::Board;
pub use codec::{Codec, Label};
pub use error::Error;
pub use layout::{CellKind, Layout, Layouts};
pub use path::Path;
pub use solutions::{ScoreTable, Solution, Solutions};
pub use solver::{Observer, SolveReport, SolveState, Solver, StopHandle, MIN_WORD_LENGTH};
pub use wordlist::{Wordlist, WordlistBuilder};
