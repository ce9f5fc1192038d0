use crate::bitset::CAPACITY;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::sync::Arc;

const LAYOUT_4X4: [&str; 4] = ["....", "....", "....", "...."];

const LAYOUT_5X5_CORNERS: [&str; 5] = ["#...#", ".....", "..#..", ".....", "#...#"];

const LAYOUT_5X5_CROSS: [&str; 5] = [".....", "..#..", ".#.#.", "..#..", "....."];

const LAYOUT_5X5: [&str; 5] = [".....", ".....", ".....", ".....", "....."];

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellKind {
    /// A cell that holds a letter
    Playable,
    /// A hole in the board, never part of a path
    Void,
}

use CellKind::{Playable, Void};

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Playable => write!(f, "."),
            Void => write!(f, "#"),
        }
    }
}

impl TryFrom<char> for CellKind {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' => Ok(Playable),
            '#' => Ok(Void),
            _ => Err(Error::InvalidLayoutCell(ch)),
        }
    }
}

/// The shape of a board: `width` x `height` cells, each cell playable or void.
///
/// Cells are numbered in row-major order over the full grid, void cells included.
/// The letters of a board fill the playable cells in the same order, so the letter
/// for a cell is found with [`letter_index`](Layout::letter_index).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
    tiles: usize,
    letter_index: Vec<Option<usize>>,
    neighbors: Vec<Vec<usize>>,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Layout {
    /// Create a layout from its cells in row-major order.
    /// ## Errors
    /// - If `cells` does not have `width * height` elements.
    /// - If the grid has more than 32 cells, or no playable cells.
    pub fn new(
        name: &str,
        width: usize,
        height: usize,
        cells: Vec<CellKind>,
    ) -> Result<Layout, Error> {
        let len = width * height;
        if cells.len() != len {
            return Err(Error::InvalidLayoutSize {
                expected: len,
                found: cells.len(),
            });
        }
        if len > CAPACITY {
            return Err(Error::LayoutTooLarge(len));
        }
        let mut letter_index = Vec::with_capacity(len);
        let mut tiles = 0;
        for &cell in &cells {
            if cell == Playable {
                letter_index.push(Some(tiles));
                tiles += 1;
            } else {
                letter_index.push(None);
            }
        }
        if tiles == 0 {
            return Err(Error::EmptyLayout);
        }
        let mut layout = Layout {
            name: String::from(name),
            width,
            height,
            cells,
            tiles,
            letter_index,
            neighbors: Vec::new(),
        };
        let neighbors = (0..len)
            .map(|i| {
                let (row, col) = (i / width, i % width);
                if layout.is_playable(row, col) {
                    layout
                        .neighbors(row, col)
                        .into_iter()
                        .map(|(r, c)| r * width + c)
                        .collect()
                } else {
                    Vec::new()
                }
            })
            .collect();
        layout.neighbors = neighbors;
        Ok(layout)
    }

    /// Create a `Layout` from strings.
    /// Each row is a string of equal length, with `.` for a playable cell and `#` for a void.
    ///
    /// ## Errors
    /// If rows have different lengths, contain other characters, or the grid is too large.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Layout, Error};
    /// let layout = Layout::from_strings("3x3-ring", &["...", ".#.", "..."])?;
    /// assert_eq!(layout.tiles(), 8);
    /// assert!(!layout.is_playable(1, 1));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Layout, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for ch in row.chars() {
                cells.push(CellKind::try_from(ch)?);
            }
        }
        Layout::new(name, width, height, cells)
    }

    /// Get layout cells as a vec of strings, one per row
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(CellKind::to_string).collect())
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, void cells included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of playable cells, which equals the number of letters on a board.
    pub fn tiles(&self) -> usize {
        self.tiles
    }

    /// Return the cell kind at linear `index`, or None if out of range
    pub fn cell(&self, index: usize) -> Option<CellKind> {
        self.cells.get(index).copied()
    }

    /// Returns false for void cells and cells outside the grid.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        self.linear_index(row, col)
            .map_or(false, |i| self.cells[i] == Playable)
    }

    /// Return the playable neighbors of `row`, `col` in the 8 directions.
    /// ## Examples
    /// ```
    /// # use boggle_solver::Layouts;
    /// let layout = Layouts::default().resolve(16).unwrap();
    /// assert_eq!(layout.neighbors(0, 0), vec![(0, 1), (1, 0), (1, 1)]);
    /// assert_eq!(layout.neighbors(1, 1).len(), 8);
    /// ```
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r < 0 || c < 0 {
                    return None;
                }
                let (r, c) = (r as usize, c as usize);
                if self.is_playable(r, c) {
                    Some((r, c))
                } else {
                    None
                }
            })
            .collect()
    }

    /// The linear indices of the playable neighbors of cell `index`.
    /// Empty for void cells and indices outside the grid.
    pub fn neighbor_indices(&self, index: usize) -> &[usize] {
        self.neighbors.get(index).map_or(&[][..], Vec::as_slice)
    }

    /// Row-major index of `row`, `col`, or None if outside the grid.
    pub fn linear_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Row and column of linear `index`, or None if outside the grid.
    pub fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.len() {
            Some((index / self.width, index % self.width))
        } else {
            None
        }
    }

    /// Index into the board letters for cell `index`: the cell index minus the
    /// number of void cells before it. None for void cells.
    pub fn letter_index(&self, index: usize) -> Option<usize> {
        self.letter_index.get(index).copied().flatten()
    }

    /// Iterate over the linear indices of the playable cells, in row-major order
    pub fn playable(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Playable)
            .map(|(i, _)| i)
    }
}

/// The set of known layouts. A layout is selected by its number of tiles.
#[derive(Debug, Clone)]
pub struct Layouts(Vec<Arc<Layout>>);

impl Default for Layouts {
    /// The standard layouts:
    /// - `4x4`: 16 tiles,
    /// - `5x5-corners`: 20 tiles, corners and center void,
    /// - `5x5-cross`: 21 tiles, the cells around the center void,
    /// - `5x5`: 25 tiles.
    fn default() -> Self {
        let layouts = [
            ("4x4", &LAYOUT_4X4[..]),
            ("5x5-corners", &LAYOUT_5X5_CORNERS[..]),
            ("5x5-cross", &LAYOUT_5X5_CROSS[..]),
            ("5x5", &LAYOUT_5X5[..]),
        ]
        .iter()
        .map(|&(name, rows)| Layout::from_strings(name, rows).expect("invalid standard layout"))
        .collect();
        Layouts::new(layouts)
    }
}

impl Layouts {
    /// Create a registry from `layouts`. When several layouts have the same number of
    /// tiles, the last one is kept.
    pub fn new(layouts: Vec<Layout>) -> Layouts {
        layouts
            .into_iter()
            .fold(Layouts(Vec::new()), Layouts::with_layout)
    }

    /// Add `layout`, replacing a layout with the same number of tiles.
    pub fn with_layout(mut self, layout: Layout) -> Layouts {
        self.0.retain(|l| l.tiles() != layout.tiles());
        self.0.push(Arc::new(layout));
        self
    }

    /// Select the layout with `tiles` playable cells.
    /// ## Errors
    /// `UnknownLayout` if no layout has that number of tiles.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Layouts, Error};
    /// let layouts = Layouts::default();
    /// assert_eq!(layouts.resolve(21)?.name(), "5x5-cross");
    /// assert!(layouts.resolve(17).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn resolve(&self, tiles: usize) -> Result<Arc<Layout>, Error> {
        self.0
            .iter()
            .find(|layout| layout.tiles() == tiles)
            .cloned()
            .ok_or(Error::UnknownLayout(tiles))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Layout>> {
        self.0.iter()
    }

    /// The accepted input lengths
    pub fn tile_counts(&self) -> Vec<usize> {
        self.0.iter().map(|layout| layout.tiles()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_default_layouts() -> Result<()> {
        let layouts = Layouts::default();
        assert_eq!(layouts.tile_counts(), vec![16, 20, 21, 25]);
        for layout in layouts.iter() {
            let playable = (0..layout.len())
                .filter(|&i| layout.cell(i) == Some(Playable))
                .count();
            assert_eq!(playable, layout.tiles(), "{}", layout.name());
            assert_eq!(layout.playable().count(), layout.tiles());
        }
        let corners = layouts.resolve(20)?;
        for &(row, col) in &[(0, 0), (0, 4), (2, 2), (4, 0), (4, 4)] {
            assert!(!corners.is_playable(row, col));
        }
        Ok(())
    }

    #[test]
    fn test_unknown_layout() {
        let layouts = Layouts::default();
        for &n in &[0, 1, 15, 17, 24, 26] {
            assert!(matches!(layouts.resolve(n), Err(Error::UnknownLayout(m)) if m == n));
        }
    }

    #[test]
    fn test_neighbors_exclude_void() -> Result<()> {
        let layout = Layouts::default().resolve(21)?;
        println!("{}", layout);
        // center is surrounded by voids on all orthogonal sides
        assert_eq!(layout.neighbors(2, 2), vec![(1, 1), (1, 3), (3, 1), (3, 3)]);
        assert!(layout.neighbors(0, 0).contains(&(1, 1)));
        assert!(!layout.neighbors(0, 1).contains(&(1, 2)));
        assert!(layout.neighbor_indices(7).is_empty());
        assert_eq!(layout.neighbor_indices(12), &[6, 8, 16, 18]);
        Ok(())
    }

    #[test]
    fn test_is_playable() -> Result<()> {
        let layout = Layouts::default().resolve(16)?;
        assert!(layout.is_playable(3, 3));
        assert!(!layout.is_playable(4, 0));
        assert!(!layout.is_playable(0, 4));
        assert_eq!(layout.neighbors(3, 3), vec![(2, 2), (2, 3), (3, 2)]);
        Ok(())
    }

    #[test]
    fn test_index_mapping() -> Result<()> {
        let layout = Layouts::default().resolve(20)?;
        for i in 0..layout.len() {
            let (row, col) = layout.coordinates(i).unwrap();
            assert_eq!(layout.linear_index(row, col), Some(i));
        }
        assert_eq!(layout.coordinates(25), None);
        assert_eq!(layout.linear_index(5, 0), None);
        assert_eq!(layout.letter_index(0), None);
        assert_eq!(layout.letter_index(1), Some(0));
        assert_eq!(layout.letter_index(5), Some(3));
        assert_eq!(layout.letter_index(12), None);
        assert_eq!(layout.letter_index(13), Some(10));
        assert_eq!(layout.letter_index(23), Some(19));
        assert_eq!(layout.letter_index(24), None);
        Ok(())
    }

    #[test]
    fn test_layout_from_strings() -> Result<()> {
        let rows = ["#..#", "....", "#..#"];
        let layout = Layout::from_strings("custom", &rows)?;
        assert_eq!((layout.width(), layout.height(), layout.tiles()), (4, 3, 8));
        assert_eq!(layout.to_strings(), rows);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidRowLength(\"...\", 3)")]
    fn test_invalid_row_length() {
        Layout::from_strings("bad", &["....", "..."]).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidLayoutSize { expected: 4, found: 3 }")]
    fn test_invalid_layout_size() {
        Layout::new("bad", 2, 2, vec![Playable; 3]).unwrap();
    }

    #[test]
    fn test_standard_layouts_parse() -> Result<()> {
        let expect = [
            (&LAYOUT_4X4[..], 16),
            (&LAYOUT_5X5_CORNERS[..], 20),
            (&LAYOUT_5X5_CROSS[..], 21),
            (&LAYOUT_5X5[..], 25),
        ];
        for &(rows, tiles) in &expect {
            assert_eq!(Layout::from_strings("standard", rows)?.tiles(), tiles);
        }
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidLayoutCell('x')")]
    fn test_invalid_cell() {
        Layout::from_strings("bad", &["..x"]).unwrap();
    }

    #[test]
    fn test_layout_limits() {
        let rows = ["......"; 6];
        assert!(matches!(
            Layout::from_strings("6x6", &rows),
            Err(Error::LayoutTooLarge(36))
        ));
        assert!(matches!(
            Layout::from_strings("voids", &["##", "##"]),
            Err(Error::EmptyLayout)
        ));
        let no_rows: [&str; 0] = [];
        assert!(matches!(
            Layout::from_strings("none", &no_rows),
            Err(Error::EmptyLayout)
        ));
    }

    #[test]
    fn test_with_layout_replaces() -> Result<()> {
        let ring = Layout::from_strings("ring", &["....", ".##.", "...."])?;
        let bar = Layout::from_strings("bar", &["..........", "##########"])?;
        let layouts = Layouts::default().with_layout(ring).with_layout(bar);
        assert_eq!(layouts.resolve(10)?.name(), "bar");
        assert_eq!(layouts.tile_counts(), vec![16, 20, 21, 25, 10]);
        Ok(())
    }
}
