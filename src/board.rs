use crate::codec::{Codec, Label};
use crate::{Error, Layout, Path};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Letters placed on a [`Layout`].
///
/// The letters fill the playable cells in row-major order, void cells are skipped.
#[derive(Debug, Clone)]
pub struct Board {
    layout: Arc<Layout>,
    letters: Vec<Label>,
}

/// Display the board as rows of letters. Void cells show as "#".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = (0..self.layout.height())
            .map(|row| {
                (0..self.layout.width())
                    .map(|col| {
                        self.layout
                            .linear_index(row, col)
                            .and_then(|i| self.letter_at(i))
                            .map_or('#', |label| Codec.decode_label(label))
                            .to_string()
                    })
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Board {
    /// Place the letters of `input` on `layout`.
    /// ## Errors
    /// - `InvalidCharacter` if `input` contains anything but letters.
    /// - `InvalidInputLength` if the number of letters differs from the number of tiles.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Layouts, Error, Path};
    /// let layout = Layouts::default().resolve(16)?;
    /// let board = Board::new(layout, "catdwofoirdgnoas")?;
    /// assert_eq!(board.word(&Path::from(&[0, 1, 2][..])), "cat");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(layout: Arc<Layout>, input: &str) -> Result<Board, Error> {
        let letters = Codec.encode(input)?;
        if letters.len() != layout.tiles() {
            return Err(Error::InvalidInputLength {
                expected: layout.tiles(),
                found: letters.len(),
            });
        }
        Ok(Board { layout, letters })
    }

    /// Generate `tiles` random lowercase letters
    pub fn random_input<R: Rng>(rng: &mut R, tiles: usize) -> String {
        (0..tiles)
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect()
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// The letter labels, one per tile
    pub fn letters(&self) -> &[Label] {
        &self.letters
    }

    /// The letters as lowercase string
    pub fn input(&self) -> String {
        Codec.decode(&self.letters)
    }

    /// Return the letter on cell `index`, or None for a void cell or outside the grid.
    pub fn letter_at(&self, index: usize) -> Option<Label> {
        self.layout
            .letter_index(index)
            .and_then(|i| self.letters.get(i).copied())
    }

    /// The word spelled by `path`. Void cells are skipped.
    pub fn word(&self, path: &Path) -> String {
        path.iter()
            .filter_map(|&i| self.letter_at(i))
            .map(|label| Codec.decode_label(label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layouts;
    use rand::{rngs::StdRng, SeedableRng};

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_board() -> Result<()> {
        let layout = Layouts::default().resolve(16)?;
        let board = Board::new(layout, "CatdWofoirdgnoas")?;
        assert_eq!(board.input(), "catdwofoirdgnoas");
        assert_eq!(
            board.to_string(),
            "c a t d\nw o f o\ni r d g\nn o a s"
        );
        Ok(())
    }

    #[test]
    fn test_word_skips_void() -> Result<()> {
        let layout = Layouts::default().resolve(20)?;
        let board = Board::new(layout, "abcdefghijklmnopqrst")?;
        // row 0 is "#abc#", row 2 is "ij#kl"
        assert_eq!(board.letter_at(0), None);
        assert_eq!(board.word(&Path::from(&[1, 2, 3][..])), "abc");
        assert_eq!(board.word(&Path::from(&[11, 13][..])), "jk");
        assert_eq!(board.word(&Path::from(&[23][..])), "t");
        assert!(board.to_string().starts_with("# a b c #\nd e f g h\ni j # k l"));
        Ok(())
    }

    #[test]
    fn test_invalid_input() -> Result<()> {
        let layout = Layouts::default().resolve(16)?;
        assert!(matches!(
            Board::new(layout.clone(), "cat"),
            Err(Error::InvalidInputLength {
                expected: 16,
                found: 3
            })
        ));
        assert!(matches!(
            Board::new(layout, "catdwofoirdgnoa5"),
            Err(Error::InvalidCharacter { ch: '5', pos: 15 })
        ));
        Ok(())
    }

    #[test]
    fn test_random_input() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let input = Board::random_input(&mut rng, 25);
        assert_eq!(input.len(), 25);
        let board = Board::new(Layouts::default().resolve(25)?, &input)?;
        assert_eq!(board.input(), input);
        Ok(())
    }
}
