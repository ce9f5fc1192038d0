use crate::error::Error;

/// Code 1..=26 for the letters `a`..`z`
pub type Label = u8;

const ASCII_LC: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Translate letters to labels and back.
///
/// Letters are case-insensitive: `a` and `A` both encode to label 1, `z` and `Z` to 26.
/// Any character that is not an ascii letter is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Codec;

impl Codec {
    /// Encode a single character.
    /// ## Errors
    /// If `ch` is not an ascii letter. `pos` is reported in the error.
    pub fn encode_char(&self, ch: char, pos: usize) -> Result<Label, Error> {
        if ch.is_ascii_alphabetic() {
            Ok(ch.to_ascii_lowercase() as u8 - b'a' + 1)
        } else {
            Err(Error::InvalidCharacter { ch, pos })
        }
    }

    /// Encode string, and return a list of labels.
    /// ## Errors
    /// An error is returned for the first character that is not a letter.
    /// ## Examples
    /// ```
    /// use boggle_solver::{Codec, Error};
    /// let labels = Codec.encode("azAZ")?;
    /// assert_eq!(labels, vec![1, 26, 1, 26]);
    /// assert!(Codec.encode("cat1").is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Label>, Error> {
        word.chars()
            .enumerate()
            .map(|(pos, ch)| self.encode_char(ch, pos))
            .collect()
    }

    /// Decode a single label to a lowercase letter, `?` if the label is not valid.
    pub fn decode_label(&self, label: Label) -> char {
        match label {
            1..=26 => ASCII_LC[label as usize - 1] as char,
            _ => '?',
        }
    }

    /// Decode labels to a lowercase string.
    pub fn decode(&self, labels: &[Label]) -> String {
        labels.iter().map(|&label| self.decode_label(label)).collect()
    }
}
