mod trievec;

use self::trievec::{Trie, TrieVec};
use crate::bitset::LabelSet;
use crate::codec::{Codec, Label};
use crate::Error;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::read_to_string;

/// Index of the root node in a `Wordlist`
pub const ROOT: usize = 0;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the possible words.
///
/// The trie is stored as a flat list of nodes in breadth-first order.
/// The children of a node are stored next to each other, so a node only
/// needs the index of its first child and the set of child labels. The index of
/// the child for a label is found by counting the labels below it in the set.
pub struct Wordlist {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and a `LabelSet` with the labels of all child nodes.
    pub nodes: Vec<(u32, LabelSet)>,
    /// List indicating terminal nodes
    pub terminal: Vec<bool>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
    /// The number of words in the wordlist
    pub word_count: usize,
    /// The number of nodes in the wordlist.
    pub node_count: usize,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.wordfile
        )
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::from(TrieVec::new())
    }
}

impl From<TrieVec<Label>> for Wordlist {
    fn from(trie: TrieVec<Label>) -> Self {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        // children of the nodes are numbered in the order they are queued
        let mut next = 1;
        let mut queue = VecDeque::new();
        queue.push_back(&trie);
        while let Some(node) = queue.pop_front() {
            let mut ls = LabelSet::new();
            for (label, t) in node.children() {
                ls.insert(*label);
                queue.push_back(t);
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((next as u32, ls));
            terminal.push(node.terminal());
            next += ls.len();
        }
        let node_count = nodes.len();
        Wordlist {
            nodes,
            terminal,
            wordfile: String::new(),
            word_count,
            node_count,
        }
    }
}

/// Builds a [`Wordlist`] one word at a time.
#[derive(Debug, Default)]
pub struct WordlistBuilder {
    trie: TrieVec<Label>,
}

impl WordlistBuilder {
    pub fn new() -> WordlistBuilder {
        WordlistBuilder::default()
    }

    /// Insert `word`, after converting it to lowercase.
    /// Returns `false` if the word was already present, or is empty.
    /// ## Errors
    /// If the word contains a character that is not a letter.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{WordlistBuilder, Error};
    /// let mut builder = WordlistBuilder::new();
    /// assert!(builder.insert("Cat")?);
    /// assert!(!builder.insert("cat")?);
    /// let wordlist = builder.build();
    /// assert!(wordlist.contains_word("CAT"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn insert(&mut self, word: &str) -> Result<bool, Error> {
        let labels = Codec.encode(word)?;
        if labels.is_empty() {
            return Ok(false);
        }
        Ok(self.trie.insert(&labels))
    }

    /// Returns true if `word` was inserted
    pub fn contains(&self, word: &str) -> bool {
        Codec
            .encode(word)
            .map_or(false, |labels| self.trie.has(&labels))
    }

    /// Returns true if an inserted word starts with `prefix`.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{WordlistBuilder, Error};
    /// let mut builder = WordlistBuilder::new();
    /// assert!(!builder.has_prefix(""));
    /// builder.insert("road")?;
    /// assert!(builder.has_prefix("Ro"));
    /// assert!(builder.has_prefix("road"));
    /// assert!(!builder.has_prefix("roads"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn has_prefix(&self, prefix: &str) -> bool {
        Codec
            .encode(prefix)
            .map_or(false, |labels| self.trie.has_prefix(&labels))
    }

    pub fn build(self) -> Wordlist {
        Wordlist::from(self.trie)
    }
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line. Empty lines are skipped.
    /// ## Errors
    /// Fails if the wordlist can not be read, or a word contains non-letters.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let mut builder = WordlistBuilder::new();
        read_to_string(wordfile)
            .map_err(|source| Error::ReadError {
                path: String::from(wordfile),
                source,
            })?
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .try_for_each(|word| builder.insert(word).map(|_| ()))?;
        let mut wordlist = builder.build();
        wordlist.wordfile = String::from(wordfile);
        debug!("loaded {}", wordlist);
        Ok(wordlist)
    }

    /// Build a wordlist from a list of words.
    /// ## Errors
    /// If a word contains a character that is not a letter.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Wordlist, Error};
    /// let wordlist = Wordlist::from_words(&["cat", "dog"])?;
    /// assert_eq!(wordlist.word_count, 2);
    /// assert!(wordlist.has_prefix("do"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Wordlist, Error> {
        let mut builder = WordlistBuilder::new();
        for word in words {
            builder.insert(word.as_ref())?;
        }
        Ok(builder.build())
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Wordlist, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut wordlist: Wordlist = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        wordlist.wordfile = String::from(wordfile);
        Ok(wordlist)
    }

    /// The root node, corresponding to the empty prefix.
    pub fn root(&self) -> usize {
        ROOT
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn child(&self, i: usize, label: Label) -> Option<usize> {
        let (start, labels) = &self.nodes[i];
        labels.index_of(label).map(|pos| *start as usize + pos)
    }

    /// Returns true if node `i` ends a word
    pub fn is_terminal(&self, i: usize) -> bool {
        self.terminal[i]
    }

    fn walk<K: AsRef<[Label]>>(&self, word: K) -> Option<usize> {
        word.as_ref()
            .iter()
            .try_fold(ROOT, |i, &label| self.child(i, label))
    }

    /// Returns true if `word` is in wordlist
    pub fn is_word<K: AsRef<[Label]>>(&self, word: K) -> bool {
        self.walk(word).map_or(false, |i| self.terminal[i])
    }

    /// Returns true if a word in the wordlist starts with `prefix`.
    pub fn has_prefix_labels<K: AsRef<[Label]>>(&self, prefix: K) -> bool {
        // every node except an empty root has a word below it
        self.word_count > 0 && self.walk(prefix).is_some()
    }

    /// Returns true if `word` is in the wordlist. The lookup is case-insensitive.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Wordlist, Error};
    /// let wordlist = Wordlist::from_words(&["boggle"])?;
    /// assert!(wordlist.contains_word("Boggle"));
    /// assert!(!wordlist.contains_word("bog"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn contains_word(&self, word: &str) -> bool {
        Codec
            .encode(word)
            .map_or(false, |labels| self.is_word(labels))
    }

    /// Returns true if some word in the wordlist starts with `prefix`, including
    /// the word `prefix` itself. The lookup is case-insensitive.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        Codec
            .encode(prefix)
            .map_or(false, |labels| self.has_prefix_labels(labels))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS).unwrap()
    }

    fn label(ch: char) -> Label {
        Codec.encode_char(ch, 0).unwrap()
    }

    #[test]
    fn test_layout() {
        let wordlist = test_wordlist();
        println!("{:?}", wordlist);
        assert_eq!(wordlist.word_count, 11);
        assert_eq!(wordlist.node_count, 17);
        assert_eq!(wordlist.child(ROOT, label('a')), Some(1));
        assert_eq!(wordlist.child(ROOT, label('b')), Some(2));
        assert_eq!(wordlist.child(ROOT, label('c')), None);
        assert_eq!(wordlist.child(1, label('a')), Some(3));
        assert_eq!(wordlist.child(1, label('l')), Some(6));
    }

    #[test]
    fn test_terminal() {
        let wordlist = test_wordlist();
        assert!(wordlist.is_terminal(4));
        assert!(!wordlist.is_terminal(ROOT));
        assert!(!wordlist.is_terminal(1));
    }

    #[test]
    fn test_contains_word() {
        let wordlist = test_wordlist();
        for &word in WORDS {
            assert!(wordlist.contains_word(word), "missing '{}'", word);
            assert!(wordlist.contains_word(&word.to_uppercase()));
        }
        for &word in &["a", "b", "aa", "be", "belts", "ba", "", "a1", "zz"] {
            assert!(!wordlist.contains_word(word), "unexpected '{}'", word);
        }
    }

    #[test]
    fn test_has_prefix() {
        let wordlist = test_wordlist();
        for &word in WORDS {
            for n in 0..=word.len() {
                assert!(wordlist.has_prefix(&word[..n]), "'{}'", &word[..n]);
            }
        }
        for &prefix in &["c", "bb", "belts", "aal", "a!"] {
            assert!(!wordlist.has_prefix(prefix), "unexpected '{}'", prefix);
        }
    }

    #[test]
    fn test_empty() {
        let wordlist = Wordlist::default();
        assert_eq!(wordlist.word_count, 0);
        assert_eq!(wordlist.node_count, 1);
        assert!(!wordlist.has_prefix(""));
        assert!(!wordlist.contains_word(""));
        let wordlist = Wordlist::from_words(&[""]).unwrap();
        assert_eq!(wordlist.word_count, 0);
    }

    #[test]
    fn test_insert_idempotent() -> Result<(), Error> {
        let once = Wordlist::from_words(&["bel", "belt"])?;
        let twice = Wordlist::from_words(&["bel", "belt", "BEL", "belt"])?;
        assert_eq!(once.word_count, twice.word_count);
        assert_eq!(once.node_count, twice.node_count);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidCharacter")]
    fn test_invalid_word() {
        Wordlist::from_words(&["don't"]).unwrap();
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join("boggle_solver_test_from_file.txt");
        std::fs::write(&path, "cat\n  Dog \n\nbird\n").unwrap();
        let wordlist = Wordlist::from_file(path.to_str().unwrap())?;
        assert_eq!(wordlist.word_count, 3);
        assert!(wordlist.contains_word("dog"));
        assert!(wordlist.to_string().contains("3 words"));
        Ok(())
    }

    #[test]
    fn test_builder_agrees_with_wordlist() -> Result<(), Error> {
        let mut builder = WordlistBuilder::new();
        for word in WORDS {
            builder.insert(word)?;
        }
        let prefixes = ["", "a", "aa", "be", "bel", "belt", "belts", "c", "bb", "a!"];
        let contains: Vec<bool> = prefixes.iter().map(|p| builder.contains(p)).collect();
        let has_prefix: Vec<bool> = prefixes.iter().map(|p| builder.has_prefix(p)).collect();
        let wordlist = builder.build();
        for (i, prefix) in prefixes.iter().enumerate() {
            assert_eq!(contains[i], wordlist.contains_word(prefix), "'{}'", prefix);
            assert_eq!(has_prefix[i], wordlist.has_prefix(prefix), "'{}'", prefix);
        }
        Ok(())
    }

    #[test]
    fn test_read_error() {
        let err = Wordlist::from_file("no/such/wordfile.txt").unwrap_err();
        assert!(matches!(err, Error::ReadError { .. }));
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[test]
    fn test_deserialize_from() -> Result<(), Error> {
        let path = std::env::temp_dir().join("boggle_solver_test_wordlist.bin");
        let file = std::fs::File::create(&path).unwrap();
        bincode::serialize_into(file, &test_wordlist()).unwrap();
        let wordlist = Wordlist::deserialize_from(path.to_str().unwrap())?;
        assert_eq!(wordlist.node_count, 17);
        assert!(wordlist.contains_word("belt"));
        let err = Wordlist::deserialize_from("no/such/wordfile.bin").unwrap_err();
        assert!(matches!(err, Error::ReadError { .. }));
        Ok(())
    }
}
