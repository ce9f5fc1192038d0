/// An ordered tree to manage a set of keys. It can answer whether it contains a given key,
/// or a key starting with a given prefix.
///
/// Keys are any values that can be converted to a slice of alphabets (type `T`).
/// The code for `TrieVec` is borrowed from the [`louds`](https://github.com/ajalab/louds) crate.
pub trait Trie<T> {
    /// Returns `true` if the trie contains `key`.
    fn has<K: AsRef<[T]>>(&self, key: K) -> bool;

    /// Returns `true` if the trie contains a key that starts with `prefix`.
    fn has_prefix<K: AsRef<[T]>>(&self, prefix: K) -> bool;
}

/// Naive trie implementation supporting dynamic insertion.
/// Used to build a [`Wordlist`](crate::Wordlist).
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }
    /// The children of this node, ordered by label.
    pub fn children(&self) -> &Vec<(T, Box<Self>)> {
        &self.children
    }
    pub fn terminal(&self) -> bool {
        self.terminal
    }
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && !self.terminal
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    /// Insert `key`, return `true` if it was not yet present.
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) -> bool {
        let mut t = self;
        for c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c.clone(), Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        let added = !t.terminal;
        t.terminal = true;
        added
    }

    fn find<K: AsRef<[T]>>(&self, key: K) -> Option<&TrieVec<T>> {
        let mut t = self;
        for c in key.as_ref() {
            let pos = t.children.binary_search_by(|(c2, _)| c2.cmp(c)).ok()?;
            t = &t.children[pos].1;
        }
        Some(t)
    }
}

impl<T: Ord + Clone> Trie<T> for TrieVec<T> {
    fn has<K: AsRef<[T]>>(&self, key: K) -> bool {
        self.find(key).map_or(false, |t| t.terminal)
    }

    fn has_prefix<K: AsRef<[T]>>(&self, prefix: K) -> bool {
        self.find(prefix).map_or(false, |t| !t.is_empty())
    }
}
