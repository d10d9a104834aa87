//! A letter-indexed prefix tree over lowercase words.
//!
//! The same structure backs the master dictionary and each found-word set.
//! Every node owns up to 26 children in a fixed array indexed by `letter - 'a'`,
//! so traversing slots in order visits words in lexicographic order and no sorting
//! is ever needed.
//!
//! ```
//! use wordgrid::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("cats")?;
//! index.insert("cat")?;
//!
//! assert!(index.is_word("cat"));
//! assert!(index.is_prefix("ca"));
//! assert!(!index.is_word("ca"));
//! assert_eq!(index.words().collect::<Vec<_>>(), vec!["cat", "cats"]);
//! # Ok::<(), wordgrid::errors::GridError>(())
//! ```

use crate::alphabet::{slot_to_letter, GridChar, ALPHABET_SIZE};
use crate::errors::GridError;
use log::{debug, info, warn};
use std::fmt;
use std::io;
use std::path::Path;

/// One letter position in the shared prefix space of all inserted words.
#[derive(Debug, Clone, Default)]
struct Node {
    /// `None` only for the root.
    letter: Option<char>,
    /// The path from the root to this node spells a stored word.
    is_word: bool,
    children: [Option<Box<Node>>; ALPHABET_SIZE],
}

impl Node {
    fn with_slot(slot: usize) -> Self {
        Node {
            letter: Some(slot_to_letter(slot)),
            ..Node::default()
        }
    }

    fn child(&self, c: char) -> Option<&Node> {
        self.children[c.letter_slot()?].as_deref()
    }

    fn word_count(&self) -> usize {
        let below: usize = self.children.iter().flatten().map(|child| child.word_count()).sum();
        below + usize::from(self.is_word)
    }
}

/// Counts reported by a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Tokens that were new words.
    pub inserted: usize,
    /// Tokens that were already stored.
    pub duplicates: usize,
    /// Tokens rejected because they contain characters outside a-z.
    pub skipped: usize,
}

/// Ordered, letter-indexed tree of lowercase words.
///
/// Cloning produces an independent deep copy.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    root: Node,
}

impl PrefixIndex {
    /// Create an empty index (root only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a whitespace-delimited word list from `path` and insert every token.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FileAccess`] if the file cannot be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let mut index = Self::new();
        index.load_from_path(path)?;
        Ok(index)
    }

    /// Insert `word`, returning `true` if it was not already stored.
    ///
    /// Inserting the same word twice is a no-op the second time.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyWord`] for `""` and [`GridError::InvalidWord`] for any character
    /// outside `a..=z`. The index is left untouched on error.
    pub fn insert(&mut self, word: &str) -> Result<bool, GridError> {
        if word.is_empty() {
            return Err(GridError::EmptyWord);
        }
        if let Some(invalid_char) = word.chars().find(|c| !c.is_grid_letter()) {
            return Err(GridError::InvalidWord { word: word.to_string(), invalid_char });
        }
        Ok(self.insert_validated(word))
    }

    /// Insert a word already known to be non-empty and within `a..=z`.
    pub(crate) fn insert_validated(&mut self, word: &str) -> bool {
        debug_assert!(
            !word.is_empty() && word.chars().all(|c| c.is_grid_letter()),
            "insert_validated called with {word:?}"
        );

        let mut node = &mut self.root;
        for c in word.chars() {
            let Some(slot) = c.letter_slot() else { return false };
            node = node.children[slot]
                .get_or_insert_with(|| Box::new(Node::with_slot(slot)))
                .as_mut();
        }

        let added = !node.is_word;
        node.is_word = true;
        added
    }

    /// Node reached by following `s` from the root, if every edge exists.
    fn find(&self, s: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in s.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// True iff `word` was previously inserted.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.is_word)
    }

    /// True iff some stored word begins with `prefix` (always true for `""`).
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Number of distinct stored words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.root.word_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.iter().all(Option::is_none) && !self.root.is_word
    }

    /// Lazily enumerate every stored word in ascending lexicographic order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![(&self.root, 0)],
            word: String::new(),
            root_pending: self.root.is_word,
        }
    }

    /// Write every stored word, one per line, in lexicographic order.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_words<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for word in self.words() {
            writeln!(out, "{word}")?;
        }
        Ok(())
    }

    /// Insert every whitespace-delimited token in `text`.
    ///
    /// Tokens are lowercased first; tokens that still contain characters outside
    /// `a..=z` are skipped and counted rather than aborting the load.
    pub fn extend_from_str(&mut self, text: &str) -> LoadSummary {
        let mut summary = LoadSummary::default();
        for token in text.split_whitespace() {
            self.absorb(token, &mut summary);
        }
        if summary.skipped > 0 {
            warn!("Skipped {} malformed word(s) while loading", summary.skipped);
        }
        summary
    }

    /// Native-only convenience method: read a word list from a file path and insert it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FileAccess`] if the file cannot be read. Nothing is
    /// inserted in that case.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary, GridError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| GridError::FileAccess {
            path: path_ref.display().to_string(),
            source,
        })?;

        let summary = self.extend_from_str(&data);
        info!(
            "Loaded {} words from '{}' ({} duplicates, {} skipped)",
            summary.inserted,
            path_ref.display(),
            summary.duplicates,
            summary.skipped
        );
        Ok(summary)
    }

    fn absorb(&mut self, token: &str, summary: &mut LoadSummary) {
        let word = token.to_ascii_lowercase();
        match self.insert(&word) {
            Ok(true) => summary.inserted += 1,
            Ok(false) => summary.duplicates += 1,
            Err(e) => {
                debug!("skipping {token:?}: {e}");
                summary.skipped += 1;
            }
        }
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        let mut summary = LoadSummary::default();
        for token in iter {
            self.absorb(token.as_ref(), &mut summary);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a PrefixIndex {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

impl fmt::Display for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words() {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Depth-first, a→z iterator over the words of a [`PrefixIndex`].
pub struct Words<'a> {
    /// (node, next child slot to try)
    stack: Vec<(&'a Node, usize)>,
    /// Letters from the root to the top of `stack`.
    word: String,
    root_pending: bool,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.root_pending {
            self.root_pending = false;
            return Some(String::new());
        }

        loop {
            let &(node, from) = self.stack.last()?;
            let next = (from..ALPHABET_SIZE)
                .find_map(|slot| node.children[slot].as_deref().map(|child| (slot, child)));

            match next {
                Some((slot, child)) => {
                    if let Some(top) = self.stack.last_mut() {
                        top.1 = slot + 1;
                    }
                    self.word.extend(child.letter);
                    self.stack.push((child, 0));
                    if child.is_word {
                        return Some(self.word.clone());
                    }
                }
                None => {
                    // the root contributes no letter, and `pop` on "" is harmless
                    self.stack.pop();
                    self.word.pop();
                }
            }
        }
    }
}
