//! Length-indexed word pool used as the search space for network expansion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, warn};

use crate::error::{LexinetError, Result};

/// Semantic length of a word: its number of Unicode scalar values.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Strip a single trailing line terminator (`\n`, `\r\n` or a lone `\r`).
///
/// Nothing else is touched: case, inner whitespace and trailing spaces survive.
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Words grouped into buckets keyed by their length.
///
/// Each word lives in exactly one bucket and appears there once, so duplicate
/// dictionary lines collapse into a single node.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    buckets: AHashMap<usize, AHashSet<String>>,
    word_count: usize,
}

/// A line that was skipped while loading a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line: usize,
    /// Why the line could not become a word.
    pub reason: String,
}

/// Result of loading a dictionary from a byte source.
#[derive(Debug, Clone)]
pub struct DictionaryLoad {
    pub index: WordIndex,
    pub skipped: Vec<SkippedLine>,
}

impl WordIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        WordIndex {
            buckets: AHashMap::new(),
            word_count: 0,
        }
    }

    /// Insert a word. Returns false for empty words and for duplicates.
    pub fn insert(&mut self, word: &str) -> bool {
        let len = word_len(word);
        if len == 0 {
            return false;
        }

        let inserted = self
            .buckets
            .entry(len)
            .or_default()
            .insert(word.to_string());
        if inserted {
            self.word_count += 1;
        }
        inserted
    }

    /// Build an index from a sequence of lines, one word per line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = WordIndex::new();
        for line in lines {
            index.insert(strip_line_terminator(line.as_ref()));
        }
        index
    }

    /// Build an index from a buffered byte source.
    ///
    /// Lines that are not valid UTF-8 are reported in
    /// [`DictionaryLoad::skipped`] and loading continues. Read failures abort
    /// the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<DictionaryLoad> {
        let mut index = WordIndex::new();
        let mut skipped = Vec::new();

        for (line_idx, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line_number = line_idx + 1;

            match String::from_utf8(bytes) {
                Ok(line) => {
                    index.insert(strip_line_terminator(&line));
                }
                Err(e) => {
                    let error = LexinetError::malformed_entry(line_number, e.to_string());
                    warn!("{error}; skipping");
                    skipped.push(SkippedLine {
                        line: line_number,
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Loaded {} unique words in {} length buckets ({} lines skipped)",
            index.len(),
            index.buckets.len(),
            skipped.len()
        );

        Ok(DictionaryLoad { index, skipped })
    }

    /// Load an index from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DictionaryLoad> {
        let path = path.as_ref();
        debug!("Reading dictionary from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Words of exactly the given length, if any.
    pub fn bucket(&self, len: usize) -> Option<&AHashSet<String>> {
        self.buckets.get(&len)
    }

    /// Check if a word exists in the index.
    pub fn contains(&self, word: &str) -> bool {
        self.bucket(word_len(word))
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Bucket keys in ascending order.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// `(length, word count)` pairs in ascending length order.
    pub fn bucket_sizes(&self) -> Vec<(usize, usize)> {
        self.lengths()
            .into_iter()
            .map(|len| (len, self.buckets[&len].len()))
            .collect()
    }
}
