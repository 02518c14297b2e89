//! Loading word lists into a [`TrieBuilder`].
//!
//! A word list is plain text with one word per line. Trailing whitespace
//! (including a `\r` from CRLF files) is trimmed, and blank lines and lines
//! starting with `#` are skipped. Words are taken as they are: the trie only
//! stores `'a'..='z'`, so a list must already be lowercase.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::trie::{Trie, TrieBuilder, TrieError};

/// How [`load_words`] treats lines it cannot insert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordListOptions {
    /// Skip (and count) words with symbols outside the alphabet instead of failing.
    pub skip_invalid: bool,
}

/// Counts gathered while loading a word list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Words that were new to the builder.
    pub inserted: usize,
    /// Words the builder already held.
    pub duplicates: usize,
    /// Words rejected and skipped under [`WordListOptions::skip_invalid`].
    pub skipped: usize,
}

/// Errors that can occur while loading a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the list failed.
    #[error("failed to read word list")]
    Io(#[from] io::Error),

    /// A line held a word the trie cannot store.
    #[error("line {line}: invalid word")]
    Word {
        /// 1-based line number.
        line: usize,
        /// Why the word was rejected.
        #[source]
        source: TrieError,
    },
}

/// Reads words from `reader` into `builder`, one per line.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if reading fails and [`LoadError::Word`] for the
/// first unusable word, unless `options.skip_invalid` is set.
pub fn load_words<R: BufRead>(
    mut reader: R,
    builder: &mut TrieBuilder,
    options: &WordListOptions,
) -> Result<LoadSummary, LoadError> {
    let mut summary = LoadSummary::default();

    // read_line into one buffer instead of lines() so each line reuses the
    // same allocation.
    let mut buf = String::with_capacity(80);
    let mut line = 0;
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line += 1;
        let word = buf.trim_end();
        if word.is_empty() || is_comment(word) {
            continue;
        }
        match builder.insert(word) {
            Ok(true) => summary.inserted += 1,
            Ok(false) => summary.duplicates += 1,
            Err(TrieError::InvalidSymbol { .. }) if options.skip_invalid => summary.skipped += 1,
            Err(source) => return Err(LoadError::Word { line, source }),
        }
    }
    Ok(summary)
}

/// Builds and seals a trie from the word list at `path`.
///
/// # Examples
///
/// ```no_run
/// use wordtrie::{build_trie_from_file, WordListOptions};
///
/// let options = WordListOptions { skip_invalid: true };
/// let trie = build_trie_from_file("words.txt", &options).unwrap();
/// assert!(trie.contains_word("boggle"));
/// ```
pub fn build_trie_from_file(
    path: impl AsRef<Path>,
    options: &WordListOptions,
) -> Result<Trie, LoadError> {
    let file = File::open(path)?;
    let mut builder = TrieBuilder::new();
    load_words(BufReader::new(file), &mut builder, options)?;
    Ok(builder.seal())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
