//! Word lists and secret selection
//!
//! The embedded answer list is compiled into the binary; a custom list can
//! be loaded from a file instead. Either way the list only seeds the
//! secret, one random draw per game; guesses are never checked against it.

mod embedded;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Pick a random secret from a word list
///
/// Returns `None` for an empty list.
#[must_use]
pub fn random_secret(words: &[Word]) -> Option<Word> {
    words.choose(&mut rand::rng()).copied()
}

/// Convert an embedded string slice to a Word vector
///
/// Entries that fail validation are skipped.
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load a word list from a file, one word per line
///
/// Blank lines and invalid entries are skipped, so a hand-edited list with
/// the odd stray line still loads.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect())
}
