//! Virtual keyboard status
//!
//! Tracks the best verdict ever achieved for each letter across all submitted
//! attempts. The status only improves; a letter shown green never falls back
//! to yellow or gray.

use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Letter rows of the virtual keyboard, top to bottom
///
/// Frontends append their own Enter/Backspace keys.
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best verdict achieved so far per letter
///
/// Unseen letters have no status at all, which the frontends render as an
/// untouched key.
#[derive(Debug, Clone, Default)]
pub struct KeyStatus {
    best: FxHashMap<char, Verdict>,
}

impl KeyStatus {
    /// Create an empty status map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current status of a letter
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        self.best.get(&letter).copied()
    }

    /// Apply a verdict under the monotonic max rule
    ///
    /// Returns the new status if it improved, `None` if the letter already
    /// had an equal or better one.
    pub(crate) fn upgrade(&mut self, letter: char, verdict: Verdict) -> Option<Verdict> {
        match self.best.get(&letter) {
            Some(&current) if current >= verdict => None,
            _ => {
                self.best.insert(letter, verdict);
                Some(verdict)
            }
        }
    }
}
