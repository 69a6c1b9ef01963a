//! Guess evaluation
//!
//! `Feedback` is the per-letter verdict row for one submitted attempt,
//! computed by the standard two-pass rule so duplicate letters are never
//! credited more times than they occur in the secret.

use super::{WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Per-letter verdict for a guessed letter
///
/// Ordered `Absent < Present < Correct` so the keyboard's best-status-so-far
/// rule is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Letter does not occur in the secret (or all its occurrences are claimed)
    Absent,
    /// Letter occurs in the secret at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

/// Feedback for one submitted attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    verdicts: [Verdict; WORD_LEN],
}

impl Feedback {
    /// All correct (winning guess)
    pub const PERFECT: Self = Self {
        verdicts: [Verdict::Correct; WORD_LEN],
    };

    /// Evaluate `guess` against `secret`
    ///
    /// This implements Wordle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and claim one occurrence each
    /// 2. Second pass: mark Present while unclaimed occurrences remain,
    ///    left to right; everything else stays Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("canal").unwrap();
    /// let secret = Word::new("canto").unwrap();
    /// let feedback = Feedback::evaluate(guess, secret);
    ///
    /// // C A N correct; the second A has no unclaimed A left; L is absent
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     [
    ///         Verdict::Correct,
    ///         Verdict::Correct,
    ///         Verdict::Correct,
    ///         Verdict::Absent,
    ///         Verdict::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: Word, secret: Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LEN];
        let totals = secret.char_counts();
        let mut claimed: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: exact position matches
        // Allow: index needed to compare guess[i] with secret[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                verdicts[i] = Verdict::Correct;
                *claimed.entry(guess.char_at(i)).or_insert(0) += 1;
            }
        }

        // Second pass: wrong-position presence, bounded by unclaimed occurrences
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if verdicts[i] == Verdict::Correct {
                continue;
            }

            let letter = guess.char_at(i);
            let total = totals.get(&letter).copied().unwrap_or(0);
            let used = claimed.entry(letter).or_insert(0);
            if *used < total {
                verdicts[i] = Verdict::Present;
                *used += 1;
            }
        }

        Self { verdicts }
    }

    /// Get the verdict array
    #[inline]
    #[must_use]
    pub const fn verdicts(self) -> [Verdict; WORD_LEN] {
        self.verdicts
    }

    /// Get the verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict_at(self, position: usize) -> Verdict {
        self.verdicts[position]
    }

    /// Check if every letter was correct (winning guess)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::PERFECT
    }

    /// Iterate over the verdicts in position order
    pub fn iter(self) -> impl Iterator<Item = Verdict> {
        self.verdicts.into_iter()
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    ///
    /// Used for the share grid.
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.iter()
            .map(|verdict| match verdict {
                Verdict::Correct => '🟩',
                Verdict::Present => '🟨',
                Verdict::Absent => '⬜',
            })
            .collect()
    }
}
