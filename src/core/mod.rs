//! Core domain types for Wordle
//!
//! The fundamental types of the game: validated words and the pure guess
//! evaluator. Everything here is deterministic and testable in isolation.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{WORD_LEN, Word, WordError};
