//! One-shot guess scoring
//!
//! Evaluates a single guess against a secret without running a game.

use crate::core::{Feedback, Word};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    Ok(ScoreResult {
        guess,
        secret,
        feedback: Feedback::evaluate(guess, secret),
    })
}
