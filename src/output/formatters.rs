//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use crate::game::{KEYBOARD_ROWS, KeyStatus};
use colored::{ColoredString, Colorize};

/// Render one guessed letter as a colored tile
fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green(),
        Verdict::Present => text.black().on_yellow(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// Format a guess as a row of colored tiles
#[must_use]
pub fn colored_guess(word: Word, feedback: Feedback) -> String {
    word.letters()
        .zip(feedback.iter())
        .map(|(letter, verdict)| tile(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the virtual keyboard as colored lines, one per key row
///
/// Keys with no status yet stay uncolored; absent keys are dimmed.
#[must_use]
pub fn keyboard_lines(keys: &KeyStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let line = row
                .chars()
                .map(|letter| {
                    let text = letter.to_ascii_uppercase().to_string();
                    match keys.get(letter) {
                        Some(Verdict::Correct) => text.black().on_green().to_string(),
                        Some(Verdict::Present) => text.black().on_yellow().to_string(),
                        Some(Verdict::Absent) => text.bright_black().to_string(),
                        None => text,
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            // Stagger the rows like a physical keyboard
            format!("{}{line}", " ".repeat(i))
        })
        .collect()
}
