//! Display functions for command results

use super::formatters::colored_guess;
use crate::commands::ScoreResult;
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}   {}\n",
        colored_guess(result.guess, result.feedback),
        result.feedback.to_emoji()
    );

    if result.feedback.is_win() {
        println!("{}", "✅ A winning guess!".green().bold());
    }
}
