//! Simple interactive CLI mode
//!
//! Line-based game without TUI: type a 5-letter word per turn and read the
//! colored feedback. The whole line is fed through the turn machine as key
//! presses, so the rules are exactly the core's.

use crate::core::Word;
use crate::game::{Game, GameEvent, GameResult, Key, MAX_ATTEMPTS};
use crate::output::formatters::{colored_guess, keyboard_lines};
use crate::wordlists::random_secret;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word list is empty or reading user input fails.
pub fn run_simple(words: &[Word], forced_secret: Option<Word>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("After each guess, every letter is colored:\n");
    println!("  - Green:  correct position");
    println!("  - Yellow: in the word, wrong position");
    println!("  - Gray:   not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = new_game(words, forced_secret)?;

    loop {
        let turn = game.history().len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = new_game(words, forced_secret)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        // Feed the line through the turn machine
        for ch in input.chars() {
            game.handle_key(Key::Letter(ch));
        }
        game.handle_key(Key::Enter);

        let mut finished = false;
        for event in game.drain_events() {
            match event {
                GameEvent::RowEvaluated { feedback, .. } => {
                    let (guess, _) = game.history().last().copied().expect("row was submitted");
                    println!("\n  {}   {}\n", colored_guess(guess, feedback), feedback.to_emoji());
                }
                // The end-of-game banner covers the terminal message
                GameEvent::Message { text, .. } if !game.is_finished() => {
                    println!("❌ {text}\n");
                }
                GameEvent::GameEnded { share_text, .. } => {
                    print_game_over(&game, &share_text);
                    finished = true;
                }
                _ => {}
            }
        }

        if finished {
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    game = new_game(words, forced_secret)?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        // An incomplete or over-long attempt leaves stray letters on the row;
        // clear them so the next line starts fresh
        while game.cursor().col() > 0 && game.result() == GameResult::InProgress {
            game.handle_key(Key::Backspace);
        }
        game.drain_events();

        if game.result() == GameResult::InProgress {
            for line in keyboard_lines(game.key_status()) {
                println!("  {line}");
            }
            println!();
        }
    }
}

fn new_game(words: &[Word], forced_secret: Option<Word>) -> Result<Game, String> {
    let secret = forced_secret
        .or_else(|| random_secret(words))
        .ok_or("Word list is empty")?;
    Ok(Game::new(secret))
}

fn print_game_over(game: &Game, share_text: &str) {
    use colored::Colorize;

    println!("{}", "═".repeat(64).bright_cyan());
    match game.result() {
        GameResult::Won => {
            let turns = game.history().len();
            let performance = match turns {
                1 => "🏆 Unbelievable!",
                2 => "⭐ Magnificent!",
                3 => "💫 Splendid!",
                4 => "✨ Great!",
                5 => "👍 Nice!",
                _ => "😅 Phew!",
            };
            println!(
                "  {} Solved in {} {}",
                performance.bright_yellow().bold(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        _ => {
            println!(
                "  {} The word was {}",
                "❌ Out of attempts!".red().bold(),
                game.secret().text().to_uppercase().bright_white().bold()
            );
        }
    }
    println!("{}", "═".repeat(64).bright_cyan());

    println!("\nShare your result:\n");
    for line in share_text.lines() {
        println!("  {line}");
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
