//! Wordle - CLI
//!
//! Terminal Wordle game with TUI and simple CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_simple, score_guess},
    core::Word,
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::{ANSWERS, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: guess the secret 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Force the secret word instead of picking one at random
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Wordlist: 'builtin' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a single guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word to score against
        secret: String,
    },
}

/// Load the answer list based on the -w flag
///
/// Returns the embedded list for "builtin", otherwise loads from the path.
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "builtin" => Ok(words_from_slice(ANSWERS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let forced_secret = cli
        .secret
        .as_deref()
        .map(Word::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid secret word: {e}"))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&words, forced_secret)?;
            run_tui(app)
        }
        Commands::Simple => run_simple(&words, forced_secret).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { guess, secret } => {
            let result = score_guess(&guess, &secret).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
    }
}
