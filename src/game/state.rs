//! Game state and turn machine
//!
//! Owns the board, cursor, keyboard status, and result for one game session.
//! The only mutations available to input handling are the operations defined
//! here; everything a frontend needs to draw comes out as `GameEvent`s.
//!
//! Rejected input (wrong key for the current state, typing past a full row,
//! anything after the game ended) is a silent no-op, not an error. The one
//! user-visible failure is submitting an incomplete row, which leaves the
//! state untouched and emits a transient message.

use super::board::{Board, Cursor, MAX_ATTEMPTS};
use super::events::{GameEvent, Key, MessageDuration};
use super::keyboard::KeyStatus;
use crate::core::{Feedback, WORD_LEN, Word};

/// Terminal outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Won,
    Lost,
}

/// One game session
pub struct Game {
    secret: Word,
    board: Board,
    cursor: Cursor,
    keys: KeyStatus,
    result: GameResult,
    history: Vec<(Word, Feedback)>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Start a new game with the given secret
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let mut game = Self {
            secret,
            board: Board::new(),
            cursor: Cursor::start(),
            keys: KeyStatus::new(),
            result: GameResult::InProgress,
            history: Vec::new(),
            events: Vec::new(),
        };
        game.emit_cursor();
        game
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn key_status(&self) -> &KeyStatus {
        &self.keys
    }

    #[inline]
    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    /// Submitted attempts with their feedback, in play order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Check whether the game accepts further input
    ///
    /// Winning jumps the cursor row to `MAX_ATTEMPTS`, so this is a single
    /// condition for both outcomes.
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.cursor.row >= MAX_ATTEMPTS
    }

    /// Dispatch a key press to the matching operation
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Letter(ch) => self.insert_letter(ch),
            Key::Backspace => self.delete_letter(),
            Key::Enter => self.submit_attempt(),
        }
    }

    /// Write a letter into the cursor slot and advance
    ///
    /// Silent no-op unless the game is accepting input, the character is an
    /// ASCII letter, and the row has room. Writes into the cursor column even
    /// when a tile selection moved it onto an occupied slot, overwriting it.
    pub fn insert_letter(&mut self, ch: char) {
        if self.is_finished() || !ch.is_ascii_alphabetic() {
            return;
        }
        if self.cursor.col >= WORD_LEN {
            return;
        }

        let letter = ch.to_ascii_lowercase();
        let (row, col) = (self.cursor.row, self.cursor.col);
        self.board.row_mut(row).set(col, Some(letter));
        self.events.push(GameEvent::TileUpdated {
            row,
            col,
            letter: Some(letter),
            filled: true,
        });

        self.cursor.col = (col + 1).min(WORD_LEN);
        self.emit_cursor();
    }

    /// Clear the slot before the cursor and step back
    ///
    /// Silent no-op at the start of a row or once the game is finished.
    pub fn delete_letter(&mut self) {
        if self.is_finished() || self.cursor.col == 0 {
            return;
        }

        self.cursor.col -= 1;
        let (row, col) = (self.cursor.row, self.cursor.col);
        self.board.row_mut(row).set(col, None);
        self.events.push(GameEvent::TileUpdated {
            row,
            col,
            letter: None,
            filled: false,
        });
        self.emit_cursor();
    }

    /// Submit the current row for evaluation
    ///
    /// An incomplete row emits a transient message and changes nothing.
    /// A complete row is evaluated against the secret: tile feedback and
    /// keyboard upgrades go out as events, then the turn advances, ending
    /// the game on a match or on the last row.
    pub fn submit_attempt(&mut self) {
        if self.is_finished() {
            return;
        }

        let row = self.cursor.row;
        let Some(guess) = self.board.row(row).word() else {
            self.emit_message("Incomplete word!", MessageDuration::SHORT);
            return;
        };

        let feedback = Feedback::evaluate(guess, self.secret);
        self.history.push((guess, feedback));
        self.events.push(GameEvent::RowEvaluated { row, feedback });

        for (letter, verdict) in guess.letters().zip(feedback.iter()) {
            if let Some(status) = self.keys.upgrade(letter, verdict) {
                self.events.push(GameEvent::KeyStatusChanged { letter, status });
            }
        }

        if guess == self.secret {
            self.result = GameResult::Won;
            // Block further attempts
            self.cursor.row = MAX_ATTEMPTS;
            self.finish("You got it!");
            return;
        }

        self.cursor.row += 1;
        self.cursor.col = 0;

        if self.cursor.row == MAX_ATTEMPTS {
            self.result = GameResult::Lost;
            let text = format!("Game over! The word was {}", self.secret.text().to_uppercase());
            self.finish(&text);
        } else {
            self.emit_cursor();
        }
    }

    /// Move the cursor within the current row
    ///
    /// Only honored for the row currently accepting input; anything else is
    /// ignored without error.
    pub fn select_tile(&mut self, row: usize, col: usize) {
        if self.is_finished() || row != self.cursor.row || col >= WORD_LEN {
            return;
        }

        self.cursor.col = col;
        self.emit_cursor();
    }

    /// Take all events emitted since the last drain, in order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build the shareable result grid
    ///
    /// A header like `Wordle 4/6` (`X/6` on a loss) followed by one emoji
    /// row per submitted attempt.
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = match self.result {
            GameResult::Won => self.history.len().to_string(),
            _ => "X".to_string(),
        };

        let mut text = format!("Wordle {score}/{MAX_ATTEMPTS}");
        for (_, feedback) in &self.history {
            text.push('\n');
            text.push_str(&feedback.to_emoji());
        }
        text
    }

    fn finish(&mut self, message: &str) {
        self.emit_message(message, MessageDuration::LONG);
        self.events.push(GameEvent::GameEnded {
            result: self.result,
            secret: self.secret,
            share_text: self.share_text(),
        });
    }

    fn emit_cursor(&mut self) {
        self.events.push(GameEvent::CursorMoved {
            row: self.cursor.row,
            col: self.cursor.col,
        });
    }

    fn emit_message(&mut self, text: &str, duration: MessageDuration) {
        self.events.push(GameEvent::Message {
            text: text.to_string(),
            duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    fn game(secret: &str) -> Game {
        Game::new(Word::new(secret).unwrap())
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.insert_letter(ch);
        }
    }

    fn submit_word(game: &mut Game, word: &str) {
        type_word(game, word);
        game.submit_attempt();
    }

    #[test]
    fn insert_fills_slot_and_advances() {
        let mut game = game("crane");
        game.insert_letter('s');

        assert_eq!(game.board().row(0).get(0), Some('s'));
        assert_eq!(game.cursor().col(), 1);
        assert_eq!(game.cursor().row(), 0);
    }

    #[test]
    fn insert_normalizes_to_lowercase() {
        let mut game = game("crane");
        game.insert_letter('S');
        assert_eq!(game.board().row(0).get(0), Some('s'));
    }

    #[test]
    fn insert_rejects_non_letters() {
        let mut game = game("crane");
        game.insert_letter('3');
        game.insert_letter(' ');
        game.insert_letter('!');

        assert_eq!(game.board().row(0).get(0), None);
        assert_eq!(game.cursor().col(), 0);
    }

    #[test]
    fn insert_past_full_row_is_noop() {
        let mut game = game("crane");
        type_word(&mut game, "slate");
        assert_eq!(game.cursor().col(), WORD_LEN);

        game.insert_letter('x');
        assert_eq!(game.cursor().col(), WORD_LEN);
        assert_eq!(game.board().row(0).word().unwrap().text(), "slate");
    }

    #[test]
    fn delete_clears_previous_slot() {
        let mut game = game("crane");
        type_word(&mut game, "sla");
        game.delete_letter();

        assert_eq!(game.cursor().col(), 2);
        assert_eq!(game.board().row(0).get(2), None);
        assert_eq!(game.board().row(0).get(1), Some('l'));
    }

    #[test]
    fn delete_at_row_start_is_noop() {
        let mut game = game("crane");
        game.delete_letter();
        assert_eq!(game.cursor().col(), 0);
    }

    #[test]
    fn incomplete_submit_changes_nothing() {
        let mut game = game("crane");
        type_word(&mut game, "sla");
        game.drain_events();

        game.submit_attempt();

        // Only a transient message, no state change
        let events = game.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            GameEvent::Message {
                duration: MessageDuration::SHORT,
                ..
            }
        ));
        assert_eq!(game.cursor().row(), 0);
        assert_eq!(game.cursor().col(), 3);
        assert_eq!(game.result(), GameResult::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn submit_advances_to_next_row() {
        let mut game = game("crane");
        submit_word(&mut game, "slate");

        assert_eq!(game.cursor().row(), 1);
        assert_eq!(game.cursor().col(), 0);
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn submit_emits_row_evaluated() {
        let mut game = game("crane");
        game.drain_events();
        submit_word(&mut game, "slate");

        let events = game.drain_events();
        let evaluated = events.iter().find_map(|event| match event {
            GameEvent::RowEvaluated { row, feedback } => Some((*row, *feedback)),
            _ => None,
        });

        let (row, feedback) = evaluated.expect("row should be evaluated");
        assert_eq!(row, 0);
        assert_eq!(
            feedback,
            Feedback::evaluate(Word::new("slate").unwrap(), Word::new("crane").unwrap())
        );
    }

    #[test]
    fn winning_guess_short_circuits() {
        let mut game = game("crane");
        submit_word(&mut game, "crane");

        assert_eq!(game.result(), GameResult::Won);
        assert!(game.is_finished());

        // Rows remained, but input is dead
        game.insert_letter('a');
        game.delete_letter();
        game.submit_attempt();
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn win_emits_game_ended_with_share_text() {
        let mut game = game("crane");
        submit_word(&mut game, "slate");
        game.drain_events();
        submit_word(&mut game, "crane");

        let events = game.drain_events();
        let ended = events.iter().find_map(|event| match event {
            GameEvent::GameEnded {
                result,
                secret,
                share_text,
            } => Some((*result, *secret, share_text.clone())),
            _ => None,
        });

        let (result, secret, share_text) = ended.expect("game should end");
        assert_eq!(result, GameResult::Won);
        assert_eq!(secret.text(), "crane");
        assert_eq!(share_text, "Wordle 2/6\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut game = game("crane");
        for _ in 0..MAX_ATTEMPTS {
            submit_word(&mut game, "slate");
        }

        assert_eq!(game.result(), GameResult::Lost);
        assert!(game.is_finished());
        assert_eq!(game.history().len(), MAX_ATTEMPTS);

        // Further input is a no-op
        game.insert_letter('a');
        game.submit_attempt();
        assert_eq!(game.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn loss_message_reveals_secret() {
        let mut game = game("crane");
        for _ in 0..MAX_ATTEMPTS {
            submit_word(&mut game, "slate");
        }

        let events = game.drain_events();
        let text = events
            .iter()
            .rev()
            .find_map(|event| match event {
                GameEvent::Message { text, duration } => {
                    assert_eq!(*duration, MessageDuration::LONG);
                    Some(text.clone())
                }
                _ => None,
            })
            .expect("loss should emit a message");
        assert!(text.contains("CRANE"));
    }

    #[test]
    fn loss_share_text_scores_x() {
        let mut game = game("crane");
        for _ in 0..MAX_ATTEMPTS {
            submit_word(&mut game, "slate");
        }

        assert!(game.share_text().starts_with("Wordle X/6\n"));
        assert_eq!(game.share_text().lines().count(), MAX_ATTEMPTS + 1);
    }

    #[test]
    fn key_status_accumulates_across_attempts() {
        let mut game = game("crane");
        submit_word(&mut game, "cable"); // c correct, a present, e correct
        assert_eq!(game.key_status().get('c'), Some(Verdict::Correct));
        assert_eq!(game.key_status().get('a'), Some(Verdict::Present));
        assert_eq!(game.key_status().get('b'), Some(Verdict::Absent));

        submit_word(&mut game, "about"); // a present again, never downgraded
        assert_eq!(game.key_status().get('c'), Some(Verdict::Correct));
        assert_eq!(game.key_status().get('a'), Some(Verdict::Present));
    }

    #[test]
    fn key_status_never_downgrades_from_correct() {
        let mut game = game("crane");
        submit_word(&mut game, "crabs"); // c, r, a all correct
        assert_eq!(game.key_status().get('a'), Some(Verdict::Correct));

        // A guess where A lands merely present must not downgrade the key
        submit_word(&mut game, "azure");
        assert_eq!(game.key_status().get('a'), Some(Verdict::Correct));
    }

    #[test]
    fn key_status_change_events_only_on_improvement() {
        let mut game = game("crane");
        submit_word(&mut game, "slate");
        game.drain_events();

        // Same guess again: every key already holds its best status
        submit_word(&mut game, "slate");
        let changes = game
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, GameEvent::KeyStatusChanged { .. }))
            .count();
        assert_eq!(changes, 0);
    }

    #[test]
    fn select_tile_moves_within_current_row() {
        let mut game = game("crane");
        type_word(&mut game, "sla");

        game.select_tile(0, 1);
        assert_eq!(game.cursor().col(), 1);

        // Overwrites the occupied slot and advances
        game.insert_letter('x');
        assert_eq!(game.board().row(0).get(1), Some('x'));
        assert_eq!(game.cursor().col(), 2);
    }

    #[test]
    fn select_tile_ignores_other_rows() {
        let mut game = game("crane");
        type_word(&mut game, "sl");

        game.select_tile(1, 0);
        game.select_tile(5, 3);
        assert_eq!(game.cursor().row(), 0);
        assert_eq!(game.cursor().col(), 2);

        game.select_tile(0, WORD_LEN); // out of range column
        assert_eq!(game.cursor().col(), 2);
    }

    #[test]
    fn handle_key_dispatches() {
        let mut game = game("crane");
        game.handle_key(Key::Letter('c'));
        game.handle_key(Key::Letter('r'));
        game.handle_key(Key::Backspace);
        assert_eq!(game.cursor().col(), 1);

        for ch in "rane".chars() {
            game.handle_key(Key::Letter(ch));
        }
        game.handle_key(Key::Enter);
        assert_eq!(game.result(), GameResult::Won);
    }

    #[test]
    fn new_game_emits_initial_cursor() {
        let mut game = game("crane");
        let events = game.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::CursorMoved { row: 0, col: 0 }]
        );
    }

    #[test]
    fn tile_events_carry_letter_and_fill_state() {
        let mut game = game("crane");
        game.drain_events();

        game.insert_letter('s');
        game.delete_letter();

        let events = game.drain_events();
        assert_eq!(
            events[0],
            GameEvent::TileUpdated {
                row: 0,
                col: 0,
                letter: Some('s'),
                filled: true,
            }
        );
        assert_eq!(
            events[2],
            GameEvent::TileUpdated {
                row: 0,
                col: 0,
                letter: None,
                filled: false,
            }
        );
    }
}
