//! Game state and turn machine
//!
//! One `Game` value owns everything for a session: the board, the cursor,
//! the keyboard status, and the result. Frontends drive it with `Key`s and
//! tile selections, and render from the drained `GameEvent`s.

mod board;
mod events;
mod keyboard;
mod state;

pub use board::{Attempt, Board, Cursor, MAX_ATTEMPTS};
pub use events::{GameEvent, Key, MessageDuration};
pub use keyboard::{KEYBOARD_ROWS, KeyStatus};
pub use state::{Game, GameResult};
