//! TUI application state and event loop

use crate::core::{WORD_LEN, Word};
use crate::game::{Game, GameEvent, Key, MAX_ATTEMPTS, MessageDuration};
use crate::wordlists::random_secret;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// A transient on-screen message with its display deadline
pub struct ActiveMessage {
    pub text: String,
    deadline: Option<Instant>,
}

/// Application state
pub struct App<'a> {
    pub game: Game,
    words: &'a [Word],
    forced_secret: Option<Word>,
    pub message: Option<ActiveMessage>,
    pub share_text: Option<String>,
    pub should_quit: bool,
    /// Inner rect of the board grid from the last frame, for mouse hit-tests
    pub board_area: Option<Rect>,
}

impl<'a> App<'a> {
    /// Create the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be chosen (empty word list).
    pub fn new(words: &'a [Word], forced_secret: Option<Word>) -> Result<Self> {
        let secret = forced_secret
            .or_else(|| random_secret(words))
            .context("Word list is empty")?;

        let mut app = Self {
            game: Game::new(secret),
            words,
            forced_secret,
            message: None,
            share_text: None,
            should_quit: false,
            board_area: None,
        };
        app.process_events();
        Ok(app)
    }

    /// Start over with a fresh secret
    pub fn new_game(&mut self) {
        if let Some(secret) = self.forced_secret.or_else(|| random_secret(self.words)) {
            self.game = Game::new(secret);
            self.message = None;
            self.share_text = None;
            self.process_events();
        }
    }

    /// Apply drained game events to the display state
    ///
    /// Board, cursor, and keyboard contents are read straight from the game
    /// at render time; only messages and the final share grid need keeping.
    pub fn process_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::Message { text, duration } => {
                    let deadline = match duration {
                        MessageDuration::Millis(ms) => {
                            Some(Instant::now() + Duration::from_millis(ms))
                        }
                        MessageDuration::Indefinite => None,
                    };
                    self.message = Some(ActiveMessage { text, deadline });
                }
                GameEvent::GameEnded { share_text, .. } => {
                    self.share_text = Some(share_text);
                }
                _ => {}
            }
        }
    }

    /// Clear the message once its display time is up
    pub fn tick(&mut self) {
        if let Some(message) = &self.message
            && let Some(deadline) = message.deadline
            && Instant::now() >= deadline
        {
            self.message = None;
        }
    }

    /// Handle a mouse click at screen coordinates
    pub fn click(&mut self, x: u16, y: u16) {
        if let Some((row, col)) = self.hit_tile(x, y) {
            self.game.select_tile(row, col);
            self.process_events();
        }
    }

    /// Map screen coordinates to a board tile
    ///
    /// Tiles are 3 cells wide with a 1-cell gap, one board row per line,
    /// mirroring the rendering layout.
    fn hit_tile(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let area = self.board_area?;
        if x < area.x || y < area.y {
            return None;
        }

        let row = (y - area.y) as usize;
        let offset = (x - area.x) as usize;
        let col = offset / 4;
        let within_tile = offset % 4 < 3;

        (row < MAX_ATTEMPTS && col < WORD_LEN && within_tile).then_some((row, col))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &mut app))?;

        // Poll so expired messages clear without waiting for input
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (fixes Windows double-input bug)
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key_event(&mut app, key.code, key.modifiers);
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.click(mouse.column, mouse.row);
                    }
                }
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Global quit keys
    if code == KeyCode::Esc
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
    {
        app.should_quit = true;
        return;
    }

    if app.game.is_finished() {
        // Letters no longer feed the game; reuse them as menu keys
        match code {
            KeyCode::Char('n') => app.new_game(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    let cursor = app.game.cursor();
    match code {
        KeyCode::Char(ch) => app.game.handle_key(Key::Letter(ch)),
        KeyCode::Backspace => app.game.handle_key(Key::Backspace),
        KeyCode::Enter => app.game.handle_key(Key::Enter),
        KeyCode::Left => app
            .game
            .select_tile(cursor.row(), cursor.col().saturating_sub(1)),
        KeyCode::Right => app
            .game
            .select_tile(cursor.row(), (cursor.col() + 1).min(WORD_LEN - 1)),
        _ => {}
    }
    app.process_events();
}
