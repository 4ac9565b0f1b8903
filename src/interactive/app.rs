//! TUI application state and logic

use crate::game::{GameState, Key, KeyOutcome, RowCommit, Session, Statistics};
use crate::output::{MessageLog, MessageStyle};
use crate::share::{ClipboardSink, Glyphs, ShareSink, share};
use crate::wordlists::DictionaryError;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, warn};

/// Keeps the last shared result on screen so it can be copied from the
/// terminal when no clipboard tool works
#[derive(Debug, Clone, Default)]
pub struct SharePanel {
    text: Option<String>,
}

impl SharePanel {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn clear(&mut self) {
        self.text = None;
    }
}

impl ShareSink for SharePanel {
    fn deliver(&mut self, text: &str) -> io::Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn notice(&self) -> (&'static str, String) {
        (
            "Shared",
            "No clipboard tool found, copy it from the Share panel".to_string(),
        )
    }
}

/// Application state
pub struct App<R = ThreadRng> {
    pub session: Session<R>,
    pub glyphs: Glyphs,
    pub messages: MessageLog,
    pub clipboard: ClipboardSink,
    pub share_panel: SharePanel,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>, glyphs: Glyphs) -> Self {
        let stats = Statistics::new(session.config().max_attempts());
        let mut app = Self {
            session,
            glyphs,
            messages: MessageLog::default(),
            clipboard: ClipboardSink::new(),
            share_panel: SharePanel::default(),
            stats,
            should_quit: false,
        };
        app.welcome();
        app
    }

    /// Replace the clipboard used for sharing
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: ClipboardSink) -> Self {
        self.clipboard = clipboard;
        self
    }

    fn welcome(&mut self) {
        let len = self.session.game().target().len();
        let attempts = self.session.config().max_attempts();
        self.messages.add(
            &format!("Guess the {len}-letter word in {attempts} tries."),
            MessageStyle::Info,
        );
        self.messages.add(
            "Type letters, Backspace to erase, Enter to submit.",
            MessageStyle::Info,
        );
    }

    /// Translate one terminal key press into game input or an app command
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let finished = self.session.game().state().is_terminal();

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game()?,
            KeyCode::Char('s') if ctrl => self.share_result(),
            // Letters do nothing once the game is over, so plain keys work
            KeyCode::Char('q') if finished => self.should_quit = true,
            KeyCode::Char('n') if finished => self.new_game()?,
            KeyCode::Char('s') if finished => self.share_result(),
            KeyCode::Char(c) if !ctrl => {
                if let Some(key) = Key::from_char(c) {
                    self.press(key);
                }
            }
            KeyCode::Backspace => self.press(Key::Clear),
            KeyCode::Enter => self.press(Key::Submit),
            _ => {}
        }
        Ok(())
    }

    /// Apply one game key and react to its outcome
    pub fn press(&mut self, key: Key) {
        let playing = self.session.game().state() == GameState::Playing;
        match self.session.apply_key(key) {
            KeyOutcome::Committed(commit) => {
                self.stats.record(&commit);
                self.announce(&commit);
            }
            KeyOutcome::Ignored if playing && key == Key::Submit => {
                let len = self.session.game().target().len();
                self.messages
                    .add(&format!("Not enough letters ({len} needed)"), MessageStyle::Error);
            }
            _ => {}
        }
    }

    fn announce(&mut self, commit: &RowCommit) {
        match commit.state {
            GameState::Playing => {}
            GameState::Won => {
                self.messages.add("Hurray! 🎉 You won!", MessageStyle::Success);
                self.messages.add(
                    "Press 's' to share, 'n' for a new game, 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            GameState::Lost => {
                let target = self.session.game().target().text().to_uppercase();
                self.messages.add(
                    &format!("Game over 😢 The word was {target}."),
                    MessageStyle::Error,
                );
                self.messages
                    .add("Press 'n' to try again or 's' to share.", MessageStyle::Info);
            }
        }
    }

    /// Discard the current game and start a new one
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no target word can be drawn.
    pub fn new_game(&mut self) -> Result<(), DictionaryError> {
        self.session.restart()?;
        self.messages.clear();
        self.share_panel.clear();
        self.messages.add("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Copy the finished game's result to the clipboard, falling back to
    /// the share panel
    pub fn share_result(&mut self) {
        if !self.session.game().state().is_terminal() {
            self.messages
                .add("Finish the game before sharing", MessageStyle::Error);
            return;
        }
        let grid = self.session.game().grid();
        let copied = share(grid, &self.glyphs, &mut self.clipboard, &mut self.messages);
        let Err(e) = copied else {
            self.share_panel.clear();
            return;
        };
        warn!(error = %e, "clipboard unavailable, showing share panel");

        if let Err(e) = share(grid, &self.glyphs, &mut self.share_panel, &mut self.messages) {
            error!(error = %e, "share failed");
            self.messages
                .add(&format!("Could not share: {e}"), MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "key pressed");
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::{Dictionary, WordSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(words: &[&str]) -> App<StdRng> {
        let source = WordSource::with_rng(Dictionary::from_slice(words), StdRng::seed_from_u64(9));
        let session = Session::new(source, GameConfig::default()).unwrap();
        App::new(session, Glyphs::ASCII).with_clipboard(ClipboardSink::with_tools(Vec::new()))
    }

    fn press(app: &mut App<StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App<StdRng>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_guess(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn last_message(app: &App<StdRng>) -> &str {
        &app.messages.entries().last().unwrap().text
    }

    #[test]
    fn keys_drive_the_grid() {
        let mut app = app(&["crane"]);
        press(&mut app, KeyCode::Char('T'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Backspace);

        let cursor = app.session.game().cursor();
        assert_eq!((cursor.row, cursor.cell), (0, 1));
        assert_eq!(app.session.game().grid().rows()[0].text(), "t");
    }

    #[test]
    fn short_submit_warns() {
        let mut app = app(&["crane"]);
        type_guess(&mut app, "cra");
        assert_eq!(last_message(&app), "Not enough letters (5 needed)");
        assert_eq!(app.session.game().grid().attempts_used(), 0);
    }

    #[test]
    fn win_records_stats_and_shares() {
        let mut app = app(&["crane"]);
        type_guess(&mut app, "trace");
        type_guess(&mut app, "crane");

        assert_eq!(app.session.game().state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.share_panel.text(), Some("-GGYG\nGGGGG"));
        assert_eq!(
            last_message(&app),
            "Shared: No clipboard tool found, copy it from the Share panel"
        );
    }

    #[cfg(unix)]
    #[test]
    fn share_prefers_the_clipboard() {
        use crate::share::ClipboardTool;

        let mut app = app(&["crane"]).with_clipboard(ClipboardSink::with_tools(vec![
            ClipboardTool::new("cat", &[]),
        ]));
        type_guess(&mut app, "crane");
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.share_panel.text(), None);
        assert_eq!(
            last_message(&app),
            "Copied: Result copied to the clipboard via cat"
        );
    }

    #[test]
    fn share_before_end_is_refused() {
        let mut app = app(&["crane"]);
        ctrl(&mut app, 's');
        assert_eq!(app.share_panel.text(), None);
        assert_eq!(last_message(&app), "Finish the game before sharing");
    }

    #[test]
    fn loss_reveals_target() {
        let mut app = app(&["crane"]);
        for word in ["trace", "slate", "fight", "mouse", "plumb", "dizzy"] {
            type_guess(&mut app, word);
        }
        assert_eq!(app.session.game().state(), GameState::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert!(
            app.messages
                .entries()
                .iter()
                .any(|m| m.text.contains("The word was CRANE"))
        );
    }

    #[test]
    fn new_game_after_finish_resets() {
        let mut app = app(&["crane"]);
        type_guess(&mut app, "crane");
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.session.game().state(), GameState::Playing);
        assert_eq!(app.session.game().grid().attempts_used(), 0);
        assert_eq!(app.share_panel.text(), None);
        assert_eq!(last_message(&app), "New game started!");
    }

    #[test]
    fn plain_n_is_a_letter_while_playing() {
        let mut app = app(&["crane"]);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.game().grid().rows()[0].text(), "n");
        assert_eq!(app.session.games_started(), 1);
    }

    #[test]
    fn ctrl_n_restarts_mid_game() {
        let mut app = app(&["crane"]);
        type_guess(&mut app, "trace");
        ctrl(&mut app, 'n');
        assert_eq!(app.session.game().grid().attempts_used(), 0);
        assert_eq!(app.session.games_started(), 2);
    }

    #[test]
    fn quit_keys() {
        let mut app = app(&["crane"]);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a letter while playing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
