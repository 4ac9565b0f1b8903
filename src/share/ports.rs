//! Outbound ports for sharing
//!
//! The engine never touches a clipboard or a dialog. Front ends pass in a
//! [`ShareSink`] that receives the encoded text and a [`Notifier`] that tells
//! the player it happened.

use super::{Glyphs, encode};
use crate::game::Grid;
use std::io::{self, Write};
use tracing::info;

/// Receives an encoded result (clipboard, file, terminal, ...)
pub trait ShareSink {
    /// # Errors
    /// Returns an I/O error if the text could not be delivered.
    fn deliver(&mut self, text: &str) -> io::Result<()>;

    /// Title and body of the notice shown after a successful delivery
    fn notice(&self) -> (&'static str, String) {
        ("Shared", "Your result is ready".to_string())
    }
}

/// Presents a short notice to the player
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str);
}

/// Sink that writes the text, followed by a newline, to any writer
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ShareSink for WriterSink<W> {
    fn deliver(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    fn notice(&self) -> (&'static str, String) {
        ("Shared", "Result printed above".to_string())
    }
}

/// Encode the grid, hand it to `sink`, then notify the player
///
/// Returns the encoded text.
///
/// # Errors
/// Returns the sink's error; the notifier is not called in that case.
pub fn share<S, N>(
    grid: &Grid,
    glyphs: &Glyphs,
    sink: &mut S,
    notifier: &mut N,
) -> io::Result<String>
where
    S: ShareSink + ?Sized,
    N: Notifier + ?Sized,
{
    let text = encode(grid, glyphs);
    sink.deliver(&text)?;
    info!(rows = text.lines().count(), "result shared");
    let (title, body) = sink.notice();
    notifier.notify(title, &body);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Game, GameConfig, Key};

    #[derive(Default)]
    struct Recorder {
        notices: Vec<(String, String)>,
    }

    impl Notifier for Recorder {
        fn notify(&mut self, title: &str, body: &str) {
            self.notices.push((title.to_string(), body.to_string()));
        }
    }

    struct BrokenSink;

    impl ShareSink for BrokenSink {
        fn deliver(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::other("clipboard unavailable"))
        }
    }

    fn won_game() -> Game {
        let mut game = Game::new(Word::new("cat").unwrap(), &GameConfig::default());
        for c in "cat".chars() {
            game.apply_key(Key::Letter(c));
        }
        game.apply_key(Key::Submit);
        game
    }

    #[test]
    fn share_delivers_then_notifies() {
        let game = won_game();
        let mut sink = WriterSink::new(Vec::new());
        let mut notifier = Recorder::default();

        let text = share(game.grid(), &Glyphs::ASCII, &mut sink, &mut notifier).unwrap();

        assert_eq!(text, "GGG");
        assert_eq!(sink.into_inner(), b"GGG\n");
        assert_eq!(notifier.notices.len(), 1);
        assert_eq!(
            notifier.notices[0],
            ("Shared".to_string(), "Result printed above".to_string())
        );
    }

    #[test]
    fn failed_delivery_skips_notice() {
        let game = won_game();
        let mut notifier = Recorder::default();

        let result = share(game.grid(), &Glyphs::ASCII, &mut BrokenSink, &mut notifier);

        assert!(result.is_err());
        assert!(notifier.notices.is_empty());
    }
}
