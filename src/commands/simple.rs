//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is typed into the grid and
//! submitted.

use crate::game::{GameState, Key, KeyOutcome, RowCommit, Session, Statistics};
use crate::output::{MessageLog, MessageStyle, print_board, print_distribution, print_messages};
use crate::share::{Glyphs, WriterSink, share};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// target word cannot be drawn.
pub fn run_simple<R, I, O>(
    session: &mut Session<R>,
    glyphs: &Glyphs,
    input: I,
    mut out: O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut log = MessageLog::default();
    let mut stats = Statistics::new(session.config().max_attempts());

    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║            W O R D L E   G R I D         ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    print_help(&mut out, session.game().target().len())?;
    print_board(&mut out, session.game())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}: ", "Guess".bright_cyan())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = line?.trim().to_lowercase();

        match command.as_str() {
            "" => continue,
            ":quit" | ":q" => break,
            ":help" | ":h" => print_help(&mut out, session.game().target().len())?,
            ":new" | ":n" => {
                session.restart()?;
                log.add("New game started!", MessageStyle::Info);
                print_board(&mut out, session.game())?;
            }
            ":share" | ":s" => {
                if session.game().state().is_terminal() {
                    let mut sink = WriterSink::new(&mut out);
                    share(session.game().grid(), glyphs, &mut sink, &mut log)?;
                } else {
                    log.add("Finish the game before sharing", MessageStyle::Error);
                }
            }
            word => {
                if session.game().state().is_terminal() {
                    log.add(
                        "Game over. Type :new to play again or :quit to exit.",
                        MessageStyle::Info,
                    );
                } else if let Some(commit) = submit_word(session, word, &mut log) {
                    stats.record(&commit);
                    announce(session, &commit, &mut log);
                    print_board(&mut out, session.game())?;
                }
            }
        }

        print_messages(&mut out, &log.drain())?;
    }

    if stats.total_games > 0 {
        writeln!(out)?;
        writeln!(
            out,
            "Played {} | Won {} | Win rate {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )?;
        print_distribution(&mut out, &stats.guess_distribution)?;
    }
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Type a whole word into the active row and submit it
fn submit_word<R: Rng>(
    session: &mut Session<R>,
    word: &str,
    log: &mut MessageLog,
) -> Option<RowCommit> {
    let len = session.game().target().len();
    if word.chars().count() != len || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        log.add(&format!("Enter a {len}-letter word"), MessageStyle::Error);
        return None;
    }

    while session.apply_key(Key::Clear) != KeyOutcome::Ignored {}
    for c in word.chars() {
        session.apply_key(Key::Letter(c));
    }

    match session.apply_key(Key::Submit) {
        KeyOutcome::Committed(commit) => Some(commit),
        outcome => {
            debug!(?outcome, "submit did not commit");
            None
        }
    }
}

fn announce<R: Rng>(session: &Session<R>, commit: &RowCommit, log: &mut MessageLog) {
    match commit.state {
        GameState::Playing => {}
        GameState::Won => {
            log.add("🎉 You won!", MessageStyle::Success);
            log.add(
                "Type :share to share your result or :new to play again.",
                MessageStyle::Info,
            );
        }
        GameState::Lost => {
            log.add(
                &format!(
                    "😢 Game over. The word was {}.",
                    session.game().target().text().to_uppercase()
                ),
                MessageStyle::Error,
            );
            log.add(
                "Type :share to share your result or :new to try again.",
                MessageStyle::Info,
            );
        }
    }
}

fn print_help<W: Write>(out: &mut W, len: usize) -> std::io::Result<()> {
    writeln!(out, "Guess the hidden {len}-letter word.")?;
    writeln!(out, "  - {} right letter, right spot", " A ".black().on_green())?;
    writeln!(out, "  - {} letter elsewhere in the word", " A ".black().on_yellow())?;
    writeln!(out, "  - {} letter not in the word", " A ".white().on_bright_black())?;
    writeln!(out, "Commands: :new, :share, :help, :quit")
}
