//! Wordle Grid - CLI
//!
//! Word-guessing puzzle with TUI and line-based modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_grid::{
    commands::{run_simple, score_guess},
    core::ScoringRule,
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, Session},
    output::print_score_result,
    share::Glyphs,
    wordlists::{Dictionary, WordSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_grid",
    about = "Guess the hidden word within a fixed number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of attempts per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Duplicate-letter scoring: membership (default) or multiplicity
    #[arg(short, long, global = true, default_value = "membership")]
    scoring: String,

    /// Share glyphs: emoji (default) or ascii
    #[arg(short, long, global = true, default_value = "emoji")]
    glyphs: String,

    /// Write logs to this file (without it, the TUI discards logs)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Where log lines end up
#[derive(Debug, PartialEq, Eq)]
enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Discard,
}

impl<'a> LogTarget<'a> {
    /// The TUI draws on the alternate screen, so stderr is off limits there
    const fn choose(log_file: Option<&'a Path>, tui: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if tui => Self::Discard,
            None => Self::Stderr,
        }
    }
}

/// Install the tracing subscriber
///
/// Filter comes from `RUST_LOG`, defaulting to warnings only. Without a log
/// file, output goes to stderr unless the TUI owns the terminal, in which
/// case it is dropped.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match LogTarget::choose(log_file, tui) {
        LogTarget::File(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| anyhow!(e))
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {path}"))?;
            Ok(Dictionary::from_words(words))
        }
    }
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let scoring = ScoringRule::from_name(&cli.scoring)
        .ok_or_else(|| anyhow!("Unknown scoring rule '{}'", cli.scoring))?;
    Ok(GameConfig::new(cli.max_attempts, scoring)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui = matches!(cli.command, None | Some(Commands::Play));
    init_logging(cli.log_file.as_deref(), tui)?;

    let config = game_config(&cli)?;
    let glyphs = Glyphs::from_name(&cli.glyphs)
        .ok_or_else(|| anyhow!("Unknown glyph set '{}'", cli.glyphs))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score { target, guess } => run_score_command(&target, &guess, config, &glyphs),
        Commands::Play => {
            let session = start_session(&cli.wordlist, config)?;
            run_play_command(session, glyphs)
        }
        Commands::Simple => {
            let mut session = start_session(&cli.wordlist, config)?;
            let stdin = std::io::stdin();
            run_simple(&mut session, &glyphs, stdin.lock(), std::io::stdout())
        }
    }
}

fn start_session(wordlist: &str, config: GameConfig) -> Result<Session> {
    let dictionary = load_dictionary(wordlist)?;
    info!(words = dictionary.len(), wordlist, "dictionary loaded");
    let session = Session::new(WordSource::new(dictionary), config)
        .context("Cannot start a game")?;
    Ok(session)
}

fn run_score_command(
    target: &str,
    guess: &str,
    config: GameConfig,
    glyphs: &Glyphs,
) -> Result<()> {
    let result = score_guess(target, guess, config.scoring())?;
    print_score_result(&result, glyphs);
    Ok(())
}

fn run_play_command(session: Session, glyphs: Glyphs) -> Result<()> {
    use wordle_grid::interactive::{App, run_tui};

    let app = App::new(session, glyphs);
    run_tui(app)
}
