//! Interactive TUI interface
//!
//! A ratatui front end over the game engine.

mod app;
mod rendering;

pub use app::{App, SharePanel, run_tui};
