//! Terminal output formatting
//!
//! Display utilities for the line-based front ends and the message log
//! shared with the TUI.

pub mod display;
pub mod formatters;
mod messages;

pub use display::{print_board, print_distribution, print_messages, print_score_result};
pub use messages::{Message, MessageLog, MessageStyle};
