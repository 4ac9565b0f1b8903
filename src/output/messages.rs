//! Rolling log of player-facing messages

use crate::share::Notifier;

/// How many messages are kept
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

/// The most recent messages, oldest first
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn add(&mut self, text: &str, style: MessageStyle) {
        self.entries.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last few messages
        if self.entries.len() > MAX_MESSAGES {
            self.entries.remove(0);
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Remove and return every message
    pub fn drain(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.entries)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Notifier for MessageLog {
    fn notify(&mut self, title: &str, body: &str) {
        self.add(&format!("{title}: {body}"), MessageStyle::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_five() {
        let mut log = MessageLog::default();
        for i in 0..8 {
            log.add(&i.to_string(), MessageStyle::Info);
        }
        let texts: Vec<&str> = log.entries().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["3", "4", "5", "6", "7"]);
    }

    #[test]
    fn notify_adds_success_message() {
        let mut log = MessageLog::default();
        log.notify("Copied", "ready");
        assert_eq!(
            log.entries(),
            &[Message {
                text: "Copied: ready".to_string(),
                style: MessageStyle::Success,
            }]
        );
    }

    #[test]
    fn drain_empties_log() {
        let mut log = MessageLog::default();
        log.add("hello", MessageStyle::Error);
        assert_eq!(log.drain().len(), 1);
        assert!(log.entries().is_empty());
    }
}
