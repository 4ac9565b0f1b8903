//! System clipboard sink
//!
//! Pipes the result into the first clipboard command that accepts it.
//! Nothing is linked against a platform clipboard library; a tool that is
//! missing or exits with an error is skipped.

use super::ports::ShareSink;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// An external command that reads clipboard content from stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardTool {
    #[must_use]
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    fn copy(&self, text: &str) -> io::Result<bool> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        Ok(child.wait()?.success())
    }
}

/// Tools tried in order: macOS, Wayland, X11, Windows
pub const DEFAULT_TOOLS: &[ClipboardTool] = &[
    ClipboardTool::new("pbcopy", &[]),
    ClipboardTool::new("wl-copy", &[]),
    ClipboardTool::new("xclip", &["-selection", "clipboard"]),
    ClipboardTool::new("xsel", &["--clipboard", "--input"]),
    ClipboardTool::new("clip", &[]),
];

/// Sink that copies the result to the system clipboard
#[derive(Debug, Clone)]
pub struct ClipboardSink {
    tools: Vec<ClipboardTool>,
    used: Option<&'static str>,
}

impl ClipboardSink {
    #[must_use]
    pub fn new() -> Self {
        Self::with_tools(DEFAULT_TOOLS.to_vec())
    }

    #[must_use]
    pub const fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools, used: None }
    }

    /// Program that took the last successful copy
    #[must_use]
    pub const fn last_tool(&self) -> Option<&'static str> {
        self.used
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareSink for ClipboardSink {
    fn deliver(&mut self, text: &str) -> io::Result<()> {
        self.used = None;
        for tool in &self.tools {
            match tool.copy(text) {
                Ok(true) => {
                    debug!(tool = tool.program, "copied to clipboard");
                    self.used = Some(tool.program);
                    return Ok(());
                }
                Ok(false) => debug!(tool = tool.program, "clipboard tool failed"),
                Err(e) => debug!(tool = tool.program, error = %e, "clipboard tool unavailable"),
            }
        }
        warn!(tried = self.tools.len(), "no clipboard tool accepted the result");
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no clipboard tool available",
        ))
    }

    fn notice(&self) -> (&'static str, String) {
        let body = self.used.map_or_else(
            || "Result copied to the clipboard".to_string(),
            |tool| format!("Result copied to the clipboard via {tool}"),
        );
        ("Copied", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: ClipboardTool = ClipboardTool::new("wordle-grid-no-such-clipboard", &[]);

    #[test]
    fn missing_tools_report_not_found() {
        let mut sink = ClipboardSink::with_tools(vec![MISSING]);
        let err = sink.deliver("GGGGG").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(sink.last_tool(), None);
    }

    #[test]
    fn no_tools_is_an_error() {
        let mut sink = ClipboardSink::with_tools(Vec::new());
        assert!(sink.deliver("GGGGG").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn first_working_tool_wins() {
        let mut sink = ClipboardSink::with_tools(vec![
            MISSING,
            ClipboardTool::new("false", &[]),
            ClipboardTool::new("cat", &[]),
        ]);
        sink.deliver("GGGGG").unwrap();

        assert_eq!(sink.last_tool(), Some("cat"));
        assert_eq!(
            sink.notice(),
            ("Copied", "Result copied to the clipboard via cat".to_string())
        );
    }

    #[test]
    fn default_tools_cover_each_platform() {
        let programs: Vec<_> = ClipboardSink::new().tools.iter().map(|t| t.program).collect();
        assert_eq!(programs, ["pbcopy", "wl-copy", "xclip", "xsel", "clip"]);
    }
}
