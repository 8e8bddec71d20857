//! User notices
//!
//! Short titled messages reporting the outcome of each action, one per
//! action, with a kind that decides how prominently it is shown.

use std::fmt;

/// Kind of notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// Get the icon/prefix for this kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// ANSI color code used when the output is a terminal
    pub fn ansi_color(&self) -> &'static str {
        match self {
            Self::Info => "34",
            Self::Success => "32",
            Self::Warning => "33",
            Self::Error => "31",
        }
    }
}

/// A titled message shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, message)
    }

    /// Render with color escapes
    pub fn render_colored(&self) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.kind.ansi_color(), self)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.icon(), self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let notice = Notice::warning("Spend", "Amount exceeds the daily allowance");
        assert_eq!(
            notice.to_string(),
            "[!] Spend: Amount exceeds the daily allowance"
        );
    }

    #[test]
    fn test_colored_wraps_plain_text() {
        let notice = Notice::error("Error", "bad input");
        let colored = notice.render_colored();
        assert!(colored.starts_with("\x1b[31m"));
        assert!(colored.contains("[x] Error: bad input"));
        assert!(colored.ends_with("\x1b[0m"));
    }
}
