use crate::model::Memo;
use std::path::PathBuf;

pub mod color;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod list;
pub mod preview;
pub mod tags;
pub mod toggle;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_memos: Vec<Memo>,
    pub listed_memos: Vec<Memo>,
    pub rendered_html: Option<String>,
    pub export_path: Option<PathBuf>,
    /// Set when an operation archived the memo the presentation layer may be
    /// holding as its current selection.
    pub selection_cleared: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_memos(mut self, memos: Vec<Memo>) -> Self {
        self.affected_memos = memos;
        self
    }

    pub fn with_listed_memos(mut self, memos: Vec<Memo>) -> Self {
        self.listed_memos = memos;
        self
    }

    pub fn with_rendered_html(mut self, html: String) -> Self {
        self.rendered_html = Some(html);
        self
    }
}
