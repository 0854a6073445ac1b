use super::CmdMessage;

/// The standard non-fatal response to an operation targeting a memo that
/// does not exist.
pub fn not_found(id: u64) -> CmdMessage {
    CmdMessage::warning(format!("No memo with id {}", id))
}

/// Display title for memos whose title is empty.
pub fn title_or_untitled(title: &str) -> &str {
    if title.is_empty() {
        "Untitled memo"
    } else {
        title
    }
}
