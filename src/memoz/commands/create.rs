use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MemoPatch;
use crate::store::MemoStore;

use super::helpers::title_or_untitled;

pub fn run(store: &mut MemoStore, title: String, content: String) -> Result<CmdResult> {
    let blank = store.create().clone();
    let patch = MemoPatch {
        title: if title.is_empty() { None } else { Some(title) },
        content: if content.is_empty() {
            None
        } else {
            Some(content)
        },
    };
    let memo = if patch.is_empty() {
        blank
    } else {
        store.update(blank.id, patch).cloned().unwrap_or(blank)
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Memo created ({}): {}",
        memo.id,
        title_or_untitled(&memo.title)
    )));
    Ok(result.with_affected_memos(vec![memo]))
}
