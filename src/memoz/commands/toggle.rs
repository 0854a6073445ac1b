use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ToggleField;
use crate::store::MemoStore;

use super::helpers::{not_found, title_or_untitled};

pub fn pin(store: &mut MemoStore, id: u64) -> Result<CmdResult> {
    run(store, id, ToggleField::Pinned)
}

pub fn favorite(store: &mut MemoStore, id: u64) -> Result<CmdResult> {
    run(store, id, ToggleField::Favorite)
}

pub fn archive(store: &mut MemoStore, id: u64) -> Result<CmdResult> {
    run(store, id, ToggleField::Archived)
}

fn run(store: &mut MemoStore, id: u64, field: ToggleField) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(memo) = store.toggle(id, field) else {
        result.add_message(not_found(id));
        return Ok(result);
    };
    let memo = memo.clone();

    let verb = match field {
        ToggleField::Pinned if memo.pinned => "pinned",
        ToggleField::Pinned => "unpinned",
        ToggleField::Favorite if memo.favorite => "added to favorites",
        ToggleField::Favorite => "removed from favorites",
        ToggleField::Archived if memo.archived => "archived",
        ToggleField::Archived => "unarchived",
    };
    result.add_message(CmdMessage::success(format!(
        "Memo {} ({}): {}",
        verb,
        memo.id,
        title_or_untitled(&memo.title)
    )));

    // Archiving invalidates any selection the presentation layer holds on
    // this memo. Signaled here, acted on there.
    if field == ToggleField::Archived && memo.archived {
        result.selection_cleared = true;
    }
    result.affected_memos.push(memo);
    Ok(result)
}
