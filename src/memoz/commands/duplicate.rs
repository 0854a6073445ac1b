use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MemoStore;

use super::helpers::{not_found, title_or_untitled};

pub fn run(store: &mut MemoStore, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.duplicate(id) {
        Some(copy) => {
            let copy = copy.clone();
            result.add_message(CmdMessage::success(format!(
                "Memo duplicated ({}): {}",
                copy.id,
                title_or_untitled(&copy.title)
            )));
            result.affected_memos.push(copy);
        }
        None => result.add_message(not_found(id)),
    }
    Ok(result)
}
