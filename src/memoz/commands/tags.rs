use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MemoStore;

use super::helpers::{not_found, title_or_untitled};

pub fn add(store: &mut MemoStore, id: u64, tags: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut last = None;
    for tag in tags {
        match store.add_tag(id, tag) {
            Some(memo) => {
                result.add_message(CmdMessage::success(format!(
                    "Tag '{}' added ({}): {}",
                    tag,
                    memo.id,
                    title_or_untitled(&memo.title)
                )));
                last = Some(memo.clone());
            }
            None => {
                result.add_message(not_found(id));
                return Ok(result);
            }
        }
    }
    result.affected_memos.extend(last);
    Ok(result)
}

pub fn remove(store: &mut MemoStore, id: u64, tags: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut last = None;
    for tag in tags {
        match store.remove_tag(id, tag) {
            Some(memo) => {
                result.add_message(CmdMessage::success(format!(
                    "Tag '{}' removed ({}): {}",
                    tag,
                    memo.id,
                    title_or_untitled(&memo.title)
                )));
                last = Some(memo.clone());
            }
            None => {
                result.add_message(not_found(id));
                return Ok(result);
            }
        }
    }
    result.affected_memos.extend(last);
    Ok(result)
}
