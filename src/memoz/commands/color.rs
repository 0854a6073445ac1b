use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Color;
use crate::store::MemoStore;

use super::helpers::{not_found, title_or_untitled};

pub fn run(store: &mut MemoStore, id: u64, color: Option<Color>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.set_color(id, color) {
        Some(memo) => {
            let memo = memo.clone();
            let message = match color {
                Some(c) => format!(
                    "Color set to {} ({}): {}",
                    c,
                    memo.id,
                    title_or_untitled(&memo.title)
                ),
                None => format!(
                    "Color cleared ({}): {}",
                    memo.id,
                    title_or_untitled(&memo.title)
                ),
            };
            result.add_message(CmdMessage::success(message));
            result.affected_memos.push(memo);
        }
        None => result.add_message(not_found(id)),
    }
    Ok(result)
}
