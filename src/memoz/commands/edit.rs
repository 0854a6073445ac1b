use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MemoPatch;
use crate::store::MemoStore;

use super::helpers::{not_found, title_or_untitled};

pub fn run(store: &mut MemoStore, id: u64, patch: MemoPatch) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    match store.update(id, patch) {
        Some(memo) => {
            let memo = memo.clone();
            result.add_message(CmdMessage::success(format!(
                "Memo updated ({}): {}",
                memo.id,
                title_or_untitled(&memo.title)
            )));
            result.affected_memos.push(memo);
        }
        None => result.add_message(not_found(id)),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;

    #[test]
    fn updates_title_and_content_independently() {
        let mut store = MemoStore::new();
        let id = create::run(&mut store, "Old".into(), "old body".into())
            .unwrap()
            .affected_memos[0]
            .id;

        run(&mut store, id, MemoPatch::title("New")).unwrap();
        assert_eq!(store.get(id).unwrap().title, "New");
        assert_eq!(store.get(id).unwrap().content, "old body");

        run(&mut store, id, MemoPatch::content("new body")).unwrap();
        assert_eq!(store.get(id).unwrap().content, "new body");
    }

    #[test]
    fn empty_patch_reports_info() {
        let mut store = MemoStore::new();
        let result = run(&mut store, 1, MemoPatch::default()).unwrap();
        assert!(result.messages[0].content.contains("Nothing to update"));
    }

    #[test]
    fn missing_id_warns() {
        let mut store = MemoStore::new();
        let result = run(&mut store, 7, MemoPatch::title("x")).unwrap();
        assert!(result.affected_memos.is_empty());
        assert!(result.messages[0].content.contains("No memo with id 7"));
    }
}
