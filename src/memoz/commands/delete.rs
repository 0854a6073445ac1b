use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MemoStore;

use super::helpers::not_found;

/// Removes a memo irreversibly. The explicit user confirmation required
/// before a delete is a presentation concern; by the time this runs, the
/// caller has already confirmed.
pub fn run(store: &mut MemoStore, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.delete(id) {
        result.add_message(CmdMessage::success(format!("Memo deleted ({})", id)));
        result.selection_cleared = true;
    } else {
        result.add_message(not_found(id));
    }
    Ok(result)
}
