use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{self, Filter, SortKey};
use crate::store::MemoStore;

pub fn run(store: &MemoStore, search: &str, filter: Filter, sort: SortKey) -> Result<CmdResult> {
    let listed = query::run(store.memos(), search, filter, sort)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_memos(listed))
}
