use crate::commands::CmdResult;
use crate::error::Result;
use crate::markdown;
use crate::store::MemoStore;

use super::helpers::not_found;

/// Renders a memo's content as an HTML fragment for preview. Read-only.
pub fn run(store: &MemoStore, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.get(id) {
        Some(memo) => {
            result = result
                .with_rendered_html(markdown::render(&memo.content))
                .with_affected_memos(vec![memo.clone()]);
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
    fn renders_memo_content() {
        let mut store = MemoStore::new();
        let id = create::run(&mut store, "Doc".into(), "# Heading\n\n- one".into())
            .unwrap()
            .affected_memos[0]
            .id;

        let result = run(&store, id).unwrap();
        let html = result.rendered_html.unwrap();
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<ul><li>one</li></ul>"));
    }

    #[test]
    fn missing_id_warns() {
        let store = MemoStore::new();
        let result = run(&store, 1).unwrap();
        assert!(result.rendered_html.is_none());
        assert!(result.messages[0].content.contains("No memo with id 1"));
    }
}
