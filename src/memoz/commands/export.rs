use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemozError, Result};
use crate::model::Memo;
use crate::store::MemoStore;
use std::fs;
use std::path::Path;

use super::helpers::not_found;

/// Writes a memo as a plain-text file `{title or "memo"}.txt` under `dir`.
pub fn run(store: &MemoStore, id: u64, dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(memo) = store.get(id) else {
        result.add_message(not_found(id));
        return Ok(result);
    };

    let path = dir.join(format!("{}.txt", export_stem(&memo.title)));
    fs::write(&path, payload(memo)).map_err(MemozError::Io)?;

    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

/// The export payload: title as a level-1 heading, blank line, raw content.
fn payload(memo: &Memo) -> String {
    format!("# {}\n\n{}", memo.title, memo.content)
}

fn export_stem(title: &str) -> String {
    let safe = sanitize_filename(title);
    if safe.is_empty() {
        "memo".to_string()
    } else {
        safe
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;

    #[test]
    fn writes_titled_payload() {
        let mut store = MemoStore::new();
        let id = create::run(&mut store, "Notes".into(), "body text".into())
            .unwrap()
            .affected_memos[0]
            .id;

        let dir = tempfile::tempdir().unwrap();
        let result = run(&store, id, dir.path()).unwrap();
        let path = result.export_path.unwrap();
        assert_eq!(path.file_name().unwrap(), "Notes.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "# Notes\n\nbody text");
    }

    #[test]
    fn untitled_memo_exports_as_memo_txt() {
        let mut store = MemoStore::new();
        let id = create::run(&mut store, String::new(), "x".into())
            .unwrap()
            .affected_memos[0]
            .id;

        let dir = tempfile::tempdir().unwrap();
        let result = run(&store, id, dir.path()).unwrap();
        assert_eq!(result.export_path.unwrap().file_name().unwrap(), "memo.txt");
    }

    #[test]
    fn filename_is_sanitized() {
        assert_eq!(export_stem("a/b\\c"), "a_b_c");
        assert_eq!(export_stem("  "), "memo");
        assert_eq!(export_stem("Plain Title"), "Plain Title");
    }

    #[test]
    fn missing_id_writes_nothing() {
        let store = MemoStore::new();
        let dir = tempfile::tempdir().unwrap();
        let result = run(&store, 8, dir.path()).unwrap();
        assert!(result.export_path.is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
