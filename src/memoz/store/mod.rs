//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`MemoStore`]: the authoritative in-memory collection of memos plus the
//!   monotonic id counter. It owns all mutation and maintains the record
//!   invariants (unique never-reused ids, `updated_at >= created_at`, new
//!   memos prepended). It never persists itself; the caller decides when a
//!   snapshot is written out.
//!
//! - [`StorageBackend`]: the key-value persistence abstraction the whole
//!   collection is serialized into as one blob. Backends:
//!   - [`fs::FileBackend`]: production storage, one JSON file per key
//!   - [`memory::MemoryBackend`]: in-memory, for tests
//!
//! Keeping persistence behind a trait keeps business logic decoupled from
//! where the blob lands and lets every test run without a filesystem.
//!
//! ## Not-found semantics
//!
//! Mutators targeting a nonexistent id are non-fatal no-ops: they return
//! `None` (or `false` for [`MemoStore::delete`]) and change nothing. The
//! command layer turns that into a user-visible warning, never an error.

use crate::error::Result;
use crate::model::{Color, Memo, MemoPatch, ToggleField};

pub mod fs;
pub mod memory;

/// Title suffix applied by [`MemoStore::duplicate`].
pub const COPY_SUFFIX: &str = " (copy)";

/// Abstract key-value persistence for the serialized memo collection.
pub trait StorageBackend {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The canonical memo collection. Single-threaded: every mutation runs to
/// completion before the next begins, so no locking happens here.
#[derive(Debug, Default)]
pub struct MemoStore {
    memos: Vec<Memo>,
    next_id: u64,
}

impl MemoStore {
    pub fn new() -> Self {
        Self {
            memos: Vec::new(),
            next_id: 1,
        }
    }

    /// The collection in stored (insertion-relevant) order. Display order is
    /// always derived by the query engine, never stored.
    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Memo> {
        self.memos.iter().find(|m| m.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Memo> {
        self.memos.iter_mut().find(|m| m.id == id)
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Creates a blank memo at the front of the collection.
    pub fn create(&mut self) -> &Memo {
        let id = self.alloc_id();
        self.memos.insert(0, Memo::new(id));
        &self.memos[0]
    }

    /// Copies an existing memo under a new id with both timestamps set to
    /// now and the title suffixed with [`COPY_SUFFIX`]. The copy is
    /// prepended like a freshly created memo.
    pub fn duplicate(&mut self, id: u64) -> Option<&Memo> {
        let source = self.get(id)?.clone();
        let new_id = self.alloc_id();
        let mut copy = Memo::new(new_id);
        copy.title = format!("{}{}", source.title, COPY_SUFFIX);
        copy.content = source.content;
        copy.tags = source.tags;
        copy.favorite = source.favorite;
        copy.pinned = source.pinned;
        copy.archived = source.archived;
        copy.color = source.color;
        self.memos.insert(0, copy);
        Some(&self.memos[0])
    }

    /// Applies a partial title/content patch and bumps `updated_at`.
    pub fn update(&mut self, id: u64, patch: MemoPatch) -> Option<&Memo> {
        let memo = self.get_mut(id)?;
        if let Some(title) = patch.title {
            memo.title = title;
        }
        if let Some(content) = patch.content {
            memo.content = content;
        }
        memo.touch();
        Some(memo)
    }

    /// Flips one of the boolean flags. The returned memo carries the new
    /// flag state, so a caller holding a selection can observe
    /// `archived == true` and drop it.
    pub fn toggle(&mut self, id: u64, field: ToggleField) -> Option<&Memo> {
        let memo = self.get_mut(id)?;
        match field {
            ToggleField::Pinned => memo.pinned = !memo.pinned,
            ToggleField::Favorite => memo.favorite = !memo.favorite,
            ToggleField::Archived => memo.archived = !memo.archived,
        }
        memo.touch();
        Some(memo)
    }

    /// Appends a tag. Idempotent: an already-present tag leaves the memo
    /// untouched, including its `updated_at`.
    pub fn add_tag(&mut self, id: u64, tag: &str) -> Option<&Memo> {
        let memo = self.get_mut(id)?;
        if !memo.tags.iter().any(|t| t == tag) {
            memo.tags.push(tag.to_string());
            memo.touch();
        }
        Some(memo)
    }

    /// Removes a tag if present; a missing tag is a no-op on the record.
    pub fn remove_tag(&mut self, id: u64, tag: &str) -> Option<&Memo> {
        let memo = self.get_mut(id)?;
        if let Some(pos) = memo.tags.iter().position(|t| t == tag) {
            memo.tags.remove(pos);
            memo.touch();
        }
        Some(memo)
    }

    /// Overwrites the color label; `None` clears it.
    pub fn set_color(&mut self, id: u64, color: Option<Color>) -> Option<&Memo> {
        let memo = self.get_mut(id)?;
        memo.color = color;
        memo.touch();
        Some(memo)
    }

    /// Removes a memo irreversibly. Returns whether one was found.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.memos.len();
        self.memos.retain(|m| m.id != id);
        self.memos.len() != before
    }

    /// Seeds the store from persisted data, recomputing the id counter as
    /// `max(id) + 1` (or 1 when empty). The counter never decreases.
    pub fn replace_all(&mut self, memos: Vec<Memo>) {
        let max_id = memos.iter().map(|m| m.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.memos = memos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoPatch;

    #[test]
    fn create_allocates_sequential_ids_and_prepends() {
        let mut store = MemoStore::new();
        let first = store.create().id;
        let second = store.create().id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        // Newest first in stored order.
        assert_eq!(store.memos()[0].id, 2);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut store = MemoStore::new();
        let id = store.create().id;
        assert!(store.delete(id));
        assert!(store.is_empty());
        let next = store.create().id;
        assert!(next > id);
    }

    #[test]
    fn create_then_delete_restores_size() {
        let mut store = MemoStore::new();
        store.create();
        let before = store.len();
        let id = store.create().id;
        assert!(store.delete(id));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut store = MemoStore::new();
        for _ in 0..5 {
            store.create();
        }
        store.delete(2);
        store.delete(4);
        store.create();
        store.duplicate(1);

        let mut ids: Vec<u64> = store.memos().iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn update_applies_partial_patch_and_touches() {
        let mut store = MemoStore::new();
        let id = store.create().id;
        store.update(id, MemoPatch::title("Hello")).unwrap();
        let memo = store.get(id).unwrap();
        assert_eq!(memo.title, "Hello");
        assert_eq!(memo.content, "");
        assert!(memo.updated_at >= memo.created_at);

        store.update(id, MemoPatch::content("Body")).unwrap();
        let memo = store.get(id).unwrap();
        assert_eq!(memo.title, "Hello");
        assert_eq!(memo.content, "Body");
    }

    #[test]
    fn update_missing_id_is_a_noop() {
        let mut store = MemoStore::new();
        assert!(store.update(99, MemoPatch::title("x")).is_none());
        assert!(store.toggle(99, ToggleField::Pinned).is_none());
        assert!(store.duplicate(99).is_none());
        assert!(!store.delete(99));
    }

    #[test]
    fn toggle_flips_each_flag() {
        let mut store = MemoStore::new();
        let id = store.create().id;
        assert!(store.toggle(id, ToggleField::Pinned).unwrap().pinned);
        assert!(!store.toggle(id, ToggleField::Pinned).unwrap().pinned);
        assert!(store.toggle(id, ToggleField::Favorite).unwrap().favorite);
        assert!(store.toggle(id, ToggleField::Archived).unwrap().archived);
    }

    #[test]
    fn add_tag_is_idempotent_and_preserves_order() {
        let mut store = MemoStore::new();
        let id = store.create().id;
        store.add_tag(id, "work");
        store.add_tag(id, "ideas");
        let touched = store.get(id).unwrap().updated_at;
        store.add_tag(id, "work");
        let memo = store.get(id).unwrap();
        assert_eq!(memo.tags, vec!["work", "ideas"]);
        assert_eq!(memo.updated_at, touched);
    }

    #[test]
    fn remove_tag_drops_only_the_named_tag() {
        let mut store = MemoStore::new();
        let id = store.create().id;
        store.add_tag(id, "work");
        store.add_tag(id, "ideas");
        store.remove_tag(id, "work");
        assert_eq!(store.get(id).unwrap().tags, vec!["ideas"]);
        // Removing an absent tag is a no-op, not an error.
        assert!(store.remove_tag(id, "gone").is_some());
    }

    #[test]
    fn set_color_overwrites_and_clears() {
        let mut store = MemoStore::new();
        let id = store.create().id;
        store.set_color(id, Some(Color::Green));
        assert_eq!(store.get(id).unwrap().color, Some(Color::Green));
        store.set_color(id, None);
        assert_eq!(store.get(id).unwrap().color, None);
    }

    #[test]
    fn duplicate_copies_fields_with_fresh_identity() {
        let mut store = MemoStore::new();
        let id = store.create().id;
        store.update(id, MemoPatch::title("X")).unwrap();
        store.add_tag(id, "work");
        store.toggle(id, ToggleField::Favorite);
        store.set_color(id, Some(Color::Pink));

        let copy = store.duplicate(id).unwrap().clone();
        assert_ne!(copy.id, id);
        assert_eq!(copy.title, "X (copy)");
        assert_eq!(copy.tags, vec!["work"]);
        assert!(copy.favorite);
        assert_eq!(copy.color, Some(Color::Pink));
        assert_eq!(copy.created_at, copy.updated_at);

        let source = store.get(id).unwrap();
        assert!(copy.created_at >= source.created_at);
        // The copy is prepended like a new memo.
        assert_eq!(store.memos()[0].id, copy.id);
    }

    #[test]
    fn replace_all_recomputes_id_counter() {
        let mut store = MemoStore::new();
        let mut a = Memo::new(4);
        a.title = "A".into();
        let b = Memo::new(9);
        a.touch();
        store.replace_all(vec![a, b]);

        assert_eq!(store.len(), 2);
        let id = store.create().id;
        assert_eq!(id, 10);
    }

    #[test]
    fn replace_all_with_empty_starts_counter_at_one() {
        let mut store = MemoStore::new();
        store.replace_all(Vec::new());
        assert_eq!(store.create().id, 1);
    }
}
