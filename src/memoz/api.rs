//! # API Facade
//!
//! [`MemoApi`] is the single entry point for every memoz operation,
//! regardless of the UI driving it. It owns the in-memory [`MemoStore`] and
//! a [`StorageBackend`], wires the two together, and keeps presentation
//! concerns out: no stdout, no stderr, no process exit. Structured
//! [`CmdResult`]s go back to the caller, which decides how to show them.
//!
//! ## Persistence discipline
//!
//! The store never saves itself. The facade persists the whole collection
//! after every mutating call, and a save failure is downgraded to a warning
//! message on the result: in-memory state stays authoritative and the
//! operation reads as successful to the user. The periodic autosaver (see
//! [`crate::autosave`]) re-issues full saves, so a transient storage outage
//! heals itself.
//!
//! ## Load path
//!
//! [`MemoApi::open`] reads the fixed storage key. When the key is absent,
//! unreadable, or holds an empty collection, the store is seeded with a
//! single pinned welcome memo and persisted immediately. The id counter is
//! recomputed from the loaded data.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Color, Memo, MemoPatch};
use crate::query::{Filter, SortKey};
use crate::store::{MemoStore, StorageBackend};
use std::path::Path;

/// The single key the whole memo collection is serialized under.
pub const STORAGE_KEY: &str = "memos-data";

const WELCOME_TITLE: &str = "Welcome!";
const WELCOME_CONTENT: &str = "# Welcome to memoz!\n\n## Highlights\n\n- Markdown preview\n- Pinning\n- Favorites\n- Color labels\n- Tags and search\n\n**memoz new** creates your first memo.";

pub struct MemoApi<B: StorageBackend> {
    store: MemoStore,
    backend: B,
    startup_messages: Vec<CmdMessage>,
}

impl<B: StorageBackend> MemoApi<B> {
    /// Loads the collection from the backend, seeding the welcome memo when
    /// nothing usable is stored. Never fails: storage trouble becomes a
    /// startup warning and an empty-but-seeded store.
    pub fn open(backend: B) -> Self {
        let mut api = Self {
            store: MemoStore::new(),
            backend,
            startup_messages: Vec::new(),
        };
        api.load();
        api
    }

    fn load(&mut self) {
        let loaded: Option<Vec<Memo>> = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(memos) => Some(memos),
                Err(e) => {
                    self.startup_messages.push(CmdMessage::warning(format!(
                        "Stored memos are unreadable, starting fresh: {}",
                        e
                    )));
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                self.startup_messages
                    .push(CmdMessage::warning(format!("Storage not available: {}", e)));
                None
            }
        };

        match loaded {
            Some(memos) if !memos.is_empty() => self.store.replace_all(memos),
            _ => self.seed_welcome(),
        }
    }

    fn seed_welcome(&mut self) {
        let id = self.store.create().id;
        self.store.update(
            id,
            MemoPatch {
                title: Some(WELCOME_TITLE.to_string()),
                content: Some(WELCOME_CONTENT.to_string()),
            },
        );
        self.store.add_tag(id, "ideas");
        self.store.toggle(id, crate::model::ToggleField::Pinned);
        self.store.set_color(id, Some(Color::Blue));

        if let Err(e) = self.persist() {
            self.startup_messages.push(CmdMessage::warning(format!(
                "Could not persist memos: {}",
                e
            )));
        }
    }

    /// Warnings collected while opening, for the UI to show once.
    pub fn take_startup_messages(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.startup_messages)
    }

    pub fn store(&self) -> &MemoStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serializes the entire collection into the backend.
    pub fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(self.store.memos())?;
        self.backend.set(STORAGE_KEY, &blob)
    }

    // Every mutation is followed by a save; failures are logged on the
    // result, never surfaced as errors.
    fn persist_logged(&mut self, result: &mut CmdResult) {
        if let Err(e) = self.persist() {
            result.add_message(CmdMessage::warning(format!(
                "Could not persist memos: {}",
                e
            )));
        }
    }

    pub fn create(&mut self, title: String, content: String) -> Result<CmdResult> {
        let mut result = commands::create::run(&mut self.store, title, content)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn duplicate(&mut self, id: u64) -> Result<CmdResult> {
        let mut result = commands::duplicate::run(&mut self.store, id)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn edit(&mut self, id: u64, patch: MemoPatch) -> Result<CmdResult> {
        let mut result = commands::edit::run(&mut self.store, id, patch)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn toggle_pin(&mut self, id: u64) -> Result<CmdResult> {
        let mut result = commands::toggle::pin(&mut self.store, id)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn toggle_favorite(&mut self, id: u64) -> Result<CmdResult> {
        let mut result = commands::toggle::favorite(&mut self.store, id)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn toggle_archive(&mut self, id: u64) -> Result<CmdResult> {
        let mut result = commands::toggle::archive(&mut self.store, id)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn add_tags(&mut self, id: u64, tags: &[String]) -> Result<CmdResult> {
        let mut result = commands::tags::add(&mut self.store, id, tags)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn remove_tags(&mut self, id: u64, tags: &[String]) -> Result<CmdResult> {
        let mut result = commands::tags::remove(&mut self.store, id, tags)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn set_color(&mut self, id: u64, color: Option<Color>) -> Result<CmdResult> {
        let mut result = commands::color::run(&mut self.store, id, color)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn delete(&mut self, id: u64) -> Result<CmdResult> {
        let mut result = commands::delete::run(&mut self.store, id)?;
        self.persist_logged(&mut result);
        Ok(result)
    }

    pub fn list(&self, search: &str, filter: Filter, sort: SortKey) -> Result<CmdResult> {
        commands::list::run(&self.store, search, filter, sort)
    }

    pub fn view(&self, id: u64) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self.store.get(id) {
            Some(memo) => result.affected_memos.push(memo.clone()),
            None => result.add_message(commands::helpers::not_found(id)),
        }
        Ok(result)
    }

    pub fn preview(&self, id: u64) -> Result<CmdResult> {
        commands::preview::run(&self.store, id)
    }

    pub fn export(&self, id: u64, dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, id, dir)
    }

    /// Explicit save-now, the Ctrl+S equivalent.
    pub fn save_now(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        match self.persist() {
            Ok(()) => result.add_message(CmdMessage::success("Memos saved.")),
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "Could not persist memos: {}",
                e
            ))),
        }
        result
    }
}
