//! # Memoz Architecture
//!
//! Memoz is a **UI-agnostic memo library**. This is not a CLI application
//! that happens to have some library code—it's a library that happens to
//! have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store, loads/seeds on open, saves after every   │
//! │    mutation (failures downgraded to warnings)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the MemoStore                   │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, query.rs, markdown.rs)                       │
//! │  - MemoStore: the authoritative collection + id counter     │
//! │  - query: pure filter/sort projection for display           │
//! │  - markdown: pure text → HTML preview transform             │
//! │  - StorageBackend trait: FileBackend (production),          │
//! │    MemoryBackend (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, store, query, markdown), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (the autosaver's best-effort stderr
//!   warning is the single, deliberate exception)
//! - **Never** calls `std::process::exit`
//!
//! This means the same core could serve a TUI, a web app, or any other UI.
//!
//! ## Concurrency Model
//!
//! Single-threaded and event-driven: every mutation runs to completion
//! before the next begins, so the store needs no locking. The only
//! asynchronous boundary is persistence—saves after mutations are
//! fire-and-forget (failures logged, never fatal), and [`autosave`] re-issues
//! a full save on a fixed interval for eventual self-healing.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The in-memory store and the persistence abstraction
//! - [`query`]: Display-order projection (filter, search, sort)
//! - [`markdown`]: The fixed-subset Markdown preview renderer
//! - [`model`]: Core data types (`Memo`, `Color`, `MemoPatch`)
//! - [`autosave`]: Periodic background save
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod autosave;
pub mod commands;
pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod query;
pub mod store;
