use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memoz")]
#[command(about = "Markdown-aware command-line memo pad", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the memo data (defaults to MEMOZ_HOME or the
    /// user data dir)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Plain output: no colors
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new memo
    #[command(alias = "n")]
    New {
        /// Title of the memo
        #[arg(required = false)]
        title: Option<String>,

        /// Content of the memo
        #[arg(required = false, allow_hyphen_values = true)]
        content: Option<String>,
    },

    /// List memos
    #[command(alias = "ls")]
    List {
        /// Search term (matches title and content, case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Filter: all, favorites, pinned, archived
        #[arg(short, long)]
        filter: Option<String>,

        /// Sort key: updated, created, title
        #[arg(long)]
        sort: Option<String>,
    },

    /// Print a memo's raw title and content
    #[command(alias = "v")]
    View {
        /// Id of the memo
        id: u64,
    },

    /// Render a memo's content as an HTML preview fragment
    #[command(alias = "pv")]
    Preview {
        /// Id of the memo
        id: u64,
    },

    /// Update a memo's title and/or content
    #[command(alias = "e")]
    Edit {
        /// Id of the memo
        id: u64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Duplicate a memo
    Dup {
        /// Id of the memo
        id: u64,
    },

    /// Toggle pinned on a memo
    #[command(alias = "p")]
    Pin {
        /// Id of the memo
        id: u64,
    },

    /// Toggle favorite on a memo
    #[command(alias = "f")]
    Fav {
        /// Id of the memo
        id: u64,
    },

    /// Toggle archived on a memo
    Archive {
        /// Id of the memo
        id: u64,
    },

    /// Add one or more tags to a memo
    Tag {
        /// Id of the memo
        id: u64,

        /// Tags to add
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove one or more tags from a memo
    Untag {
        /// Id of the memo
        id: u64,

        /// Tags to remove
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Set or clear a memo's color label
    Color {
        /// Id of the memo
        id: u64,

        /// Color name (red, orange, yellow, green, blue, purple, pink)
        color: Option<String>,

        /// Clear the color label
        #[arg(long, conflicts_with = "color")]
        clear: bool,
    },

    /// Delete a memo permanently
    #[command(alias = "rm")]
    Delete {
        /// Id of the memo
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export a memo as a plain-text file
    Export {
        /// Id of the memo
        id: u64,

        /// Target directory (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Save the collection now
    Save,

    /// Get or set configuration
    Config {
        /// Configuration key (default-filter, default-sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
