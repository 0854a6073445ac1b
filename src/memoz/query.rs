//! # Query Engine
//!
//! Pure projection of the memo collection into a display order. Given a
//! search string, an active filter and a sort key, [`run`] returns references
//! into the store's collection, never copies and never mutates.
//!
//! Ordering rules:
//! - Pinned memos always sort before unpinned ones, regardless of sort key.
//! - Within each partition the sort key breaks ties: `updated` and `created`
//!   newest-first, `title` ascending (case-folded).
//! - The sort is stable: memos with equal keys keep their relative collection
//!   order, so repeated evaluation of an unchanged store yields identical
//!   output.

use crate::model::Memo;
use std::cmp::Ordering;
use std::str::FromStr;

/// Which memos are eligible for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
    Pinned,
    Archived,
}

impl Filter {
    fn matches(&self, memo: &Memo) -> bool {
        match self {
            Filter::All => !memo.archived,
            Filter::Favorites => memo.favorite && !memo.archived,
            Filter::Pinned => memo.pinned && !memo.archived,
            Filter::Archived => memo.archived,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Filter::All => "all",
            Filter::Favorites => "favorites",
            Filter::Pinned => "pinned",
            Filter::Archived => "archived",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "favorites" => Ok(Filter::Favorites),
            "pinned" => Ok(Filter::Pinned),
            "archived" => Ok(Filter::Archived),
            other => Err(format!("Unknown filter: {}", other)),
        }
    }
}

/// Secondary ordering, applied within the pinned/unpinned partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Updated,
    Created,
    Title,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::Updated => "updated",
            SortKey::Created => "created",
            SortKey::Title => "title",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "updated" => Ok(SortKey::Updated),
            "created" => Ok(SortKey::Created),
            "title" => Ok(SortKey::Title),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

fn matches_search(memo: &Memo, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    memo.title.to_lowercase().contains(needle) || memo.content.to_lowercase().contains(needle)
}

fn compare(a: &Memo, b: &Memo, sort: SortKey) -> Ordering {
    // Pinned-first is the primary key for every sort.
    match (a.pinned, b.pinned) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    match sort {
        SortKey::Updated => b.updated_at.cmp(&a.updated_at),
        SortKey::Created => b.created_at.cmp(&a.created_at),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Projects the collection into display order. Read-only: the returned
/// references borrow from `memos` and must not outlive it.
pub fn run<'a>(memos: &'a [Memo], search: &str, filter: Filter, sort: SortKey) -> Vec<&'a Memo> {
    let needle = search.to_lowercase();
    let mut selected: Vec<&Memo> = memos
        .iter()
        .filter(|m| filter.matches(m) && matches_search(m, &needle))
        .collect();

    // sort_by is stable, so equal keys keep collection order.
    selected.sort_by(|a, b| compare(a, b, sort));
    selected
}
