use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed color palette a memo can be labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .copied()
            .ok_or_else(|| format!("Unknown color: {}", s))
    }
}

/// A single memo record. Serialized field names match the on-disk blob
/// (camelCase, ISO-8601 timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: u64,
    pub title: String,
    pub content: String,
    // Insertion order preserved, no duplicates (enforced by MemoStore).
    pub tags: Vec<String>,
    pub favorite: bool,
    pub pinned: bool,
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    /// A blank memo with default field values and both timestamps set to now.
    pub fn new(id: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            favorite: false,
            pinned: false,
            archived: false,
            color: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A partial update to a memo's editable text fields.
#[derive(Debug, Clone, Default)]
pub struct MemoPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl MemoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// The three boolean flags a memo can have toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleField {
    Pinned,
    Favorite,
    Archived,
}

impl fmt::Display for ToggleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleField::Pinned => write!(f, "pinned"),
            ToggleField::Favorite => write!(f, "favorite"),
            ToggleField::Archived => write!(f, "archived"),
        }
    }
}
