//! Listed Email Rows

use serde::{Deserialize, Serialize};

/// One row of the inbox list.
///
/// Display strings are opaque. The view flags (`selected`, `archived`,
/// `filtered_out`) only live for the page view and are never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedItem {
    pub id: u32,
    pub sender: String,
    pub subject: String,
    pub preview: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub important: bool,
    #[serde(skip)]
    pub selected: bool,
    /// Hidden by the archive action
    #[serde(skip)]
    pub archived: bool,
    /// Hidden by the current search query
    #[serde(skip)]
    pub filtered_out: bool,
}

impl ListedItem {
    pub fn new(id: u32, sender: &str, subject: &str, preview: &str) -> Self {
        Self {
            id,
            sender: sender.to_string(),
            subject: subject.to_string(),
            preview: preview.to_string(),
            time: String::new(),
            unread: false,
            starred: false,
            important: false,
            selected: false,
            archived: false,
            filtered_out: false,
        }
    }

    pub fn unread(mut self) -> Self {
        self.unread = true;
        self
    }

    pub fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    pub fn is_visible(&self) -> bool {
        !self.archived && !self.filtered_out
    }

    /// Case-insensitive substring match on sender, subject and preview.
    /// `needle` must already be lowercase; an empty needle matches.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.sender, &self.subject, &self.preview]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
