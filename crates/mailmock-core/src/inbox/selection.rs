//! Selection Set
//!
//! Snapshot of the checked rows, recomputed from the per-row flags after
//! every change so the two can never disagree.

use std::collections::BTreeSet;

use super::item::ListedItem;

/// State of the select-all checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    #[default]
    None,
    Some,
    All,
}

pub fn tri_state(selected: usize, total: usize) -> TriState {
    if selected == 0 {
        TriState::None
    } else if selected >= total {
        TriState::All
    } else {
        TriState::Some
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<u32>,
    visible: usize,
}

impl SelectionSet {
    /// Selected rows among the visible ones
    pub fn from_items(items: &[ListedItem]) -> Self {
        let visible: Vec<&ListedItem> = items.iter().filter(|item| item.is_visible()).collect();
        Self {
            ids: visible.iter().filter(|item| item.selected).map(|item| item.id).collect(),
            visible: visible.len(),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn tri_state(&self) -> TriState {
        tri_state(self.ids.len(), self.visible)
    }
}
