//! Ordered in-memory draft list with a single "being edited" slot.
//!
//! Used by the content editor's saved list and the campaign scheduler's
//! table. Entries are addressed by index; the list is never synchronized
//! with the backend.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftList<T> {
    items: Vec<T>,
    editing: Option<usize>,
}

impl<T> Default for DraftList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            editing: None,
        }
    }
}

impl<T: Clone> DraftList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index currently loaded into the form, if any.
    #[must_use]
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Replace the entry being edited, or append when not editing.
    ///
    /// Returns the index the item ended up at.
    pub fn save(&mut self, item: T) -> usize {
        match self.editing.take() {
            Some(idx) if idx < self.items.len() => {
                self.items[idx] = item;
                idx
            }
            _ => {
                self.items.push(item);
                self.items.len() - 1
            }
        }
    }

    /// Mark entry `idx` as being edited and return a copy for the form.
    pub fn begin_edit(&mut self, idx: usize) -> Option<T> {
        let item = self.items.get(idx)?.clone();
        self.editing = Some(idx);
        Some(item)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Remove entry `idx`, keeping the remaining order.
    ///
    /// The editing slot follows its entry: cleared if that entry is removed,
    /// shifted down if an earlier entry is removed.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if idx >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(idx);
        self.editing = match self.editing {
            Some(e) if e == idx => None,
            Some(e) if e > idx => Some(e - 1),
            other => other,
        };
        Some(removed)
    }
}
