//! Window selection -> glass position priority table.
//!
//! The damage-location diagram reports which windows the customer clicked
//! as opaque widget ids (`jqvmap1_ws`, `jqvmap1_rw`, ...). Only one glass
//! position fits in a product code, so when several windows are selected the
//! first one in the caller's selection that the table knows wins. Table
//! order is only used for listing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ArgicError, Result};

/// Glass position used when no selected window is in the table.
pub const DEFAULT_GLASS_POSITION: &str = "WINDSHIELD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEntry {
    /// Widget id as reported by the diagram, matched exactly.
    pub window: String,

    /// Canonical glass position name (a key of the glass position table).
    pub position: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl WindowEntry {
    pub fn new(window: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            window: window.into(),
            position: position.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Ordered window id -> glass position mapping.
#[derive(Debug, Clone, Default)]
pub struct WindowPriorityTable {
    entries: Vec<WindowEntry>,
    index: HashMap<String, usize>,
}

impl WindowPriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries; window ids must be unique.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = WindowEntry>,
    {
        let mut table = Self::new();
        for entry in entries {
            if table.index.contains_key(&entry.window) {
                return Err(ArgicError::DuplicateWindow {
                    window: entry.window,
                });
            }
            table.index.insert(entry.window.clone(), table.entries.len());
            table.entries.push(entry);
        }
        Ok(table)
    }

    /// Exact lookup of one window id.
    pub fn get(&self, window: &str) -> Option<&WindowEntry> {
        self.index.get(window).map(|&idx| &self.entries[idx])
    }

    /// Entry for the first id in `selected` that the table knows.
    pub fn first_match<S>(&self, selected: &[S]) -> Option<&WindowEntry>
    where
        S: AsRef<str>,
    {
        selected.iter().find_map(|id| self.get(id.as_ref()))
    }

    /// Glass position for a selection, falling back to
    /// [`DEFAULT_GLASS_POSITION`].
    pub fn position_for<S>(&self, selected: &[S]) -> &str
    where
        S: AsRef<str>,
    {
        self.first_match(selected)
            .map_or(DEFAULT_GLASS_POSITION, |entry| entry.position.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> WindowPriorityTable {
        WindowPriorityTable::from_entries([
            WindowEntry::new("jqvmap1_ws", "WINDSHIELD"),
            WindowEntry::new("jqvmap1_rw", "REAR_WINDOW"),
            WindowEntry::new("jqvmap1_vr", "SIDE_RIGHT"),
        ])
        .unwrap()
    }

    #[test]
    fn first_selected_known_window_wins() {
        let table = table();
        assert_eq!(table.position_for(&["jqvmap1_vr", "jqvmap1_rw"]), "SIDE_RIGHT");
        assert_eq!(table.position_for(&["jqvmap1_rw", "jqvmap1_ws"]), "REAR_WINDOW");
        assert_eq!(table.position_for(&["jqvmap1_vp", "jqvmap1_ws"]), "WINDSHIELD");
    }

    #[test]
    fn unmatched_selection_falls_back_to_windshield() {
        let table = table();
        let empty: [&str; 0] = [];
        assert_eq!(table.position_for(&empty), DEFAULT_GLASS_POSITION);
        assert_eq!(table.position_for(&["jqvmap1_vp"]), DEFAULT_GLASS_POSITION);
    }

    #[test]
    fn window_ids_are_case_sensitive() {
        assert!(table().first_match(&["JQVMAP1_RW"]).is_none());
    }

    #[test]
    fn duplicate_window_is_rejected() {
        let err = WindowPriorityTable::from_entries([
            WindowEntry::new("jqvmap1_ws", "WINDSHIELD"),
            WindowEntry::new("jqvmap1_ws", "REAR_WINDOW"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ArgicError::DuplicateWindow {
                window: "jqvmap1_ws".to_string()
            }
        );
    }
}
