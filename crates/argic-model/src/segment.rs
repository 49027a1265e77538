//! Segment lookup tables.
//!
//! An ARGIC code is assembled from short segment codes, each looked up in its
//! own table:
//!
//! ```text
//! 24   36    A       BL
//! ^^   ^^    ^       ^^
//! |    |     |       color
//! |    |     glass position
//! |    model
//! manufacturer
//! ```
//!
//! Keys are canonicalised once, when the table is built. Lookups are exact:
//! callers that accept free-form input normalise it first with
//! [`canonical_name`](crate::canonical_name) or, for token kinds,
//! [`canonical_token`](crate::canonical_token).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArgicError, Result};
use crate::normalize::{canonical_name, canonical_token};

/// Maximum length of a single segment code.
pub const MAX_CODE_LEN: usize = 2;

/// Which attribute a table maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Manufacturer,
    Model,
    GlassPosition,
    Color,
    Stripe,
    Modification,
}

impl SegmentKind {
    /// The four segments that make up a product code, in code order.
    pub const CODE_ORDER: [SegmentKind; 4] = [
        SegmentKind::Manufacturer,
        SegmentKind::Model,
        SegmentKind::GlassPosition,
        SegmentKind::Color,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manufacturer => "manufacturer",
            Self::Model => "model",
            Self::GlassPosition => "glass position",
            Self::Color => "color",
            Self::Stripe => "stripe",
            Self::Modification => "modification",
        }
    }

    /// Kinds keyed by underscore tokens such as `REAR_WINDOW`.
    #[must_use]
    pub const fn is_token(self) -> bool {
        matches!(
            self,
            Self::GlassPosition | Self::Color | Self::Stripe | Self::Modification
        )
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a segment table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEntry {
    /// Canonical attribute name (the lookup key).
    pub name: String,

    /// Segment code emitted for this name.
    pub code: String,

    /// Grouping column, e.g. the manufacturer a model belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SegmentEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            group: None,
            label: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Immutable name -> code mapping for one segment.
///
/// Entries keep their insertion order for listing; lookup goes through a
/// hash index.
#[derive(Debug, Clone)]
pub struct SegmentTable {
    kind: SegmentKind,
    entries: Vec<SegmentEntry>,
    index: HashMap<String, usize>,
}

impl SegmentTable {
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a table, rejecting duplicate names and malformed codes.
    pub fn from_entries<I>(kind: SegmentKind, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SegmentEntry>,
    {
        let mut table = Self::new(kind);
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    /// Convenience constructor from `(name, code)` pairs.
    pub fn from_pairs<'a, I>(kind: SegmentKind, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::from_entries(
            kind,
            pairs
                .into_iter()
                .map(|(name, code)| SegmentEntry::new(name, code)),
        )
    }

    fn insert(&mut self, mut entry: SegmentEntry) -> Result<()> {
        entry.name = if self.kind.is_token() {
            canonical_token(&entry.name)
        } else {
            canonical_name(&entry.name)
        };
        entry.code = entry.code.trim().to_string();
        if !is_valid_code(&entry.code) {
            return Err(ArgicError::InvalidCode {
                kind: self.kind,
                name: entry.name,
                code: entry.code,
            });
        }
        if self.index.contains_key(&entry.name) {
            return Err(ArgicError::DuplicateKey {
                kind: self.kind,
                name: entry.name,
            });
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Exact lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entry(name).map(|entry| entry.code.as_str())
    }

    pub fn entry(&self, name: &str) -> Option<&SegmentEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    /// Exact lookup that fails with [`ArgicError::UnknownAttribute`].
    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ArgicError::unknown(self.kind, name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentEntry> {
        self.entries.iter()
    }
}

fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LEN
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_canonicalised_at_construction() {
        let table =
            SegmentTable::from_pairs(SegmentKind::Manufacturer, [(" land  rover ", "60")])
                .unwrap();
        assert_eq!(table.get("LAND ROVER"), Some("60"));
        assert_eq!(table.get("land rover"), None);
    }

    #[test]
    fn token_kinds_are_keyed_with_underscores() {
        let colors =
            SegmentTable::from_pairs(SegmentKind::Color, [(" light  green", "LG")]).unwrap();
        assert_eq!(colors.get("LIGHT_GREEN"), Some("LG"));
        assert_eq!(colors.get("LIGHT GREEN"), None);

        let glass =
            SegmentTable::from_pairs(SegmentKind::GlassPosition, [("rear-window", "B")]).unwrap();
        assert_eq!(glass.get("REAR_WINDOW"), Some("B"));

        let models =
            SegmentTable::from_pairs(SegmentKind::Model, [("3 series e46", "36")]).unwrap();
        assert_eq!(models.get("3 SERIES E46"), Some("36"));
    }

    #[test]
    fn rejects_overlong_codes() {
        let err = SegmentTable::from_pairs(SegmentKind::Color, [("CLEAR", "CLR")]).unwrap_err();
        assert!(matches!(err, ArgicError::InvalidCode { .. }));
    }

    #[test]
    fn rejects_empty_codes() {
        let err = SegmentTable::from_pairs(SegmentKind::Color, [("CLEAR", " ")]).unwrap_err();
        assert!(matches!(err, ArgicError::InvalidCode { .. }));
    }
}
