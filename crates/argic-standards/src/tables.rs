#![deny(unsafe_code)]

//! The set of tables a code mapper needs, and the copy shipped with the crate.

use std::sync::LazyLock;

use argic_model::{
    ArgicError, DEFAULT_GLASS_POSITION, SegmentKind, SegmentTable, WindowPriorityTable,
};
use tracing::debug;

use crate::csv::{SegmentColumns, parse_segment_csv, parse_window_csv};
use crate::error::StandardsError;

/// One table file and its place in a [`TableSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableRole {
    Manufacturers,
    Models,
    GlassPositions,
    WindowPriorities,
    Colors,
    Stripes,
    Modifications,
}

impl TableRole {
    pub const ALL: [TableRole; 7] = [
        TableRole::Manufacturers,
        TableRole::Models,
        TableRole::GlassPositions,
        TableRole::WindowPriorities,
        TableRole::Colors,
        TableRole::Stripes,
        TableRole::Modifications,
    ];

    /// Role name used in `manifest.toml`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manufacturers => "manufacturers",
            Self::Models => "models",
            Self::GlassPositions => "glass_positions",
            Self::WindowPriorities => "window_priorities",
            Self::Colors => "colors",
            Self::Stripes => "stripes",
            Self::Modifications => "modifications",
        }
    }

    /// File name used when a table directory has no manifest.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Manufacturers => "manufacturers.csv",
            Self::Models => "models.csv",
            Self::GlassPositions => "glass_positions.csv",
            Self::WindowPriorities => "window_priorities.csv",
            Self::Colors => "colors.csv",
            Self::Stripes => "stripes.csv",
            Self::Modifications => "modifications.csv",
        }
    }

    pub fn from_role(role: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == role)
    }

    const fn segment(self) -> Option<(SegmentKind, SegmentColumns)> {
        let (kind, name, group, label) = match self {
            Self::Manufacturers => (SegmentKind::Manufacturer, "Manufacturer", None, None),
            Self::Models => (SegmentKind::Model, "Model", Some("Manufacturer"), None),
            Self::GlassPositions => (SegmentKind::GlassPosition, "Position", None, Some("Label")),
            Self::Colors => (SegmentKind::Color, "Color", None, None),
            Self::Stripes => (SegmentKind::Stripe, "Stripe", None, None),
            Self::Modifications => (SegmentKind::Modification, "Modification", None, None),
            Self::WindowPriorities => return None,
        };
        Some((
            kind,
            SegmentColumns {
                name,
                code: "Code",
                group,
                label,
            },
        ))
    }

    /// Text of the shipped copy of this table.
    const fn embedded(self) -> &'static str {
        match self {
            Self::Manufacturers => include_str!("../data/manufacturers.csv"),
            Self::Models => include_str!("../data/models.csv"),
            Self::GlassPositions => include_str!("../data/glass_positions.csv"),
            Self::WindowPriorities => include_str!("../data/window_priorities.csv"),
            Self::Colors => include_str!("../data/colors.csv"),
            Self::Stripes => include_str!("../data/stripes.csv"),
            Self::Modifications => include_str!("../data/modifications.csv"),
        }
    }
}

/// All lookup tables used to build and explain a product code.
#[derive(Debug, Clone)]
pub struct TableSet {
    pub manufacturers: SegmentTable,
    pub models: SegmentTable,
    pub glass_positions: SegmentTable,
    pub windows: WindowPriorityTable,
    pub colors: SegmentTable,
    pub stripes: SegmentTable,
    pub modifications: SegmentTable,
}

impl TableSet {
    /// Build a table set from a text source per role.
    ///
    /// `source` returns `(source_name, text)` for a role; the name only shows
    /// up in error messages.
    pub fn from_sources<F>(mut source: F) -> Result<Self, StandardsError>
    where
        F: FnMut(TableRole) -> Result<(String, String), StandardsError>,
    {
        let mut segment = |role: TableRole| -> Result<SegmentTable, StandardsError> {
            let (name, text) = source(role)?;
            let Some((kind, columns)) = role.segment() else {
                unreachable!("{} is not a segment table", role.as_str());
            };
            let table = parse_segment_csv(&name, &text, kind, columns)?;
            debug!(table = role.as_str(), entries = table.len(), "loaded table");
            Ok(table)
        };

        let manufacturers = segment(TableRole::Manufacturers)?;
        let models = segment(TableRole::Models)?;
        let glass_positions = segment(TableRole::GlassPositions)?;
        let colors = segment(TableRole::Colors)?;
        let stripes = segment(TableRole::Stripes)?;
        let modifications = segment(TableRole::Modifications)?;

        let (name, text) = source(TableRole::WindowPriorities)?;
        let windows = parse_window_csv(&name, &text)?;
        debug!(
            table = TableRole::WindowPriorities.as_str(),
            entries = windows.len(),
            "loaded table"
        );

        let tables = Self {
            manufacturers,
            models,
            glass_positions,
            windows,
            colors,
            stripes,
            modifications,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Parse the copy compiled into the crate.
    pub fn embedded() -> Result<Self, StandardsError> {
        Self::from_sources(|role| {
            Ok((
                format!("<embedded>/{}", role.default_file_name()),
                role.embedded().to_string(),
            ))
        })
    }

    /// Cross-table checks: the default position exists and every window
    /// points at a known position.
    pub fn validate(&self) -> Result<(), ArgicError> {
        if !self.glass_positions.contains(DEFAULT_GLASS_POSITION) {
            return Err(ArgicError::MissingDefault {
                position: DEFAULT_GLASS_POSITION.to_string(),
            });
        }
        for entry in self.windows.iter() {
            if !self.glass_positions.contains(&entry.position) {
                return Err(ArgicError::UnknownPosition {
                    window: entry.window.clone(),
                    position: entry.position.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn segment(&self, kind: SegmentKind) -> &SegmentTable {
        match kind {
            SegmentKind::Manufacturer => &self.manufacturers,
            SegmentKind::Model => &self.models,
            SegmentKind::GlassPosition => &self.glass_positions,
            SegmentKind::Color => &self.colors,
            SegmentKind::Stripe => &self.stripes,
            SegmentKind::Modification => &self.modifications,
        }
    }
}

static DEFAULT_TABLES: LazyLock<TableSet> =
    LazyLock::new(|| TableSet::embedded().expect("embedded ARGIC tables are valid"));

/// Shipped tables, parsed on first access and shared for the process
/// lifetime.
///
/// # Panics
///
/// Panics if the CSV files compiled into the crate are malformed.
pub fn default_tables() -> &'static TableSet {
    &DEFAULT_TABLES
}
