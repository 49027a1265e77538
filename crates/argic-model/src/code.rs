//! Generated product codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::segment::SegmentKind;

/// One resolved segment: which table, which key matched, what it emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSegment {
    pub kind: SegmentKind,
    pub name: String,
    pub code: String,
}

impl ResolvedSegment {
    pub fn new(kind: SegmentKind, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Manufacturer, model, glass position and color codes joined without
/// separators, e.g. `2436ABL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductCode {
    value: String,
}

impl ProductCode {
    /// Join four segment codes in code order.
    pub fn from_segments(manufacturer: &str, model: &str, glass: &str, color: &str) -> Self {
        let mut value =
            String::with_capacity(manufacturer.len() + model.len() + glass.len() + color.len());
        value.push_str(manufacturer);
        value.push_str(model);
        value.push_str(glass);
        value.push_str(color);
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.value
    }
}

/// Per-segment explanation of a generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBreakdown {
    pub code: String,
    /// The four code segments, in code order.
    pub segments: Vec<ResolvedSegment>,
    /// Window id that decided the glass position, `None` when defaulted.
    pub matched_window: Option<String>,
    pub stripe: String,
    pub modifications: String,
}
