use thiserror::Error;

use crate::segment::SegmentKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgicError {
    #[error("unknown {kind} '{name}'")]
    UnknownAttribute { kind: SegmentKind, name: String },
    #[error("duplicate {kind} '{name}'")]
    DuplicateKey { kind: SegmentKind, name: String },
    #[error("invalid {kind} code '{code}' for '{name}'")]
    InvalidCode {
        kind: SegmentKind,
        name: String,
        code: String,
    },
    #[error("duplicate window id '{window}'")]
    DuplicateWindow { window: String },
    #[error("window '{window}' maps to unknown glass position '{position}'")]
    UnknownPosition { window: String, position: String },
    #[error("glass position table has no default entry '{position}'")]
    MissingDefault { position: String },
}

impl ArgicError {
    pub(crate) fn unknown(kind: SegmentKind, name: &str) -> Self {
        Self::UnknownAttribute {
            kind,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArgicError>;
