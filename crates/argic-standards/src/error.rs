#![deny(unsafe_code)]

use std::path::PathBuf;

use argic_model::ArgicError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("missing table in manifest: {role}")]
    MissingRole { role: String },

    #[error("duplicate table in manifest: {role}")]
    DuplicateRole { role: String },

    #[error("invalid manifest path {path}: {message}")]
    InvalidPath { path: PathBuf, message: String },

    #[error("missing table file: {path}")]
    MissingFile { path: PathBuf },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("failed to parse CSV {source_name}: {message}")]
    Csv {
        source_name: String,
        message: String,
    },

    #[error("{source_name}: missing column '{column}'")]
    MissingColumn {
        source_name: String,
        column: String,
    },

    #[error("{source_name}: {error}")]
    Table {
        source_name: String,
        #[source]
        error: ArgicError,
    },

    #[error("inconsistent tables: {0}")]
    Inconsistent(#[from] ArgicError),
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(source_name: &str, error: &csv::Error) -> Self {
        Self::Csv {
            source_name: source_name.to_string(),
            message: error.to_string(),
        }
    }
}
