#![deny(unsafe_code)]

//! Loading table sets from a directory, optionally pinned by a manifest.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::manifest::{
    MANIFEST_FILE, MANIFEST_SCHEMA, MANIFEST_SCHEMA_VERSION, Manifest, ManifestFile,
};
use crate::tables::{TableRole, TableSet};

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub tables_dir: PathBuf,
    pub file_count: usize,
    pub manufacturer_count: usize,
    pub model_count: usize,
    pub glass_position_count: usize,
    pub window_count: usize,
    pub color_count: usize,
    pub stripe_count: usize,
    pub modification_count: usize,
}

impl VerifySummary {
    fn new(tables_dir: &Path, file_count: usize, tables: &TableSet) -> Self {
        Self {
            tables_dir: tables_dir.to_path_buf(),
            file_count,
            manufacturer_count: tables.manufacturers.len(),
            model_count: tables.models.len(),
            glass_position_count: tables.glass_positions.len(),
            window_count: tables.windows.len(),
            color_count: tables.colors.len(),
            stripe_count: tables.stripes.len(),
            modification_count: tables.modifications.len(),
        }
    }
}

/// Load a table directory.
///
/// When the directory holds a `manifest.toml` the files it lists are
/// checksum-verified first (see [`verify_and_load`]); otherwise the default
/// file names are read as-is.
pub fn load_tables_dir(tables_dir: &Path) -> Result<TableSet, StandardsError> {
    if tables_dir.join(MANIFEST_FILE).is_file() {
        return verify_and_load(tables_dir).map(|(tables, _)| tables);
    }
    debug!(dir = %tables_dir.display(), "loading tables without manifest");
    TableSet::from_sources(|role| read_table(&tables_dir.join(role.default_file_name())))
}

/// Verify every file listed in `manifest.toml` against its SHA-256 pin, then
/// load the tables.
pub fn verify_and_load(tables_dir: &Path) -> Result<(TableSet, VerifySummary), StandardsError> {
    let manifest = load_manifest(&tables_dir.join(MANIFEST_FILE))?;
    let files = validate_manifest(&manifest)?;

    for file in files.values() {
        verify_file(tables_dir, file)?;
    }

    let tables = TableSet::from_sources(|role| {
        let file = files.get(&role).ok_or_else(|| StandardsError::MissingRole {
            role: role.as_str().to_string(),
        })?;
        read_table(&tables_dir.join(&file.path))
    })?;

    let summary = VerifySummary::new(tables_dir, files.len(), &tables);
    info!(
        dir = %tables_dir.display(),
        files = summary.file_count,
        models = summary.model_count,
        "verified table directory"
    );
    Ok((tables, summary))
}

fn read_table(path: &Path) -> Result<(String, String), StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            StandardsError::io(path, e)
        }
    })?;
    Ok((path.display().to_string(), text))
}

fn load_manifest(path: &Path) -> Result<Manifest, StandardsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(
    manifest: &Manifest,
) -> Result<BTreeMap<TableRole, ManifestFile>, StandardsError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut files = BTreeMap::new();
    let mut paths = BTreeSet::new();
    for file in &manifest.files {
        let role =
            TableRole::from_role(&file.role).ok_or_else(|| StandardsError::InvalidManifest {
                message: format!("unknown role '{}' for {}", file.role, file.path),
            })?;
        if files.contains_key(&role) {
            return Err(StandardsError::DuplicateRole {
                role: file.role.clone(),
            });
        }
        validate_sha(&file.sha256, &file.path)?;
        let path = validate_path(&file.path)?;
        if !paths.insert(path.clone()) {
            return Err(StandardsError::InvalidPath {
                path,
                message: "listed more than once".to_string(),
            });
        }
        files.insert(role, file.clone());
    }

    for role in TableRole::ALL {
        if !files.contains_key(&role) {
            return Err(StandardsError::MissingRole {
                role: role.as_str().to_string(),
            });
        }
    }
    Ok(files)
}

fn validate_sha(sha: &str, path: &str) -> Result<(), StandardsError> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidManifest {
            message: format!("invalid sha256 for {path}: expected 64 hex characters"),
        });
    }
    Ok(())
}

/// Manifest paths must stay inside the table directory.
fn validate_path(path: &str) -> Result<PathBuf, StandardsError> {
    let candidate = PathBuf::from(path);
    let mut normalized = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(StandardsError::InvalidPath {
                    path: candidate,
                    message: "must be relative and stay inside the table directory".to_string(),
                });
            }
        }
    }
    if normalized.as_os_str().is_empty() {
        return Err(StandardsError::InvalidPath {
            path: candidate,
            message: "empty path".to_string(),
        });
    }
    Ok(normalized)
}

fn verify_file(tables_dir: &Path, file: &ManifestFile) -> Result<(), StandardsError> {
    let full_path = tables_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            StandardsError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(StandardsError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_components_are_rejected() {
        assert!(validate_path("../models.csv").is_err());
        assert!(validate_path("/etc/models.csv").is_err());
        assert_eq!(
            validate_path("./tables/models.csv").unwrap(),
            PathBuf::from("tables/models.csv")
        );
    }

    #[test]
    fn sha_must_be_hex() {
        assert!(validate_sha(&"a".repeat(64), "x.csv").is_ok());
        assert!(validate_sha("abc", "x.csv").is_err());
        assert!(validate_sha(&"z".repeat(64), "x.csv").is_err());
    }
}
