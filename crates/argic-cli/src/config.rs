//! `argic.toml` settings.
//!
//! ```toml
//! [tables]
//! dir = "tables"
//!
//! [depot]
//! endpoint = "https://www.master-auto-glass.co.uk/pdaservice.asmx"
//! login = "ACCOUNT"
//! password = "secret"
//! timeout_secs = 30
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use argic_depot::{Credentials, DepotConfig};
use serde::Deserialize;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "argic.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub tables: TablesSection,
    pub depot: DepotSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesSection {
    /// Table directory; the shipped tables are used when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepotSection {
    pub endpoint: Option<String>,
    pub namespace: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub user_id: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for DepotSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepotSection")
            .field("endpoint", &self.endpoint)
            .field("namespace", &self.namespace)
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("user_id", &self.user_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Depot settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct DepotOverrides {
    pub endpoint: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub user_id: Option<u32>,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse configuration")
    }

    /// Table directory, with `--tables-dir` taking precedence.
    pub fn tables_dir(&self, cli_dir: Option<&Path>) -> Option<PathBuf> {
        cli_dir
            .map(Path::to_path_buf)
            .or_else(|| self.tables.dir.clone())
    }

    /// Merge file and command-line depot settings into a client config and
    /// credentials.
    pub fn depot(&self, overrides: DepotOverrides) -> Result<(DepotConfig, Credentials)> {
        let file = &self.depot;
        let mut config = DepotConfig::default();
        if let Some(endpoint) = overrides.endpoint.or_else(|| file.endpoint.clone()) {
            config = config.with_endpoint(endpoint);
        }
        if let Some(namespace) = &file.namespace {
            config = config.with_namespace(namespace.as_str());
        }
        if let Some(secs) = file.timeout_secs {
            if secs == 0 {
                bail!("depot.timeout_secs must be greater than zero");
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        let Some(login) = overrides.login.or_else(|| file.login.clone()) else {
            bail!("no depot login: pass --login or set depot.login in {DEFAULT_CONFIG_FILE}");
        };
        let Some(password) = overrides.password.or_else(|| file.password.clone()) else {
            bail!("no depot password: pass --password or set depot.password in {DEFAULT_CONFIG_FILE}");
        };
        let mut credentials = Credentials::new(login, password);
        credentials.user_id = overrides.user_id.or(file.user_id).unwrap_or_default();
        Ok((config, credentials))
    }
}

/// Load settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when no path is
/// given.
///
/// A missing default file yields the defaults; a missing explicit file is an
/// error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if !explicit && !path.is_file() {
        debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("read configuration {}", path.display()))?;
    let config = AppConfig::from_toml_str(&text)
        .with_context(|| format!("in configuration {}", path.display()))?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
