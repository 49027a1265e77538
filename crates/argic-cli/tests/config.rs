//! Settings file parsing and precedence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use argic_cli::config::{AppConfig, DepotOverrides, load_config};
use argic_depot::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

const FULL: &str = r#"
[tables]
dir = "tables"

[depot]
endpoint = "http://localhost:8080/pdaservice.asmx"
login = "Q-10"
password = "secret"
user_id = 7
timeout_secs = 5
"#;

fn unique_temp_dir(label: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "argic-cli-{label}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
}

#[test]
fn file_values_are_used_without_overrides() {
    let config = AppConfig::from_toml_str(FULL).unwrap();
    assert_eq!(config.tables_dir(None), Some(PathBuf::from("tables")));

    let (depot, credentials) = config.depot(DepotOverrides::default()).unwrap();
    assert_eq!(depot.endpoint, "http://localhost:8080/pdaservice.asmx");
    assert_eq!(depot.timeout, Duration::from_secs(5));
    assert_eq!(credentials.login, "Q-10");
    assert_eq!(credentials.password, "secret");
    assert_eq!(credentials.user_id, 7);
}

#[test]
fn command_line_wins_over_file() {
    let config = AppConfig::from_toml_str(FULL).unwrap();
    assert_eq!(
        config.tables_dir(Some(Path::new("other"))),
        Some(PathBuf::from("other"))
    );

    let (depot, credentials) = config
        .depot(DepotOverrides {
            endpoint: Some("http://example.test/".to_string()),
            login: Some("Z-99".to_string()),
            password: None,
            user_id: Some(0),
        })
        .unwrap();
    assert_eq!(depot.endpoint, "http://example.test/");
    assert_eq!(credentials.login, "Z-99");
    assert_eq!(credentials.password, "secret");
    assert_eq!(credentials.user_id, 0);
}

#[test]
fn depot_defaults_apply_when_unset() {
    let config = AppConfig::default();
    let (depot, credentials) = config
        .depot(DepotOverrides {
            login: Some("Q-10".to_string()),
            password: Some("pw".to_string()),
            ..DepotOverrides::default()
        })
        .unwrap();
    assert_eq!(depot.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(depot.timeout, DEFAULT_TIMEOUT);
    assert_eq!(credentials.user_id, 0);
}

#[test]
fn missing_credentials_are_reported() {
    let err = AppConfig::default()
        .depot(DepotOverrides::default())
        .unwrap_err();
    assert!(err.to_string().contains("login"));

    let err = AppConfig::default()
        .depot(DepotOverrides {
            login: Some("Q-10".to_string()),
            ..DepotOverrides::default()
        })
        .unwrap_err();
    assert!(err.to_string().contains("password"));
}

#[test]
fn zero_timeout_is_rejected() {
    let config = AppConfig::from_toml_str("[depot]\ntimeout_secs = 0\nlogin = \"a\"\npassword = \"b\"\n")
        .unwrap();
    assert!(config.depot(DepotOverrides::default()).is_err());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(AppConfig::from_toml_str("[depot]\npasword = \"typo\"\n").is_err());
    assert!(AppConfig::from_toml_str("[cache]\nsize = 1\n").is_err());
}

#[test]
fn debug_output_hides_password() {
    let config = AppConfig::from_toml_str(FULL).unwrap();
    let rendered = format!("{config:?}");
    assert!(rendered.contains("Q-10"));
    assert!(!rendered.contains("secret"));
}

#[test]
fn explicit_file_is_loaded() {
    let dir = unique_temp_dir("load");
    let path = dir.join("argic.toml");
    std::fs::write(&path, FULL).unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.depot.login.as_deref(), Some("Q-10"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = unique_temp_dir("missing");
    assert!(load_config(Some(dir.join("nope.toml").as_path())).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_default_file_yields_defaults() {
    // tests run from the crate directory, which has no argic.toml
    assert_eq!(load_config(None).unwrap(), AppConfig::default());
}
