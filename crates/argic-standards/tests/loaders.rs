use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use argic_standards::hash::sha256_hex;
use argic_standards::{
    StandardsError, TableRole, TableSet, default_tables, load_tables_dir, verify_and_load,
};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "argic-tables-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn shipped_file(role: TableRole) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(role.default_file_name());
    fs::read(path).unwrap()
}

/// Copy the shipped tables into a fresh directory.
fn seed_dir(name: &str) -> PathBuf {
    let dir = unique_temp_dir(name);
    for role in TableRole::ALL {
        write(&dir.join(role.default_file_name()), &shipped_file(role));
    }
    dir
}

fn write_manifest(dir: &Path) {
    let mut manifest = String::from(
        "[manifest]\nschema = \"argic.tables-manifest\"\nschema_version = 1\n",
    );
    for role in TableRole::ALL {
        let file = role.default_file_name();
        let sha = sha256_hex(&fs::read(dir.join(file)).unwrap());
        manifest.push_str(&format!(
            "\n[[files]]\npath = \"{file}\"\nsha256 = \"{sha}\"\nrole = \"{}\"\n",
            role.as_str()
        ));
    }
    write(&dir.join("manifest.toml"), manifest.as_bytes());
}

#[test]
fn default_tables_contain_known_codes() {
    let tables = default_tables();
    assert_eq!(tables.manufacturers.get("BMW"), Some("24"));
    assert_eq!(tables.models.get("3 SERIES E46"), Some("36"));
    assert_eq!(tables.glass_positions.get("WINDSHIELD"), Some("A"));
    assert_eq!(tables.colors.get("BLUE"), Some("BL"));
    assert_eq!(tables.stripes.get("DARK_GREY"), Some("DG"));
    assert_eq!(tables.modifications.get("CAMERA"), Some("5A"));
}

#[test]
fn model_rows_carry_their_manufacturer() {
    let entry = default_tables().models.entry("PICANTO II").unwrap();
    assert_eq!(entry.group.as_deref(), Some("KIA"));
    assert_eq!(entry.code, "60");
}

#[test]
fn directory_without_manifest_loads_default_file_names() {
    let dir = seed_dir("plain");
    let tables = load_tables_dir(&dir).expect("load plain dir");
    assert_eq!(
        tables.models.len(),
        default_tables().models.len(),
        "same rows as the shipped copy"
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = seed_dir("missing");
    fs::remove_file(dir.join("colors.csv")).unwrap();
    let err = load_tables_dir(&dir).unwrap_err();
    assert!(matches!(err, StandardsError::MissingFile { ref path } if path.ends_with("colors.csv")));
}

#[test]
fn verify_and_load_summary_is_stable() {
    let dir = seed_dir("verified");
    write_manifest(&dir);

    let (tables, summary) = verify_and_load(&dir).expect("verify_and_load should succeed");
    assert_eq!(summary.tables_dir, dir);
    assert_eq!(tables.windows.len(), 11);

    let counts: BTreeMap<&str, usize> = BTreeMap::from([
        ("files", summary.file_count),
        ("manufacturers", summary.manufacturer_count),
        ("models", summary.model_count),
        ("glass_positions", summary.glass_position_count),
        ("windows", summary.window_count),
        ("colors", summary.color_count),
        ("stripes", summary.stripe_count),
        ("modifications", summary.modification_count),
    ]);
    insta::assert_json_snapshot!(counts, @r#"
    {
      "colors": 8,
      "files": 7,
      "glass_positions": 11,
      "manufacturers": 31,
      "models": 305,
      "modifications": 12,
      "stripes": 6,
      "windows": 11
    }
    "#);
}

#[test]
fn tampered_file_fails_verification() {
    let dir = seed_dir("tampered");
    write_manifest(&dir);
    let mut colors = shipped_file(TableRole::Colors);
    colors.extend_from_slice(b"\"MAUVE\",\"MV\"\n");
    write(&dir.join("colors.csv"), &colors);

    let err = verify_and_load(&dir).unwrap_err();
    assert!(matches!(err, StandardsError::Sha256Mismatch { .. }));

    // load_tables_dir verifies as well once a manifest is present
    assert!(load_tables_dir(&dir).is_err());
}

#[test]
fn manifest_with_unknown_role_is_rejected() {
    let dir = seed_dir("badrole");
    write(
        &dir.join("manifest.toml"),
        br#"[manifest]
schema = "argic.tables-manifest"
schema_version = 1

[[files]]
path = "paint.csv"
sha256 = "0000000000000000000000000000000000000000000000000000000000000000"
role = "paint"
"#,
    );
    let err = verify_and_load(&dir).unwrap_err();
    assert!(matches!(err, StandardsError::InvalidManifest { .. }));
}

#[test]
fn duplicate_manufacturer_is_rejected() {
    let err = TableSet::from_sources(|role| {
        let text = if role == TableRole::Manufacturers {
            "\"Manufacturer\",\"Code\"\n\"BMW\",\"24\"\n\"bmw\",\"25\"\n".to_string()
        } else {
            String::from_utf8(shipped_file(role)).unwrap()
        };
        Ok((role.default_file_name().to_string(), text))
    })
    .unwrap_err();
    assert!(matches!(err, StandardsError::Table { .. }));
}

#[test]
fn spaced_lowercase_override_names_load_as_tokens() {
    let dir = seed_dir("spaced");
    write(
        &dir.join("glass_positions.csv"),
        b"\"Position\",\"Code\"\n\"windshield\",\"A\"\n\"rear window\",\"B\"\n",
    );
    write(
        &dir.join("window_priorities.csv"),
        b"\"Window\",\"Position\"\n\"jqvmap1_ws\",\"windshield\"\n\"jqvmap1_rw\",\"rear window\"\n",
    );
    write(
        &dir.join("colors.csv"),
        b"\"Color\",\"Code\"\n\"blue\",\"BL\"\n\"light green\",\"LG\"\n",
    );

    let tables = load_tables_dir(&dir).expect("load spaced dir");
    tables.validate().expect("window positions resolve");
    assert_eq!(tables.colors.get("LIGHT_GREEN"), Some("LG"));
    assert_eq!(tables.glass_positions.get("REAR_WINDOW"), Some("B"));
    let rear = tables.windows.get("jqvmap1_rw").unwrap();
    assert_eq!(rear.position, "REAR_WINDOW");
}
