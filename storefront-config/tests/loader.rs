use std::fs;
use std::path::PathBuf;

use storefront_config::{
    ConfigLoadError, ConfigLoader, ConfigSource, ScrollEasing,
    loader::{CATALOG_VAR, CONFIG_PATH_VAR, COUNTRY_CODE_VAR, SCROLL_STEP_VAR},
};
use tempfile::tempdir;

fn no_vars() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn empty_directory_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::with_vars(no_vars())
        .search_dir(dir.path())
        .load()
        .expect("load");

    assert_eq!(load.source, ConfigSource::Defaults);
    assert!(load.overrides.is_empty());
    assert_eq!(load.config.rail.scroll_step, 400.0);
    assert_eq!(load.config.storefront.country_code.as_str(), "br");
}

#[test]
fn discovered_file_is_applied() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("storefront.toml"),
        r#"
        [storefront]
        country_code = "PT"

        [rail]
        scroll_step = 320.0
        easing = "linear"
        "#,
    )
    .expect("write config");

    let load = ConfigLoader::with_vars(no_vars())
        .search_dir(dir.path())
        .load()
        .expect("load");

    assert_eq!(
        load.source,
        ConfigSource::Discovered(dir.path().join("storefront.toml"))
    );
    assert_eq!(load.config.storefront.country_code.as_str(), "pt");
    assert_eq!(load.config.rail.scroll_step, 320.0);
    assert_eq!(load.config.rail.easing, ScrollEasing::Linear);
}

#[test]
fn env_overrides_win_over_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[rail]\nscroll_step = 250.0\n").expect("write config");

    let load = ConfigLoader::with_vars([
        (CONFIG_PATH_VAR, path.display().to_string()),
        (COUNTRY_CODE_VAR, "us".to_string()),
        (SCROLL_STEP_VAR, "600".to_string()),
        (CATALOG_VAR, "/srv/catalog.json".to_string()),
    ])
    .search_dir(dir.path())
    .load()
    .expect("load");

    assert_eq!(load.source, ConfigSource::Explicit(path));
    assert_eq!(load.config.rail.scroll_step, 600.0);
    assert_eq!(load.config.storefront.country_code.as_str(), "us");
    assert_eq!(
        load.config.storefront.catalog_path,
        Some(PathBuf::from("/srv/catalog.json"))
    );
    assert_eq!(load.overrides.len(), 3);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = ConfigLoader::with_vars(no_vars())
        .with_file(dir.path().join("absent.toml"))
        .load()
        .expect_err("explicit file must exist");
    assert!(matches!(err, ConfigLoadError::Read { .. }));
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[rail\nscroll_step = ").expect("write config");

    let err = ConfigLoader::with_vars(no_vars())
        .with_file(&path)
        .load()
        .expect_err("broken toml");
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn bad_env_values_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let err = ConfigLoader::with_vars([(SCROLL_STEP_VAR, "far")])
        .search_dir(dir.path())
        .load()
        .expect_err("non-numeric step");
    assert!(matches!(
        err,
        ConfigLoadError::InvalidEnv { key: SCROLL_STEP_VAR, .. }
    ));

    let err = ConfigLoader::with_vars([(COUNTRY_CODE_VAR, "brazil")])
        .search_dir(dir.path())
        .load()
        .expect_err("long country code");
    assert!(matches!(
        err,
        ConfigLoadError::InvalidEnv { key: COUNTRY_CODE_VAR, .. }
    ));
}

#[test]
fn non_positive_step_fails_validation() {
    let dir = tempdir().expect("tempdir");
    let err = ConfigLoader::with_vars([(SCROLL_STEP_VAR, "0")])
        .search_dir(dir.path())
        .load()
        .expect_err("zero step");
    assert!(matches!(err, ConfigLoadError::Invalid(_)));
}

#[test]
fn blank_env_values_are_ignored() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::with_vars([(CATALOG_VAR, "  ")])
        .search_dir(dir.path())
        .load()
        .expect("load");
    assert!(load.config.storefront.catalog_path.is_none());
    assert!(load.overrides.is_empty());
}
