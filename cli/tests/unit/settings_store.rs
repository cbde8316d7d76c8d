//! Tests for `YamlSettingsStore`.

use solr_provision::application::ports::SettingsStore;
use solr_provision::domain::{ProvisionError, ProvisionSettings};
use solr_provision::infra::settings::YamlSettingsStore;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let settings = YamlSettingsStore.load(dir.path()).expect("load");
    assert_eq!(settings, ProvisionSettings::default());
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("solr-provision.yaml"), "\n").expect("write");
    let settings = YamlSettingsStore.load(dir.path()).expect("load");
    assert_eq!(settings, ProvisionSettings::default());
}

#[test]
fn file_values_are_read() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("solr-provision.yaml"),
        "strict: true\ntag: collections\n",
    )
    .expect("write");
    let settings = YamlSettingsStore.load(dir.path()).expect("load");
    assert!(settings.strict);
    assert_eq!(settings.tag, "collections");
}

#[test]
fn malformed_file_is_a_configuration_error() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("solr-provision.yaml"), "strict: [not a bool\n")
        .expect("write");
    let err = YamlSettingsStore.load(dir.path()).expect_err("malformed");
    assert!(matches!(err, ProvisionError::Configuration(_)));
    assert!(err.to_string().contains("solr-provision.yaml"));
}
