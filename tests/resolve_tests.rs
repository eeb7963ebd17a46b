//! Configuration resolution against pubspec.yaml files on disk.

mod common;

use inno_bundle::bundler::{ConfigBuilder, ConfigError, Error, Language, Overrides};
use inno_bundle::metadata::load_manifest;
use std::path::Path;

fn resolve(project: &Path) -> inno_bundle::bundler::Result<inno_bundle::bundler::ResolvedConfig> {
    let manifest = load_manifest(project).expect("manifest loads");
    ConfigBuilder::new(&manifest).work_dir(project).build()
}

fn expect_config_error(project: &Path) -> ConfigError {
    match resolve(project) {
        Err(Error::Config(e)) => e,
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_missing_id_fails_with_guidance() {
    let project = common::project(
        "name: demo_app\ndescription: d\nversion: 1.0.0\nmaintainer: m\ninno_bundle:\n  name: Demo\n",
    );
    let err = expect_config_error(project.path());
    assert_eq!(err, ConfigError::MissingId);
    assert!(err.to_string().contains("inno_bundle id"));
}

#[test]
fn test_malformed_id_fails() {
    let project = common::project(
        "name: demo_app\ndescription: d\nversion: 1.0.0\nmaintainer: m\ninno_bundle:\n  id: 1234-not-a-uuid\n",
    );
    assert_eq!(
        expect_config_error(project.path()),
        ConfigError::InvalidId("1234-not-a-uuid".into())
    );
}

#[test]
fn test_support_and_updates_urls_default_to_url() {
    let project = common::project(&common::pubspec("  url: https://demo.test\n"));
    let config = resolve(project.path()).expect("resolves");
    assert_eq!(config.url(), "https://demo.test");
    assert_eq!(config.support_url(), "https://demo.test");
    assert_eq!(config.updates_url(), "https://demo.test");

    let project = common::project(&common::pubspec(
        "  url: https://demo.test\n  support_url: https://help.demo.test\n",
    ));
    let config = resolve(project.path()).expect("resolves");
    assert_eq!(config.support_url(), "https://help.demo.test");
    assert_eq!(config.updates_url(), "https://demo.test");
}

#[test]
fn test_url_defaults_to_empty() {
    let project = common::project(
        "name: a\ndescription: d\nversion: 1.0.0\nmaintainer: m\ninno_bundle:\n  id: 5c3bd4a2-7e1f-4c8b-a9d6-0f2e3b4c5d6e\n",
    );
    let config = resolve(project.path()).expect("resolves");
    assert_eq!(config.url(), "");
    assert_eq!(config.support_url(), "");
}

#[test]
fn test_missing_icon_names_resolved_path() {
    let project = common::project(&common::pubspec("  installer_icon: assets/app.ico\n"));
    match expect_config_error(project.path()) {
        ConfigError::IconNotFound(path) => {
            assert!(path.is_absolute());
            assert!(path.starts_with(project.path()));
            assert!(path.ends_with("assets/app.ico"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_missing_license_is_rejected() {
    let project = common::project(&common::pubspec("  license_file: LICENSE.txt\n"));
    assert!(matches!(
        expect_config_error(project.path()),
        ConfigError::LicenseNotFound(_)
    ));

    std::fs::write(project.path().join("LICENSE.txt"), "MIT").expect("write license");
    let config = resolve(project.path()).expect("resolves");
    assert!(config.license_file().is_some());
}

#[test]
fn test_languages_keep_manifest_order() {
    let project = common::project(&common::pubspec("  languages:\n    - french\n    - german\n"));
    let config = resolve(project.path()).expect("resolves");
    assert_eq!(config.languages(), &[Language::French, Language::German]);
}

#[test]
fn test_unknown_language_is_reported() {
    let project = common::project(&common::pubspec("  languages: [english, Klingon]\n"));
    assert_eq!(
        expect_config_error(project.path()),
        ConfigError::UnknownLanguage("Klingon".into())
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let project = common::project(&common::pubspec(
        "  name: Demo\n  publisher: Acme\n  languages: [german, english]\n  admin: false\n",
    ));
    let first = resolve(project.path()).expect("first");
    let second = resolve(project.path()).expect("second");
    assert_eq!(first, second);
    assert_eq!(first.to_env_string(), second.to_env_string());
}

#[test]
fn test_override_version_takes_precedence() {
    let project = common::project(&common::pubspec("  version: 2.0.0\n"));
    let manifest = load_manifest(project.path()).expect("manifest loads");
    let config = ConfigBuilder::new(&manifest)
        .work_dir(project.path())
        .overrides(Overrides {
            app_version: Some("9.9.9".into()),
            ..Default::default()
        })
        .build()
        .expect("resolves");
    assert_eq!(config.version(), "9.9.9");
    assert_eq!(config.installer_name(), "DemoApp-x86_64-9.9.9-Installer");
}

#[test]
fn test_non_boolean_admin_is_rejected() {
    let project = common::project(&common::pubspec("  admin: maybe\n"));
    assert!(matches!(
        expect_config_error(project.path()),
        ConfigError::InvalidType { .. }
    ));
}
