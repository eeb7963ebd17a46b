//! Script generation against staged build directories.

mod common;

use inno_bundle::bundler::{ConfigBuilder, Error, ResolvedConfig, ScriptBuilder};
use inno_bundle::metadata::Manifest;
use std::path::{Path, PathBuf};

fn config(project: &Path, tool: &str) -> ResolvedConfig {
    config_from(project, &common::pubspec(tool))
}

fn config_from(project: &Path, pubspec: &str) -> ResolvedConfig {
    let manifest = Manifest::from_yaml_str(pubspec).expect("yaml");
    ConfigBuilder::new(&manifest)
        .work_dir(project)
        .build()
        .expect("resolves")
}

/// Builds the script with staging and System32 kept inside `project`
fn build(config: &ResolvedConfig, project: &Path, dlls: &[&str]) -> PathBuf {
    let system = common::system_dir(project, dlls);
    ScriptBuilder::new(config, project.join("build/windows/x64/runner/Release"))
        .work_dir(project)
        .system_dir(system)
        .staging_dir(project.join("staging"))
        .build()
        .expect("script builds")
}

fn section<'s>(script: &'s str, header: &str) -> &'s str {
    let start = script.find(header).expect("section present");
    let rest = &script[start..];
    let end = rest[1..].find("\n[").map_or(rest.len(), |i| i + 2);
    &rest[..end]
}

#[test]
fn test_script_lands_in_mode_output_dir() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "");

    let script = build(&config, project.path(), &[]);

    assert_eq!(
        script,
        project
            .path()
            .join("build/windows/x64/installer/Release/inno-script.iss")
    );
    let text = common::read_script(&script);
    assert!(text.starts_with("; Inno Setup script generated by inno_bundle."));
    let output_dir = project.path().join("build/windows/x64/installer/Release");
    assert!(text.contains(&format!("OutputDir={}\n", output_dir.display())));
}

#[test]
fn test_sections_appear_in_fixed_order() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "");
    let text = common::read_script(&build(&config, project.path(), &[]));

    let headers = [
        "[Setup]",
        "[InstallDelete]",
        "[Languages]",
        "[Tasks]",
        "[Files]",
        "[Icons]",
        "[Run]",
    ];
    let positions: Vec<usize> = headers
        .iter()
        .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    assert!(text.contains("[InstallDelete]\nType: filesandordirs; Name: \"{app}\\*\"\n"));
    assert!(text.contains("Flags: unchecked\n"));
}

#[test]
fn test_renamed_exe_is_the_only_renamed_file() {
    let project = tempfile::tempdir().expect("tempdir");
    let app_dir = common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "  name: Demo Studio\n");
    let text = common::read_script(&build(&config, project.path(), &[]));
    let files = section(&text, "[Files]");

    let exe = app_dir.join("demo_app.exe");
    assert!(files.contains(&format!(
        "Source: \"{}\"; DestDir: \"{{app}}\"; DestName: \"Demo Studio.exe\"; Flags: ignoreversion",
        exe.display()
    )));
    assert_eq!(files.matches("DestName:").count(), 1);
    assert!(files.contains(&format!(
        "Source: \"{}\"; DestDir: \"{{app}}\"; Flags: ignoreversion",
        app_dir.join("flutter_windows.dll").display()
    )));
    assert!(files.contains(&format!(
        "Source: \"{}\\*\"; DestDir: \"{{app}}\\data\"; Flags: ignoreversion recursesubdirs createallsubdirs",
        app_dir.join("data").display()
    )));

    let icons = section(&text, "[Icons]");
    assert!(icons.contains("Filename: \"{app}\\Demo Studio.exe\""));
    assert!(text.contains("[Run]\nFilename: \"{app}\\Demo Studio.exe\""));
}

#[test]
fn test_matching_names_need_no_rename() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "  name: demo_app\n");
    let text = common::read_script(&build(&config, project.path(), &[]));
    assert!(!text.contains("DestName:"));
}

#[test]
fn test_languages_section_follows_manifest_order() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "  languages: [french, german]\n");
    let text = common::read_script(&build(&config, project.path(), &[]));

    let languages = section(&text, "[Languages]");
    let entries: Vec<&str> = languages.lines().skip(1).filter(|l| !l.is_empty()).collect();
    assert_eq!(
        entries,
        [
            "Name: \"french\"; MessagesFile: \"compiler:Languages\\French.isl\"",
            "Name: \"german\"; MessagesFile: \"compiler:Languages\\German.isl\"",
        ]
    );
}

#[test]
fn test_per_user_install_uses_lowest_privileges() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");

    let config_user = config(project.path(), "  admin: false\n");
    let text = common::read_script(&build(&config_user, project.path(), &[]));
    assert!(text.contains("PrivilegesRequired=lowest\n"));
    assert!(!text.contains("PrivilegesRequired=admin"));

    let config_admin = config(project.path(), "");
    let text = common::read_script(&build(&config_admin, project.path(), &[]));
    assert!(text.contains("PrivilegesRequired=admin\n"));
}

#[test]
fn test_generation_is_idempotent() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "  name: Demo & Co\n");

    let first = std::fs::read(build(&config, project.path(), &["vcruntime140.dll"])).expect("read");
    let second = std::fs::read(build(&config, project.path(), &["vcruntime140.dll"])).expect("read");
    assert_eq!(first, second);
}

#[test]
fn test_runtime_dlls_found_are_staged_and_missing_skipped() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "");
    let text = common::read_script(&build(
        &config,
        project.path(),
        &["vcruntime140.dll", "msvcp140.dll"],
    ));

    let staged = project.path().join("staging/vcruntime");
    assert!(staged.join("vcruntime140.dll").is_file());
    assert!(staged.join("msvcp140.dll").is_file());
    assert!(!staged.join("vcruntime140_1.dll").exists());

    let files = section(&text, "[Files]");
    assert!(files.contains(&format!(
        "Source: \"{}\"; DestDir: \"{{app}}\"; Flags: ignoreversion",
        staged.join("vcruntime140.dll").display()
    )));
    assert!(!files.contains("vcruntime140_1.dll"));

    // App entries come before runtime entries
    let app_entry = files.find("flutter_windows.dll").expect("app entry");
    let dll_entry = files.find("msvcp140.dll").expect("dll entry");
    assert!(app_entry < dll_entry);
}

#[test]
fn test_vc_redist_off_skips_runtime_scan() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "  vc_redist: false\n");
    let text = common::read_script(&build(&config, project.path(), &["vcruntime140.dll"]));
    assert!(!text.contains("vcruntime140.dll"));
}

#[test]
fn test_default_icon_is_materialized() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "");
    let text = common::read_script(&build(&config, project.path(), &[]));

    let icon = project.path().join("staging/installer.ico");
    let bytes = std::fs::read(&icon).expect("icon written");
    assert_eq!(&bytes[..4], &[0, 0, 1, 0], "ICO header");
    assert!(text.contains(&format!("SetupIconFile={}\n", icon.display())));
}

#[test]
fn test_custom_icon_is_used_as_is() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    std::fs::write(project.path().join("brand.ico"), b"ico").expect("write icon");
    let config = config(project.path(), "  installer_icon: brand.ico\n");
    let text = common::read_script(&build(&config, project.path(), &[]));

    assert!(text.contains(&format!(
        "SetupIconFile={}\n",
        project.path().join("brand.ico").display()
    )));
    assert!(!project.path().join("staging/installer.ico").exists());
}

#[test]
fn test_license_file_is_emitted() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    std::fs::write(project.path().join("LICENSE"), "MIT").expect("write license");
    let config = config(project.path(), "  license_file: LICENSE\n");
    let text = common::read_script(&build(&config, project.path(), &[]));
    assert!(text.contains(&format!(
        "LicenseFile={}\nCompression=lzma2\n",
        project.path().join("LICENSE").display()
    )));
}

#[test]
fn test_missing_app_dir_is_an_io_error() {
    let project = tempfile::tempdir().expect("tempdir");
    let config = config(project.path(), "");
    let err = ScriptBuilder::new(&config, project.path().join("does/not/exist"))
        .work_dir(project.path())
        .staging_dir(project.path().join("staging"))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Fs { .. }), "{err:?}");
    assert!(err.to_string().contains("does/not/exist"));
}

#[test]
fn test_render_matches_written_script() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(project.path(), "");
    let system = common::system_dir(project.path(), &[]);

    let builder = ScriptBuilder::new(&config, project.path().join("build/windows/x64/runner/Release"))
        .work_dir(project.path())
        .system_dir(system)
        .staging_dir(project.path().join("staging"));
    let rendered = builder.render().expect("renders");
    let written = common::read_script(&builder.build().expect("script builds"));

    assert_eq!(rendered, written);
}

#[test]
fn test_free_text_setup_values_are_escaped() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config(
        project.path(),
        "  description: |\n    First line.\n    Second line.\n  publisher: Acme {Labs}\n",
    );
    let text = common::read_script(&build(&config, project.path(), &[]));
    let setup = section(&text, "[Setup]");

    assert!(setup.contains("AppComments=First line. Second line.\n"));
    assert!(setup.contains("AppPublisher=Acme {{Labs}\n"));
    let stray: Vec<&str> = setup
        .lines()
        .skip(1)
        .filter(|line| !line.is_empty() && !line.contains('='))
        .collect();
    assert!(stray.is_empty(), "non-directive lines: {stray:?}");
}

#[test]
fn test_top_level_admin_applies_without_tool_value() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config_from(project.path(), &format!("admin: false\n{}", common::pubspec("")));
    assert!(!config.admin());

    let text = common::read_script(&build(&config, project.path(), &[]));
    assert!(text.contains("PrivilegesRequired=lowest\n"));
}

#[test]
fn test_tool_admin_beats_top_level_admin() {
    let project = tempfile::tempdir().expect("tempdir");
    common::staged_app(project.path(), "demo_app.exe");
    let config = config_from(
        project.path(),
        &format!("admin: false\n{}", common::pubspec("  admin: true\n")),
    );
    assert!(config.admin());

    let text = common::read_script(&build(&config, project.path(), &[]));
    assert!(text.contains("PrivilegesRequired=admin\n"));
}
