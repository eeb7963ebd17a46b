//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const APP_ID: &str = "5c3bd4a2-7e1f-4c8b-a9d6-0f2e3b4c5d6e";

/// Minimal valid pubspec.yaml; `tool` lines are appended to the inno_bundle section
pub fn pubspec(tool: &str) -> String {
    format!(
        "name: demo_app\n\
         description: A demo Flutter app\n\
         version: 1.0.0+1\n\
         maintainer: Acme Corp\n\
         homepage: https://acme.test\n\
         inno_bundle:\n  id: {APP_ID}\n{tool}"
    )
}

/// Writes pubspec.yaml into a fresh project directory
pub fn project(pubspec_text: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("pubspec.yaml"), pubspec_text).expect("write pubspec");
    dir
}

/// Creates a fake `flutter build windows` output under the project
pub fn staged_app(project: &Path, exe_name: &str) -> PathBuf {
    let app_dir = project.join("build/windows/x64/runner/Release");
    fs::create_dir_all(app_dir.join("data/flutter_assets")).expect("mkdir");
    fs::write(app_dir.join(exe_name), b"MZ").expect("write exe");
    fs::write(app_dir.join("flutter_windows.dll"), b"dll").expect("write dll");
    fs::write(app_dir.join("data/app.so"), b"so").expect("write so");
    app_dir
}

/// Creates a fake System32 holding the given DLL names
pub fn system_dir(root: &Path, dlls: &[&str]) -> PathBuf {
    let dir = root.join("System32");
    fs::create_dir_all(&dir).expect("mkdir");
    for dll in dlls {
        fs::write(dir.join(dll), dll.as_bytes()).expect("write dll");
    }
    dir
}

/// Reads a script, checking and stripping the UTF-8 BOM
pub fn read_script(path: &Path) -> String {
    let bytes = fs::read(path).expect("read script");
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF], "script must start with a BOM");
    String::from_utf8(bytes[3..].to_vec()).expect("utf-8")
}
