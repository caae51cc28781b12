use ccrm_settings::{Settings, SettingsError};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn defaults_match_the_stock_layout() {
    let settings = Settings::default();
    assert_eq!(settings.data_dir, PathBuf::from("data"));
    assert_eq!(settings.backup_dir, PathBuf::from("backup"));
}

#[test]
fn load_without_a_file_falls_back_to_defaults() {
    let settings = Settings::load(None::<&str>).expect("load with no sources");
    assert_eq!(settings, Settings::default());
}

#[test]
fn load_layers_file_values_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "data_dir = \"/srv/ccrm/data\"").unwrap();

    let settings = Settings::load(Some(&path)).expect("load from file");

    assert_eq!(settings.data_dir, PathBuf::from("/srv/ccrm/data"));
    // Unset in the file: keeps the default.
    assert_eq!(settings.backup_dir, PathBuf::from("backup"));
}

#[test]
fn env_overrides_layer_over_file_values() {
    // The override layer reads the real process environment; re-run this
    // test in a child process with the variables injected.
    if std::env::var_os("CCRM_SETTINGS_ENV_CASE").is_none() {
        let status = std::process::Command::new(std::env::current_exe().unwrap())
            .args(["env_overrides_layer_over_file_values", "--exact"])
            .env("CCRM_SETTINGS_ENV_CASE", "1")
            .env("CCRM__DATA_DIR", "/srv/env-data")
            .status()
            .expect("spawn settings test child");
        assert!(status.success());
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "data_dir = \"/srv/file-data\"").unwrap();
    writeln!(file, "backup_dir = \"/srv/file-backup\"").unwrap();

    let settings = Settings::load(Some(&path)).expect("load with env overrides");

    // Environment wins over the file; the file wins over the default.
    assert_eq!(settings.data_dir, PathBuf::from("/srv/env-data"));
    assert_eq!(settings.backup_dir, PathBuf::from("/srv/file-backup"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, SettingsError::Config { .. }));
}
