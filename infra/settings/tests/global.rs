//! Global-state tests live in their own binary so the process-wide
//! `OnceLock` starts untouched.

use ccrm_settings::{Settings, SettingsError};
use std::path::PathBuf;

#[test]
fn explicit_init_wins_and_cannot_be_repeated() {
    let custom =
        Settings { data_dir: PathBuf::from("/srv/data"), backup_dir: PathBuf::from("/srv/backup") };

    Settings::init(custom.clone()).expect("first init");
    assert_eq!(Settings::global(), &custom);

    // A second install is rejected; the first value stays visible.
    let err = Settings::init(Settings::default()).unwrap_err();
    assert!(matches!(err, SettingsError::AlreadyInitialized));
    assert_eq!(Settings::global(), &custom);
}
