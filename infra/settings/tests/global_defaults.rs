//! Lazy-default behavior gets its own binary: the process-wide `OnceLock`
//! must be untouched when `global` is first called.

use ccrm_settings::{Settings, SettingsError};

#[test]
fn first_global_access_installs_defaults() {
    assert_eq!(Settings::global(), &Settings::default());

    // The lazy install counts as initialization; an explicit one now fails
    // and the defaults stay visible.
    let err = Settings::init(Settings::default()).unwrap_err();
    assert!(matches!(err, SettingsError::AlreadyInitialized));
    assert_eq!(Settings::global(), &Settings::default());
}
