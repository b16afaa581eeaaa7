//! Providers built with `new()` read the process environment on every call.
//!
//! Kept in its own test binary: it is the only test that changes the process environment.

use std::path::PathBuf;

use platform_dirs::{DirectoryProvider, LinuxDirs};

const APP: &str = "TestApp";

#[test]
fn environment_changes_are_observed_between_calls() {
    let dirs = LinuxDirs::new();

    // SAFETY: this binary runs a single test, nothing else reads or writes the environment.
    unsafe { std::env::set_var("XDG_STATE_HOME", "/tmp/platform-dirs/state-a") };
    assert_eq!(
        dirs.user_log_dir(APP, None),
        PathBuf::from("/tmp/platform-dirs/state-a/TestApp/logs")
    );

    // SAFETY: as above.
    unsafe { std::env::set_var("XDG_STATE_HOME", "/tmp/platform-dirs/state-b") };
    assert_eq!(
        dirs.user_log_dir(APP, None),
        PathBuf::from("/tmp/platform-dirs/state-b/TestApp/logs")
    );

    // SAFETY: as above.
    unsafe { std::env::set_var("XDG_RUNTIME_DIR", "/tmp/platform-dirs/run") };
    assert_eq!(
        dirs.runtime_dir(APP),
        Some(PathBuf::from("/tmp/platform-dirs/run/TestApp"))
    );

    // SAFETY: as above.
    unsafe { std::env::remove_var("XDG_STATE_HOME") };
    let fallback = dirs.user_log_dir(APP, None);
    assert!(
        fallback.ends_with(".local/state/TestApp/logs"),
        "{} does not use the default state home",
        fallback.display()
    );
}
