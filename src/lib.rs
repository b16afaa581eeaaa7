//! Platform directories - where an application should keep its files.
//!
//! Resolves per-user data, configuration, cache, log and runtime directories, the common user
//! folders (documents, downloads, ...) and system-wide search paths, following each platform's
//! own convention:
//!
//! * Linux (and every platform other than macOS and Windows): XDG Base Directory Specification
//!   and `user-dirs.dirs`.
//! * macOS: `~/Library`.
//! * Windows: `%APPDATA%`, `%LOCALAPPDATA%` and `%PROGRAMDATA%`.
//!
//! Nothing is created or checked on disk, and nothing fails: missing or invalid overrides fall
//! back to the platform default.
//!
//! The free functions below follow the platform the crate was compiled for and read the process
//! environment on every call. Use [`platform_dirs`] or [`PlatformDirs::with_env`] to pick another
//! platform or to evaluate against a synthetic environment.
//!
//! ```rust
//! # use platform_dirs::os::env::Env;
//! # use platform_dirs::{DirectoryProvider, Platform, PlatformDirs};
//! # use std::path::PathBuf;
//! let env: Env = [("HOME", "/Users/alice")].into_iter().collect();
//! let dirs = PlatformDirs::with_env(Platform::Darwin, env);
//!
//! assert_eq!(
//!     dirs.user_data_dir("SuperApp", Some("Acme")),
//!     PathBuf::from("/Users/alice/Library/Application Support/SuperApp"),
//! );
//! assert_eq!(dirs.runtime_dir("SuperApp"), None);
//! ```

use std::path::PathBuf;

pub mod os;
pub mod path;
pub mod platforms;
pub mod xdg;

pub use platforms::{
    AppDataBase, DarwinDirs, DirectoryProvider, LinuxDirs, Platform, PlatformDirs, WindowsDirs,
    platform_dirs,
};
pub use xdg::user_dirs::UserDir;

fn current() -> PlatformDirs {
    PlatformDirs::new(Platform::current())
}

/// [`DirectoryProvider::user_data_dir`] for the current platform.
pub fn user_data_dir(app: &str, author: Option<&str>) -> PathBuf {
    current().user_data_dir(app, author)
}

/// [`DirectoryProvider::user_config_dir`] for the current platform.
pub fn user_config_dir(app: &str, author: Option<&str>) -> PathBuf {
    current().user_config_dir(app, author)
}

/// [`DirectoryProvider::user_cache_dir`] for the current platform.
pub fn user_cache_dir(app: &str, author: Option<&str>) -> PathBuf {
    current().user_cache_dir(app, author)
}

/// [`DirectoryProvider::user_log_dir`] for the current platform.
pub fn user_log_dir(app: &str, author: Option<&str>) -> PathBuf {
    current().user_log_dir(app, author)
}

/// [`DirectoryProvider::runtime_dir`] for the current platform.
pub fn runtime_dir(app: &str) -> Option<PathBuf> {
    current().runtime_dir(app)
}

/// [`DirectoryProvider::site_data_dir`] for the current platform.
pub fn site_data_dir(app: Option<&str>, author: Option<&str>) -> Vec<PathBuf> {
    current().site_data_dir(app, author)
}

/// [`DirectoryProvider::site_config_dir`] for the current platform.
pub fn site_config_dir(app: Option<&str>, author: Option<&str>) -> Vec<PathBuf> {
    current().site_config_dir(app, author)
}

/// [`DirectoryProvider::user_documents_dir`] for the current platform.
pub fn user_documents_dir() -> PathBuf {
    current().user_documents_dir()
}

/// [`DirectoryProvider::user_downloads_dir`] for the current platform.
pub fn user_downloads_dir() -> PathBuf {
    current().user_downloads_dir()
}

/// [`DirectoryProvider::user_pictures_dir`] for the current platform.
pub fn user_pictures_dir() -> PathBuf {
    current().user_pictures_dir()
}

/// [`DirectoryProvider::user_videos_dir`] for the current platform.
pub fn user_videos_dir() -> PathBuf {
    current().user_videos_dir()
}

/// [`DirectoryProvider::user_music_dir`] for the current platform.
pub fn user_music_dir() -> PathBuf {
    current().user_music_dir()
}

/// [`DirectoryProvider::user_desktop_dir`] for the current platform.
pub fn user_desktop_dir() -> PathBuf {
    current().user_desktop_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_follow_current_platform() {
        let dirs = PlatformDirs::new(Platform::current());
        assert_eq!(user_data_dir("TestApp", None), dirs.user_data_dir("TestApp", None));
        assert_eq!(user_log_dir("TestApp", None), dirs.user_log_dir("TestApp", None));
        assert_eq!(
            site_config_dir(Some("TestApp"), None),
            dirs.site_config_dir(Some("TestApp"), None)
        );
        assert_eq!(user_desktop_dir(), dirs.user_desktop_dir());
    }

    #[test]
    fn free_functions_are_absolute() {
        let syntax = Platform::current().path_syntax();
        for path in [
            user_data_dir("TestApp", None),
            user_config_dir("TestApp", None),
            user_cache_dir("TestApp", None),
            user_documents_dir(),
            user_downloads_dir(),
            user_pictures_dir(),
            user_videos_dir(),
            user_music_dir(),
        ] {
            let path = path.to_str().expect("paths are UTF-8");
            assert!(syntax.is_absolute(path), "{path} is not absolute");
        }
    }
}
