//! macOS `~/Library` layout.

use std::path::PathBuf;

use crate::os::env::{Env, EnvSource};
use crate::path::PathSyntax;
use crate::platforms::{DirectoryProvider, Platform};
use crate::xdg::user_dirs::UserDir;

const SYNTAX: PathSyntax = PathSyntax::Posix;

/// macOS directories.
///
/// Only the home directory is consulted. `author` is ignored, `~/Library` has a single level of
/// application folders.
#[derive(Debug, Clone, Default)]
pub struct DarwinDirs {
    env: EnvSource,
}

impl DarwinDirs {
    /// Provider reading the process environment on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider evaluated against a fixed `env`.
    pub fn with_env(env: Env) -> Self {
        Self { env: env.into() }
    }

    fn in_home(&self, parts: &[&str]) -> PathBuf {
        let env = self.env.snapshot();
        SYNTAX
            .join(std::iter::once(env.home()).chain(parts.iter().copied()))
            .into()
    }
}

impl DirectoryProvider for DarwinDirs {
    fn platform(&self) -> Platform {
        Platform::Darwin
    }

    fn user_data_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        self.in_home(&["Library", "Application Support", app])
    }

    fn user_config_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        self.in_home(&["Library", "Preferences", app])
    }

    fn user_cache_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        self.in_home(&["Library", "Caches", app])
    }

    fn user_log_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        self.in_home(&["Library", "Logs", app])
    }

    fn runtime_dir(&self, _app: &str) -> Option<PathBuf> {
        None
    }

    fn site_data_dir(&self, _app: Option<&str>, _author: Option<&str>) -> Vec<PathBuf> {
        vec![PathBuf::from("/Library/Application Support")]
    }

    fn site_config_dir(&self, _app: Option<&str>, _author: Option<&str>) -> Vec<PathBuf> {
        vec![PathBuf::from("/Library/Preferences")]
    }

    fn user_dir(&self, dir: UserDir) -> PathBuf {
        match dir {
            UserDir::Videos => self.in_home(&["Movies"]),
            dir => self.in_home(&[dir.folder_name()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::assert_none;

    fn dirs() -> DarwinDirs {
        DarwinDirs::with_env(
            // XDG variables have no effect here.
            [("XDG_DATA_HOME", "/tmp/xdg_data")]
                .into_iter()
                .collect::<Env>()
                .with_home("/Users/alice"),
        )
    }

    #[test]
    fn library_layout() {
        let dirs = dirs();
        assert_eq!(
            dirs.user_data_dir("TestApp", Some("DefendIT")),
            PathBuf::from("/Users/alice/Library/Application Support/TestApp")
        );
        assert_eq!(
            dirs.user_config_dir("TestApp", None),
            PathBuf::from("/Users/alice/Library/Preferences/TestApp")
        );
        assert_eq!(
            dirs.user_cache_dir("TestApp", None),
            PathBuf::from("/Users/alice/Library/Caches/TestApp")
        );
        assert_eq!(
            dirs.user_log_dir("TestApp", Some("DefendIT")),
            PathBuf::from("/Users/alice/Library/Logs/TestApp")
        );
    }

    #[test]
    fn no_runtime_dir() {
        assert_none!(dirs().runtime_dir("TestApp"));
    }

    #[test]
    fn site_dirs_are_constant() {
        let dirs = dirs();
        assert_eq!(
            dirs.site_data_dir(Some("TestApp"), Some("DefendIT")),
            [PathBuf::from("/Library/Application Support")]
        );
        assert_eq!(
            dirs.site_config_dir(None, None),
            [PathBuf::from("/Library/Preferences")]
        );
    }

    #[test]
    fn user_folders() {
        let dirs = dirs();
        assert_eq!(dirs.user_documents_dir(), PathBuf::from("/Users/alice/Documents"));
        assert_eq!(dirs.user_downloads_dir(), PathBuf::from("/Users/alice/Downloads"));
        assert_eq!(dirs.user_pictures_dir(), PathBuf::from("/Users/alice/Pictures"));
        assert_eq!(dirs.user_videos_dir(), PathBuf::from("/Users/alice/Movies"));
        assert_eq!(dirs.user_music_dir(), PathBuf::from("/Users/alice/Music"));
        assert_eq!(dirs.user_desktop_dir(), PathBuf::from("/Users/alice/Desktop"));
    }
}
