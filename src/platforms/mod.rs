//! Per-platform directory providers and the platform selector.
//!
//! Each platform implements [`DirectoryProvider`]; [`PlatformDirs`] is the sum of the three and
//! is what [`platform_dirs`] hands out.
//!
//! ```rust
//! # use platform_dirs::os::env::Env;
//! # use platform_dirs::platforms::{DirectoryProvider, Platform, PlatformDirs};
//! # use std::path::PathBuf;
//! let env: Env = [("XDG_DATA_HOME", "/tmp/xdg_data")].into_iter().collect();
//! let dirs = PlatformDirs::with_env(Platform::Linux, env);
//!
//! assert_eq!(dirs.user_data_dir("TestApp", None), PathBuf::from("/tmp/xdg_data/TestApp"));
//! assert_eq!(dirs.site_data_dir(Some("TestApp"), None).len(), 2);
//! ```

use std::fmt;
use std::path::PathBuf;

use tracing::trace;

use crate::os::env::Env;
use crate::path::PathSyntax;
use crate::xdg::user_dirs::UserDir;

pub mod darwin;
pub mod linux;
pub mod windows;

pub use darwin::DarwinDirs;
pub use linux::LinuxDirs;
pub use windows::{AppDataBase, WindowsDirs};

/// Operating system family whose directory conventions are followed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Platform {
    /// XDG rules. Also used for every platform without its own rules.
    Linux,
    /// Apple `~/Library` layout.
    Darwin,
    /// `%APPDATA%`, `%LOCALAPPDATA%` and `%PROGRAMDATA%`.
    Windows,
}

impl Platform {
    /// Platform this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Linux
        }
    }

    /// Identifier of this platform: `linux`, `darwin` or `win32`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Windows => "win32",
        }
    }

    /// Path syntax results for this platform are written in.
    pub const fn path_syntax(self) -> PathSyntax {
        match self {
            Platform::Windows => PathSyntax::Windows,
            Platform::Linux | Platform::Darwin => PathSyntax::Posix,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// `win32` and `darwin` select their platform, every other identifier selects
/// [`Platform::Linux`].
impl From<&str> for Platform {
    fn from(id: &str) -> Self {
        match id {
            "win32" => Platform::Windows,
            "darwin" => Platform::Darwin,
            _ => Platform::Linux,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directories an application is expected to use on one platform.
///
/// `author` is only meaningful on Windows and is ignored elsewhere. Every returned path is
/// absolute in the platform's [`PathSyntax`].
pub trait DirectoryProvider {
    /// Platform whose rules are implemented.
    fn platform(&self) -> Platform;

    /// Per-user application data.
    fn user_data_dir(&self, app: &str, author: Option<&str>) -> PathBuf;

    /// Per-user application configuration.
    fn user_config_dir(&self, app: &str, author: Option<&str>) -> PathBuf;

    /// Per-user, non-essential cached data.
    fn user_cache_dir(&self, app: &str, author: Option<&str>) -> PathBuf;

    /// Per-user log files.
    fn user_log_dir(&self, app: &str, author: Option<&str>) -> PathBuf;

    /// Per-session runtime files (sockets, locks). [`None`] where there is no such directory.
    fn runtime_dir(&self, app: &str) -> Option<PathBuf>;

    /// System-wide data search paths, most important first.
    fn site_data_dir(&self, app: Option<&str>, author: Option<&str>) -> Vec<PathBuf>;

    /// System-wide configuration search paths, most important first.
    fn site_config_dir(&self, app: Option<&str>, author: Option<&str>) -> Vec<PathBuf>;

    /// One of the common per-user folders.
    fn user_dir(&self, dir: UserDir) -> PathBuf;

    /// Shortcut for [`UserDir::Documents`].
    fn user_documents_dir(&self) -> PathBuf {
        self.user_dir(UserDir::Documents)
    }

    /// Shortcut for [`UserDir::Downloads`].
    fn user_downloads_dir(&self) -> PathBuf {
        self.user_dir(UserDir::Downloads)
    }

    /// Shortcut for [`UserDir::Pictures`].
    fn user_pictures_dir(&self) -> PathBuf {
        self.user_dir(UserDir::Pictures)
    }

    /// Shortcut for [`UserDir::Videos`].
    fn user_videos_dir(&self) -> PathBuf {
        self.user_dir(UserDir::Videos)
    }

    /// Shortcut for [`UserDir::Music`].
    fn user_music_dir(&self) -> PathBuf {
        self.user_dir(UserDir::Music)
    }

    /// Shortcut for [`UserDir::Desktop`].
    fn user_desktop_dir(&self) -> PathBuf {
        self.user_dir(UserDir::Desktop)
    }
}

/// Provider for any [`Platform`].
#[derive(Debug, Clone)]
pub enum PlatformDirs {
    /// XDG rules.
    Linux(LinuxDirs),
    /// `~/Library` rules.
    Darwin(DarwinDirs),
    /// `%APPDATA%` rules.
    Windows(WindowsDirs),
}

impl PlatformDirs {
    /// Provider for `platform` reading the process environment on every call.
    pub fn new(platform: Platform) -> Self {
        match platform {
            Platform::Linux => PlatformDirs::Linux(LinuxDirs::new()),
            Platform::Darwin => PlatformDirs::Darwin(DarwinDirs::new()),
            Platform::Windows => PlatformDirs::Windows(WindowsDirs::new()),
        }
    }

    /// Provider for `platform` evaluated against a fixed `env`.
    pub fn with_env(platform: Platform, env: Env) -> Self {
        match platform {
            Platform::Linux => PlatformDirs::Linux(LinuxDirs::with_env(env)),
            Platform::Darwin => PlatformDirs::Darwin(DarwinDirs::with_env(env)),
            Platform::Windows => PlatformDirs::Windows(WindowsDirs::with_env(env)),
        }
    }

    /// Windows provider, for its roaming/local variants.
    pub fn as_windows(&self) -> Option<&WindowsDirs> {
        match self {
            PlatformDirs::Windows(dirs) => Some(dirs),
            _ => None,
        }
    }
}

impl Default for PlatformDirs {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

macro_rules! delegate_to_platform {
    (
        $(
            fn $name:ident(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty;
        )*
    ) => {
        $(
            fn $name(&self $(, $arg: $ty)*) -> $ret {
                match self {
                    PlatformDirs::Linux(dirs) => dirs.$name($($arg),*),
                    PlatformDirs::Darwin(dirs) => dirs.$name($($arg),*),
                    PlatformDirs::Windows(dirs) => dirs.$name($($arg),*),
                }
            }
        )*
    };
}

impl DirectoryProvider for PlatformDirs {
    delegate_to_platform!(
        fn platform(&self) -> Platform;
        fn user_data_dir(&self, app: &str, author: Option<&str>) -> PathBuf;
        fn user_config_dir(&self, app: &str, author: Option<&str>) -> PathBuf;
        fn user_cache_dir(&self, app: &str, author: Option<&str>) -> PathBuf;
        fn user_log_dir(&self, app: &str, author: Option<&str>) -> PathBuf;
        fn runtime_dir(&self, app: &str) -> Option<PathBuf>;
        fn site_data_dir(&self, app: Option<&str>, author: Option<&str>) -> Vec<PathBuf>;
        fn site_config_dir(&self, app: Option<&str>, author: Option<&str>) -> Vec<PathBuf>;
        fn user_dir(&self, dir: UserDir) -> PathBuf;
    );
}

/// Provider for `platform`, or for [`Platform::current`] if it is [`None`].
///
/// Unknown identifiers are not an error, they get the Linux rules:
///
/// ```rust
/// # use platform_dirs::platforms::{platform_dirs, DirectoryProvider, Platform};
/// assert_eq!(platform_dirs(Some("win32")).platform(), Platform::Windows);
/// assert_eq!(platform_dirs(Some("freebsd")).platform(), Platform::Linux);
/// ```
pub fn platform_dirs(platform: Option<&str>) -> PlatformDirs {
    let platform = platform.map_or_else(Platform::current, Platform::from);
    trace!(%platform, "selected directory provider");
    PlatformDirs::new(platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_some};

    fn env() -> Env {
        [
            ("XDG_DATA_HOME", "/tmp/xdg_data"),
            ("XDG_RUNTIME_DIR", "/tmp/xdg_runtime"),
            ("APPDATA", r"C:\Users\TestUser\AppData\Roaming"),
        ]
        .into_iter()
        .collect::<Env>()
        .with_home("/home/alice")
    }

    #[test]
    fn identifiers() {
        assert_eq!(Platform::from("win32"), Platform::Windows);
        assert_eq!(Platform::from("darwin"), Platform::Darwin);
        assert_eq!(Platform::from("linux"), Platform::Linux);
        assert_eq!(Platform::from("aix"), Platform::Linux);
        assert_eq!(Platform::from(""), Platform::Linux);
        for platform in [Platform::Linux, Platform::Darwin, Platform::Windows] {
            assert_eq!(Platform::from(platform.as_str()), platform);
            assert_eq!(platform.to_string(), platform.as_str());
        }
    }

    #[test]
    fn current_platform() {
        let expected = if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Linux
        };
        assert_eq!(Platform::current(), expected);
        assert_eq!(platform_dirs(None).platform(), expected);
    }

    #[test]
    fn unknown_platform_matches_linux() {
        let unknown = PlatformDirs::with_env(Platform::from("sunos"), env());
        let linux = PlatformDirs::with_env(Platform::from("linux"), env());
        assert_eq!(unknown.platform(), Platform::Linux);
        assert_eq!(
            unknown.user_data_dir("TestApp", None),
            linux.user_data_dir("TestApp", None)
        );
        assert_eq!(
            unknown.site_config_dir(Some("TestApp"), None),
            linux.site_config_dir(Some("TestApp"), None)
        );
        assert_eq!(unknown.runtime_dir("TestApp"), linux.runtime_dir("TestApp"));
    }

    #[test]
    fn delegation_reaches_provider() {
        let dirs = PlatformDirs::with_env(Platform::Windows, env());
        assert_some!(dirs.as_windows());
        assert_none!(dirs.runtime_dir("TestApp"));
        assert_eq!(
            dirs.user_data_dir("TestApp", Some("DefendIT")),
            PathBuf::from(r"C:\Users\TestUser\AppData\Roaming\DefendIT\TestApp")
        );

        let dirs = PlatformDirs::with_env(Platform::Darwin, env());
        assert_none!(dirs.as_windows());
        assert_eq!(dirs.user_videos_dir(), PathBuf::from("/home/alice/Movies"));
    }

    #[test]
    fn results_are_absolute() {
        for platform in [Platform::Linux, Platform::Darwin, Platform::Windows] {
            let dirs = PlatformDirs::with_env(platform, env().with_uid(1000));
            let syntax = platform.path_syntax();
            let mut paths = vec![
                dirs.user_data_dir("TestApp", Some("DefendIT")),
                dirs.user_config_dir("TestApp", Some("DefendIT")),
                dirs.user_cache_dir("TestApp", Some("DefendIT")),
                dirs.user_log_dir("TestApp", Some("DefendIT")),
            ];
            paths.extend(UserDir::ALL.map(|dir| dirs.user_dir(dir)));
            paths.extend(dirs.site_data_dir(Some("TestApp"), Some("DefendIT")));
            paths.extend(dirs.site_config_dir(Some("TestApp"), Some("DefendIT")));
            paths.extend(dirs.runtime_dir("TestApp"));
            for path in paths {
                let path = path.to_str().expect("paths are UTF-8");
                assert!(syntax.is_absolute(path), "{platform}: {path} is not absolute");
            }
        }
    }

    #[test]
    fn lookups_are_idempotent() {
        let dirs = PlatformDirs::with_env(Platform::Linux, env().with_uid(1000));
        assert_eq!(
            dirs.user_log_dir("TestApp", None),
            dirs.user_log_dir("TestApp", None)
        );
        assert_eq!(dirs.runtime_dir("TestApp"), dirs.runtime_dir("TestApp"));
        assert_eq!(dirs.site_data_dir(None, None), dirs.site_data_dir(None, None));
    }
}
