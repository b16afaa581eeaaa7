//! `user-dirs.dirs` support, as written by `xdg-user-dirs-update`.
//!
//! The file is a list of `KEY="value"` lines where a value may start with `$HOME`. Values are
//! found by pattern search over the whole file; this is not a shell parser and escaped quotes are
//! not handled.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

use crate::os::env::Env;
use crate::path::PathSyntax;

/// Name of the file under the XDG config root.
pub const USER_DIRS_FILE: &str = "user-dirs.dirs";

const SYNTAX: PathSyntax = PathSyntax::Posix;

/// Common per-user folders.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum UserDir {
    /// `XDG_DOCUMENTS_DIR`, `Documents`.
    Documents,
    /// `XDG_DOWNLOAD_DIR`, `Downloads`.
    Downloads,
    /// `XDG_PICTURES_DIR`, `Pictures`.
    Pictures,
    /// `XDG_VIDEOS_DIR`, `Videos` (`Movies` on macOS).
    Videos,
    /// `XDG_MUSIC_DIR`, `Music`.
    Music,
    /// `XDG_DESKTOP_DIR`, `Desktop`.
    Desktop,
}

impl UserDir {
    /// Every folder, in declaration order.
    pub const ALL: [UserDir; 6] = [
        UserDir::Documents,
        UserDir::Downloads,
        UserDir::Pictures,
        UserDir::Videos,
        UserDir::Music,
        UserDir::Desktop,
    ];

    /// Key of this folder in `user-dirs.dirs`.
    pub const fn xdg_key(self) -> &'static str {
        match self {
            UserDir::Documents => "XDG_DOCUMENTS_DIR",
            UserDir::Downloads => "XDG_DOWNLOAD_DIR",
            UserDir::Pictures => "XDG_PICTURES_DIR",
            UserDir::Videos => "XDG_VIDEOS_DIR",
            UserDir::Music => "XDG_MUSIC_DIR",
            UserDir::Desktop => "XDG_DESKTOP_DIR",
        }
    }

    /// Standard English folder name under the home directory.
    pub const fn folder_name(self) -> &'static str {
        match self {
            UserDir::Documents => "Documents",
            UserDir::Downloads => "Downloads",
            UserDir::Pictures => "Pictures",
            UserDir::Videos => "Videos",
            UserDir::Music => "Music",
            UserDir::Desktop => "Desktop",
        }
    }
}

/// Errors encountered when loading `user-dirs.dirs`.
#[derive(Debug, Error)]
pub enum UserDirsError {
    /// The file at `path` could not be read.
    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file at `path` is not valid UTF-8.
    #[error("`{path}` is not an UTF-8 file")]
    NonUTF8 { path: PathBuf },
}

/// Contents of `user-dirs.dirs`, values kept verbatim (no `$HOME` substitution).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirs {
    content: String,
}

impl UserDirs {
    /// Wrap file contents.
    ///
    /// Nothing is validated up front, lookups search the whole text. See [`UserDirs::get`].
    ///
    /// ```rust
    /// # use platform_dirs::xdg::user_dirs::UserDirs;
    /// let dirs = UserDirs::parse("# comment\nXDG_DOWNLOAD_DIR=\"$HOME/Downloads\"\n");
    /// assert_eq!(dirs.get("XDG_DOWNLOAD_DIR"), Some("$HOME/Downloads"));
    /// assert_eq!(dirs.get("XDG_MUSIC_DIR"), None);
    /// ```
    pub fn parse(content: &str) -> Self {
        Self {
            content: content.to_owned(),
        }
    }

    /// Read and [`parse`](UserDirs::parse) the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UserDirsError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| UserDirsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| UserDirsError::NonUTF8 {
            path: path.to_path_buf(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Raw value of the first `key = "value"` occurrence in the text.
    ///
    /// This is a plain pattern search, not a line parser: whitespace (newlines included) may
    /// surround `=`, the value must be non-empty and on one line, and it ends at the first
    /// following quote. Commented-out lines and keys that are a suffix of a longer name match
    /// too, as they do for other readers of this file.
    ///
    /// ```rust
    /// # use platform_dirs::xdg::user_dirs::UserDirs;
    /// let dirs = UserDirs::parse("# XDG_MUSIC_DIR=\"/srv/music\"\nXDG_MUSIC_DIR=\"/x\"\n");
    /// assert_eq!(dirs.get("XDG_MUSIC_DIR"), Some("/srv/music"));
    /// ```
    pub fn get(&self, key: &str) -> Option<&str> {
        let pattern = Regex::new(&format!(r#"{}\s*=\s*"(.+?)""#, regex::escape(key))).ok()?;
        pattern
            .captures(&self.content)?
            .get(1)
            .map(|value| value.as_str())
    }
}

/// Location of `user-dirs.dirs`: `$XDG_CONFIG_HOME/user-dirs.dirs`, or
/// `~/.config/user-dirs.dirs`.
pub fn file_path(env: &Env) -> String {
    let root = match env.var("XDG_CONFIG_HOME") {
        Some(root) => root.to_owned(),
        None => SYNTAX.join([env.home(), ".config"]),
    };
    SYNTAX.join([root.as_str(), USER_DIRS_FILE])
}

/// Resolve `key` from `user-dirs.dirs`, falling back to `~/<fallback>`.
///
/// A leading `$HOME` in the value is replaced with the home directory. The fallback is used when
/// the file is missing or unreadable, the key is absent, or the value is not absolute. A found
/// value is returned as written, it is not joined with `fallback`.
pub fn resolve(env: &Env, key: &str, fallback: &str) -> String {
    let fallback_dir = || SYNTAX.join([env.home(), fallback]);
    let path = file_path(env);
    if !Path::new(&path).exists() {
        trace!(%path, "no user-dirs file");
        return fallback_dir();
    }
    let dirs = match UserDirs::load(&path) {
        Ok(dirs) => dirs,
        Err(err) => {
            debug!(%err, "could not load user-dirs file");
            return fallback_dir();
        }
    };
    let Some(value) = dirs.get(key) else {
        trace!(%path, key, "key not present in user-dirs file");
        return fallback_dir();
    };
    let resolved = match value.strip_prefix("$HOME") {
        Some(rest) => format!("{}{rest}", env.home()),
        None => value.to_owned(),
    };
    if SYNTAX.is_absolute(&resolved) {
        resolved
    } else {
        debug!(key, value, "ignoring non-absolute user-dirs entry");
        fallback_dir()
    }
}

/// [`resolve`] for a [`UserDir`].
pub fn resolve_dir(env: &Env, dir: UserDir) -> String {
    resolve(env, dir.xdg_key(), dir.folder_name())
}
