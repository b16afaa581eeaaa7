use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;
use tracing::warn;

/// Snapshot of the process environment which directory lookups are computed from.
///
/// Besides environmental variables it carries the home directory and the user id, so that a
/// synthetic machine can be described without touching the real process state. Lookups are
/// case-insensitive on Windows, like the environment they model.
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,

    home: String,

    uid: Option<u32>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Snapshot the current process: [`std::env::vars_os`], [`std::env::home_dir`] and, on unix,
    /// the real user id.
    pub fn new() -> Self {
        let mut env = Self::new_from(std::env::vars_os().collect());
        env.home = match std::env::home_dir().and_then(|home| home.to_str().map(str::to_owned)) {
            Some(home) if !home.is_empty() => home,
            _ => {
                let root = env.filesystem_root();
                warn!(%root, "could not determine home directory, using filesystem root");
                root
            }
        };
        env.uid = current_uid();
        env
    }

    /// Create new [`Env`] using `keys` as existing environmental variables.
    ///
    /// Home directory is taken from `$HOME`, then `$USERPROFILE`, then the filesystem root. No
    /// user id is set, see [`Env::with_uid`].
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        let mut this = Self {
            keys: env.clone(),
            normalised_keys: Env::normalize_map(env),
            home: String::new(),
            uid: None,
        };
        this.home = this
            .var("HOME")
            .or_else(|| this.var_ci("USERPROFILE"))
            .map(str::to_owned)
            .unwrap_or_else(|| this.filesystem_root());
        this
    }

    /// Replace the home directory.
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// Replace the user id used for `/run/user/<uid>`.
    pub fn with_uid(mut self, uid: u32) -> Self {
        self.uid = Some(uid);
        self
    }

    fn filesystem_root(&self) -> String {
        if cfg!(windows) {
            format!("{}\\", self.var_ci("SystemDrive").unwrap_or("C:"))
        } else {
            "/".to_owned()
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// Reload environmental variables from `env`. Home directory and user id are kept.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        let normalised = Env::normalize_map(env.clone());
        self.keys = env;
        self.normalised_keys = normalised;
    }

    /// Reload everything from the current process.
    pub fn reload(&mut self) {
        *self = Self::new();
    }

    /// Home directory of this snapshot.
    pub fn home(&self) -> &str {
        &self.home
    }

    /// User id of this snapshot, if known.
    pub fn uid(&self) -> Option<u32> {
        self.uid
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - key for environmental variable. Must implement `AsRef<OsStr>`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use platform_dirs::os::env::Env;
    ///
    /// let env = Env::new();
    /// println!("$FOO = {:?}", env.get_os("FOO"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        if cfg!(target_os = "windows") {
            self.get_os_ci(key)
        } else {
            self.keys.get(key).map(|x| x.as_ref())
        }
    }

    /// Like [`Env::get_os`], but the key is matched case-insensitively on every host.
    ///
    /// An exact match wins over one differing only in case.
    pub fn get_os_ci(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => self
                .normalised_keys
                .get(&Env::normalize_key(key))
                .map(|x| x.as_ref()),
        }
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Result<&str, EnvStrError>`. `Ok` variant indicates existing UTF-8 variable, `Err`
    /// indicates some kind of error. See [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust
    /// use platform_dirs::os::env::Env;
    ///
    /// let env: Env = [("XDG_DATA_HOME", "/tmp/xdg_data")].into_iter().collect();
    /// assert_eq!(env.get("XDG_DATA_HOME").ok(), Some("/tmp/xdg_data"));
    /// assert!(env.get("XDG_CACHE_HOME").is_err());
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }

    /// Like [`Env::get`], but an empty value counts as unset and errors are dropped.
    ///
    /// This is the lookup every directory rule uses: `FOO=` behaves exactly like a missing `FOO`.
    pub fn var(&self, key: impl AsRef<OsStr>) -> Option<&str> {
        self.get(key).ok().filter(|value| !value.is_empty())
    }

    /// Like [`Env::var`], but with Windows key rules: `ProgramData` and `PROGRAMDATA` name the
    /// same variable regardless of the host the lookup runs on.
    ///
    /// ```rust
    /// use platform_dirs::os::env::Env;
    ///
    /// let env: Env = [("LocalAppData", r"D:\Local")].into_iter().collect();
    /// assert_eq!(env.var_ci("LOCALAPPDATA"), Some(r"D:\Local"));
    /// ```
    pub fn var_ci(&self, key: impl AsRef<OsStr>) -> Option<&str> {
        self.get_os_ci(key)
            .and_then(OsStr::to_str)
            .filter(|value| !value.is_empty())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(unix)]
fn current_uid() -> Option<u32> {
    // SAFETY: `getuid` is always successful and has no preconditions.
    Some(unsafe { libc::getuid() })
}

#[cfg(not(unix))]
fn current_uid() -> Option<u32> {
    None
}

/// Where a directory provider takes its [`Env`] from.
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// Take a new [`Env::new`] snapshot on every lookup.
    #[default]
    Process,
    /// Always use this environment.
    Fixed(Env),
}

impl EnvSource {
    /// Environment to evaluate the next lookup against.
    pub fn snapshot(&self) -> Cow<'_, Env> {
        match self {
            EnvSource::Process => Cow::Owned(Env::new()),
            EnvSource::Fixed(env) => Cow::Borrowed(env),
        }
    }
}

impl From<Env> for EnvSource {
    fn from(env: Env) -> Self {
        EnvSource::Fixed(env)
    }
}
