//! Windows `%APPDATA%` / `%LOCALAPPDATA%` / `%PROGRAMDATA%` layout.

use std::path::PathBuf;

use tracing::debug;

use crate::os::env::{Env, EnvSource};
use crate::path::PathSyntax;
use crate::platforms::{DirectoryProvider, Platform};
use crate::xdg::user_dirs::UserDir;

const SYNTAX: PathSyntax = PathSyntax::Windows;

/// Which application data base to use.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum AppDataBase {
    /// `%APPDATA%`, follows the user across machines.
    #[default]
    Roaming,
    /// `%LOCALAPPDATA%`, stays on this machine.
    Local,
}

impl From<bool> for AppDataBase {
    /// `true` is [`AppDataBase::Roaming`].
    fn from(roaming: bool) -> Self {
        if roaming {
            AppDataBase::Roaming
        } else {
            AppDataBase::Local
        }
    }
}

/// Application data base directory.
///
/// `%APPDATA%` for [`AppDataBase::Roaming`], `%LOCALAPPDATA%` for [`AppDataBase::Local`]. If the
/// variable is unset or not absolute, `<home>\AppData\Roaming` or `<home>\AppData\Local`.
/// Variable names are matched case-insensitively, as Windows does.
pub fn resolve_app_data_base(env: &Env, base: AppDataBase) -> String {
    let (var, folder) = match base {
        AppDataBase::Roaming => ("APPDATA", "Roaming"),
        AppDataBase::Local => ("LOCALAPPDATA", "Local"),
    };
    match env.var_ci(var) {
        Some(value) if SYNTAX.is_absolute(value) => value.to_owned(),
        value => {
            if let Some(value) = value {
                debug!(var, value, "ignoring non-absolute app data directory");
            }
            SYNTAX.join([env.home(), "AppData", folder])
        }
    }
}

/// `%PROGRAMDATA%`, or `<%SystemDrive% or C:>\ProgramData` when it is unset or not absolute.
pub fn resolve_program_data_base(env: &Env) -> String {
    match env.var_ci("PROGRAMDATA") {
        Some(value) if SYNTAX.is_absolute(value) => value.to_owned(),
        value => {
            if let Some(value) = value {
                debug!(value, "ignoring non-absolute PROGRAMDATA");
            }
            let drive = env.var_ci("SystemDrive").unwrap_or("C:");
            SYNTAX.join([drive, "ProgramData"])
        }
    }
}

/// Windows directories.
///
/// The [`DirectoryProvider`] methods use [`AppDataBase::Roaming`]; the `*_with` methods take the
/// base explicitly.
///
/// ```rust
/// # use platform_dirs::os::env::Env;
/// # use platform_dirs::platforms::{AppDataBase, DirectoryProvider, WindowsDirs};
/// # use std::path::PathBuf;
/// let env: Env = [("USERPROFILE", r"C:\Users\Alice")].into_iter().collect();
/// let dirs = WindowsDirs::with_env(env);
///
/// assert_eq!(
///     dirs.user_cache_dir("SuperApp", Some("Acme")),
///     PathBuf::from(r"C:\Users\Alice\AppData\Roaming\Acme\SuperApp\Cache"),
/// );
/// assert_eq!(
///     dirs.user_data_dir_with("SuperApp", None, AppDataBase::Local),
///     PathBuf::from(r"C:\Users\Alice\AppData\Local\SuperApp"),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsDirs {
    env: EnvSource,
}

impl WindowsDirs {
    /// Provider reading the process environment on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider evaluated against a fixed `env`.
    pub fn with_env(env: Env) -> Self {
        Self { env: env.into() }
    }

    fn in_app_data(&self, base: AppDataBase, parts: &[&str]) -> PathBuf {
        let base = resolve_app_data_base(&self.env.snapshot(), base);
        SYNTAX
            .join(std::iter::once(base.as_str()).chain(parts.iter().copied()))
            .into()
    }

    /// `<base>\<author>\<app>`.
    pub fn user_data_dir_with(
        &self,
        app: &str,
        author: Option<&str>,
        base: AppDataBase,
    ) -> PathBuf {
        self.in_app_data(base, &[author.unwrap_or_default(), app])
    }

    /// Same as [`WindowsDirs::user_data_dir_with`].
    pub fn user_config_dir_with(
        &self,
        app: &str,
        author: Option<&str>,
        base: AppDataBase,
    ) -> PathBuf {
        self.in_app_data(base, &[author.unwrap_or_default(), app])
    }

    /// `<base>\<author>\<app>\Cache`.
    pub fn user_cache_dir_with(
        &self,
        app: &str,
        author: Option<&str>,
        base: AppDataBase,
    ) -> PathBuf {
        self.in_app_data(base, &[author.unwrap_or_default(), app, "Cache"])
    }

    /// `<base>\<author>\<app>\Cache\Logs`.
    pub fn user_log_dir_with(
        &self,
        app: &str,
        author: Option<&str>,
        base: AppDataBase,
    ) -> PathBuf {
        self.in_app_data(base, &[author.unwrap_or_default(), app, "Cache", "Logs"])
    }

    fn site_dir(&self, app: Option<&str>, author: Option<&str>) -> Vec<PathBuf> {
        let base = resolve_program_data_base(&self.env.snapshot());
        vec![
            SYNTAX
                .join([
                    base.as_str(),
                    author.unwrap_or_default(),
                    app.unwrap_or_default(),
                ])
                .into(),
        ]
    }
}

impl DirectoryProvider for WindowsDirs {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn user_data_dir(&self, app: &str, author: Option<&str>) -> PathBuf {
        self.user_data_dir_with(app, author, AppDataBase::default())
    }

    fn user_config_dir(&self, app: &str, author: Option<&str>) -> PathBuf {
        self.user_config_dir_with(app, author, AppDataBase::default())
    }

    fn user_cache_dir(&self, app: &str, author: Option<&str>) -> PathBuf {
        self.user_cache_dir_with(app, author, AppDataBase::default())
    }

    fn user_log_dir(&self, app: &str, author: Option<&str>) -> PathBuf {
        self.user_log_dir_with(app, author, AppDataBase::default())
    }

    fn runtime_dir(&self, _app: &str) -> Option<PathBuf> {
        None
    }

    fn site_data_dir(&self, app: Option<&str>, author: Option<&str>) -> Vec<PathBuf> {
        self.site_dir(app, author)
    }

    fn site_config_dir(&self, app: Option<&str>, author: Option<&str>) -> Vec<PathBuf> {
        self.site_dir(app, author)
    }

    fn user_dir(&self, dir: UserDir) -> PathBuf {
        let env = self.env.snapshot();
        SYNTAX.join([env.home(), dir.folder_name()]).into()
    }
}
