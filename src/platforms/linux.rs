//! XDG rules, used on Linux and every platform without its own provider.

use std::path::PathBuf;

use crate::os::env::{Env, EnvSource};
use crate::path::PathSyntax;
use crate::platforms::{DirectoryProvider, Platform};
use crate::xdg::{self, user_dirs::{self, UserDir}};

const SYNTAX: PathSyntax = PathSyntax::Posix;

/// Linux directories.
///
/// | directory | path |
/// |-----------|------|
/// | data      | `$XDG_DATA_HOME/<app>` or `~/.local/share/<app>` |
/// | config    | `$XDG_CONFIG_HOME/<app>` or `~/.config/<app>` |
/// | cache     | `$XDG_CACHE_HOME/<app>` or `~/.cache/<app>` |
/// | log       | `$XDG_STATE_HOME/<app>/logs` or `~/.local/state/<app>/logs` |
/// | runtime   | `$XDG_RUNTIME_DIR/<app>` or `/run/user/<uid>/<app>` |
/// | site data | `$XDG_DATA_DIRS` or `/usr/local/share:/usr/share`, each with `/<app>` |
/// | site config | `$XDG_CONFIG_DIRS` or `/etc/xdg`, each with `/<app>` |
/// | user folders | `user-dirs.dirs` entry or `~/<Folder>` |
///
/// XDG has no vendor namespace, so `author` is ignored.
#[derive(Debug, Clone, Default)]
pub struct LinuxDirs {
    env: EnvSource,
}

impl LinuxDirs {
    /// Provider reading the process environment on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider evaluated against a fixed `env`.
    pub fn with_env(env: Env) -> Self {
        Self { env: env.into() }
    }

    fn site_dirs(dirs: Vec<String>, app: Option<&str>) -> Vec<PathBuf> {
        let app = app.unwrap_or_default();
        dirs.iter()
            .map(|dir| PathBuf::from(SYNTAX.join([dir.as_str(), app])))
            .collect()
    }
}

impl DirectoryProvider for LinuxDirs {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn user_data_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        let env = self.env.snapshot();
        SYNTAX.join([xdg::data_home(&env).as_str(), app]).into()
    }

    fn user_config_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        let env = self.env.snapshot();
        SYNTAX.join([xdg::config_home(&env).as_str(), app]).into()
    }

    fn user_cache_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        let env = self.env.snapshot();
        SYNTAX.join([xdg::cache_home(&env).as_str(), app]).into()
    }

    fn user_log_dir(&self, app: &str, _author: Option<&str>) -> PathBuf {
        let env = self.env.snapshot();
        SYNTAX
            .join([xdg::state_home(&env).as_str(), app, "logs"])
            .into()
    }

    fn runtime_dir(&self, app: &str) -> Option<PathBuf> {
        let env = self.env.snapshot();
        xdg::runtime_dir(&env).map(|base| SYNTAX.join([base.as_str(), app]).into())
    }

    fn site_data_dir(&self, app: Option<&str>, _author: Option<&str>) -> Vec<PathBuf> {
        Self::site_dirs(xdg::data_dirs(&self.env.snapshot()), app)
    }

    fn site_config_dir(&self, app: Option<&str>, _author: Option<&str>) -> Vec<PathBuf> {
        Self::site_dirs(xdg::config_dirs(&self.env.snapshot()), app)
    }

    fn user_dir(&self, dir: UserDir) -> PathBuf {
        user_dirs::resolve_dir(&self.env.snapshot(), dir).into()
    }
}
