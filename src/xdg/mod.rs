//! XDG Base Directory Specification support.
//!
//! Resolves the per-user base directories (`$XDG_DATA_HOME` and friends) and the system-wide
//! search paths (`$XDG_DATA_DIRS`, `$XDG_CONFIG_DIRS`) from an [`Env`], with the fallbacks the
//! specification defines. Every override must be an absolute path, anything else is ignored.
//!
//! ```rust
//! # use platform_dirs::os::env::Env;
//! # use platform_dirs::xdg;
//! let env: Env = [("HOME", "/home/alice"), ("XDG_DATA_HOME", "/tmp/xdg_data")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(xdg::data_home(&env), "/tmp/xdg_data");
//! assert_eq!(xdg::cache_home(&env), "/home/alice/.cache");
//! ```

use tracing::{debug, trace};

use crate::os::env::Env;
use crate::path::PathSyntax;

pub mod user_dirs;

const SYNTAX: PathSyntax = PathSyntax::Posix;

const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";
const DEFAULT_CONFIG_DIRS: &str = "/etc/xdg";

fn base_dir(env: &Env, var: &str, fallback: &[&str]) -> String {
    match env.var(var) {
        Some(value) if SYNTAX.is_absolute(value) => {
            trace!(var, value, "using XDG override");
            value.to_owned()
        }
        value => {
            if let Some(value) = value {
                debug!(var, value, "ignoring non-absolute XDG override");
            }
            SYNTAX.join(std::iter::once(env.home()).chain(fallback.iter().copied()))
        }
    }
}

/// `$XDG_DATA_HOME`, or `~/.local/share`.
pub fn data_home(env: &Env) -> String {
    base_dir(env, "XDG_DATA_HOME", &[".local", "share"])
}

/// `$XDG_CONFIG_HOME`, or `~/.config`.
pub fn config_home(env: &Env) -> String {
    base_dir(env, "XDG_CONFIG_HOME", &[".config"])
}

/// `$XDG_CACHE_HOME`, or `~/.cache`.
pub fn cache_home(env: &Env) -> String {
    base_dir(env, "XDG_CACHE_HOME", &[".cache"])
}

/// `$XDG_STATE_HOME`, or `~/.local/state`.
pub fn state_home(env: &Env) -> String {
    base_dir(env, "XDG_STATE_HOME", &[".local", "state"])
}

/// `$XDG_RUNTIME_DIR`, or `/run/user/<uid>`.
///
/// # Returns
///
/// [`None`] if the chosen base is not absolute, or if `$XDG_RUNTIME_DIR` is unset and `env` has
/// no user id.
pub fn runtime_dir(env: &Env) -> Option<String> {
    let base = env
        .var("XDG_RUNTIME_DIR")
        .map(str::to_owned)
        .or_else(|| env.uid().map(|uid| format!("/run/user/{uid}")))?;
    if SYNTAX.is_absolute(&base) {
        Some(base)
    } else {
        debug!(%base, "runtime directory is not absolute");
        None
    }
}

fn search_dirs(env: &Env, var: &str, default: &str) -> Vec<String> {
    env.var(var)
        .unwrap_or(default)
        .split(':')
        .filter(|dir| {
            let keep = SYNTAX.is_absolute(dir);
            if !keep {
                debug!(var, dir, "dropping non-absolute search directory");
            }
            keep
        })
        .map(str::to_owned)
        .collect()
}

/// `$XDG_DATA_DIRS` split on `:`, or `/usr/local/share:/usr/share`. Non-absolute entries are
/// dropped, order is preserved.
pub fn data_dirs(env: &Env) -> Vec<String> {
    search_dirs(env, "XDG_DATA_DIRS", DEFAULT_DATA_DIRS)
}

/// `$XDG_CONFIG_DIRS` split on `:`, or `/etc/xdg`. Non-absolute entries are dropped, order is
/// preserved.
pub fn config_dirs(env: &Env) -> Vec<String> {
    search_dirs(env, "XDG_CONFIG_DIRS", DEFAULT_CONFIG_DIRS)
}
