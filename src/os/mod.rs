//! OS-level inputs of directory resolution.
//!
//! [`env::Env`] is the single source of environmental variables, the home directory and the user
//! id for every lookup in this crate.

pub mod env;
