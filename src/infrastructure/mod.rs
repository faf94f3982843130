//! Filesystem conventions of the Zellij plugin sandbox.
//!
//! The host filesystem is visible to plugins under `/host`; user-supplied
//! paths from the plugin configuration are mapped onto it here.

pub mod paths;

pub use paths::{get_data_dir, resolve_user_path, HOST_MOUNT};
