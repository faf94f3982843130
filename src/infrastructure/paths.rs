//! Path handling for the Zellij sandbox.
//!
//! In Zellij's plugin environment `/host` points at the cwd of the last
//! focused terminal, or the folder Zellij was started from. When Zellij runs
//! from a home directory terminal this is the user's home, which is how `~`
//! is resolved.

use std::path::PathBuf;

/// Where the host filesystem is mounted inside the sandbox.
pub const HOST_MOUNT: &str = "/host";

/// Directory holding the plugin's trace files.
///
/// Resolves to `~/.local/share/zellij/zcatalog` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_MOUNT).join(".local/share/zellij/zcatalog")
}

/// Maps a path from the plugin configuration into the sandbox.
///
/// A leading `~` becomes [`HOST_MOUNT`]; any other path is used as given.
///
/// # Examples
///
/// ```
/// use zcatalog::infrastructure::resolve_user_path;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_user_path("~/shop/products.json"), PathBuf::from("/host/shop/products.json"));
/// assert_eq!(resolve_user_path("~"), PathBuf::from("/host"));
/// assert_eq!(resolve_user_path("/data/p.json"), PathBuf::from("/data/p.json"));
/// ```
#[must_use]
pub fn resolve_user_path(path: &str) -> PathBuf {
    let path = path.trim();
    if path == "~" {
        return PathBuf::from(HOST_MOUNT);
    }
    path.strip_prefix("~/").map_or_else(
        || PathBuf::from(path),
        |rest| PathBuf::from(HOST_MOUNT).join(rest),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/zcatalog")
        );
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(resolve_user_path("~user/x"), PathBuf::from("~user/x"));
        assert_eq!(resolve_user_path(" ~/a "), PathBuf::from("/host/a"));
        assert_eq!(resolve_user_path("rel/p.json"), PathBuf::from("rel/p.json"));
    }
}
