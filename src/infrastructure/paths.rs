//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`, rooted at the directory
//! the session was started from (usually the user's home).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Directory for the plugin's trace file.
///
/// ```
/// use zelect::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir(), std::path::Path::new("/host/.local/share/zellij/zelect"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/zelect")
}

/// Rewrites a `~`-prefixed path to its location under [`HOST_ROOT`].
///
/// Used for user-supplied paths such as `theme_file`.
///
/// ```
/// use zelect::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
