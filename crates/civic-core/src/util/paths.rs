//! Path utilities for configured directories.

use std::path::PathBuf;

/// Expand `~` and `$VAR` references in a configured path.
///
/// Unknown variables leave the input untouched rather than failing, so a
/// literal `$` in a directory name still resolves to something usable.
///
/// # Examples
///
/// ```
/// use civic_core::util::paths::expand_path;
///
/// assert_eq!(expand_path("data"), std::path::PathBuf::from("data"));
/// ```
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            log::warn!("Could not expand path '{raw}': {e}");
            PathBuf::from(shellexpand::tilde(raw).as_ref())
        }
    }
}
