//! Lexical path helpers shared by rule expansion and the hosts.
//!
//! Nothing in here touches the filesystem: candidate paths are frequently
//! files that do not exist yet, so canonicalization is not an option.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` and normalize it lexically.
///
/// - Relative paths are joined onto `base`
/// - `.` components are dropped, `..` pops the previous component
///   (never above the root)
/// - Separators are canonicalized by re-assembling the components
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Base name of a path, falling back to the whole path when it has none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a path relative to the workspace root for display.
///
/// Paths outside the workspace are shown in full.
pub fn format_relative_path(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => {
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                relative.display().to_string()
            }
        }
        Err(_) => path.display().to_string(),
    }
}
