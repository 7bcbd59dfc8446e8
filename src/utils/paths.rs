use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Ensures parent directories exist for a given path
///
/// # Errors
///
/// Returns an error if the parent directories cannot be created
pub fn ensure_parent_dirs(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Expands tilde in path to home directory
///
/// Paths that do not start with `~` (or when no home directory is known) are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(path_str) = path.to_str() else {
        return path.to_path_buf();
    };

    if path_str == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }

    if let Some(rest) = path_str.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    path.to_path_buf()
}

/// Makes a path absolute, resolving relative paths from current directory
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined
pub fn make_absolute(path: &Path) -> io::Result<PathBuf> {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(std::env::current_dir()?.join(expanded))
    }
}

/// Removes `.` components and folds `..` into its parent without touching the
/// filesystem.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }

    normalized
}

/// Resolves a path to the form used for equality checks.
///
/// The path is made absolute and canonicalized. When canonicalization fails,
/// usually because the path no longer exists, the lexically normalized
/// absolute path is used instead. Returns `None` only when the current
/// directory is unavailable for a relative path.
#[must_use]
pub fn resolve(path: &Path) -> Option<PathBuf> {
    let absolute = make_absolute(path).ok()?;
    Some(fs::canonicalize(&absolute).unwrap_or_else(|_| normalize_lexically(&absolute)))
}

/// Returns `true` when both paths resolve to the same target.
#[must_use]
pub fn same_target(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
