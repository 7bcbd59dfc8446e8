//! Store gateway: copies tracked paths into the managed store directory.
//!
//! Every tracked path lands at `store_root/<file name>`. Files are copied with
//! their permissions and timestamps; directories are copied recursively and
//! merged into whatever already exists at the destination. Symlinks are
//! followed, so the store always holds real content.

use crate::error::{Result, TrackerError};
use crate::utils::paths;
use crate::utils::permissions::{copy_metadata, copy_with_metadata};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Managed directory holding copies of tracked dotfiles
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Create a gateway for the given store directory
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the store directory if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn ensure_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Where `source` is stored, or `None` if it has no file name
    #[must_use]
    pub fn destination_for(&self, source: &Path) -> Option<PathBuf> {
        source.file_name().map(|name| self.root.join(name))
    }

    /// Copy `source` into the store and return its destination
    ///
    /// # Errors
    ///
    /// - [`TrackerError::AlreadyTracked`] if the destination exists and
    ///   `overwrite` is false
    /// - [`TrackerError::Copy`] for any I/O failure, including a missing source
    ///   or a source that already is the store copy
    pub fn copy_in(&self, source: &Path, overwrite: bool) -> Result<PathBuf> {
        let copy_err = |source_err: io::Error| TrackerError::Copy {
            path: source.to_path_buf(),
            source: source_err,
        };

        let destination = self.destination_for(source).ok_or_else(|| {
            copy_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path has no file name",
            ))
        })?;

        // Copying a file onto itself truncates it
        if is_store_copy(source, &destination) {
            return Err(copy_err(same_file_error()));
        }

        if destination.exists() && !overwrite {
            return Err(TrackerError::AlreadyTracked { path: destination });
        }

        let metadata = fs::metadata(source).map_err(copy_err)?;
        if metadata.is_dir() {
            copy_tree(source, &destination).map_err(copy_err)?;
        } else {
            if destination.is_dir() {
                return Err(copy_err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} is a directory in the store", destination.display()),
                )));
            }
            fs::create_dir_all(&self.root).map_err(copy_err)?;
            copy_with_metadata(source, &destination).map_err(copy_err)?;
        }

        Ok(destination)
    }
}

/// Whether `source` and `destination` are the same file on disk
fn is_store_copy(source: &Path, destination: &Path) -> bool {
    destination.exists() && paths::same_target(source, destination)
}

fn same_file_error() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "source is the store copy")
}

/// Recursively copy `src` into `dst`, merging with existing content
fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if is_store_copy(entry.path(), &target) {
            return Err(same_file_error());
        } else {
            copy_with_metadata(entry.path(), &target)?;
        }
    }

    // Subdirectory metadata after their content so mtimes are not clobbered
    for entry in WalkDir::new(src).follow_links(true).contents_first(true) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            copy_metadata(entry.path(), &dst.join(relative))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("store"));
        (dir, store)
    }

    #[test]
    fn test_copy_file() {
        let (dir, store) = setup();
        let src = dir.path().join(".vimrc");
        fs::write(&src, "set number").unwrap();

        let dst = store.copy_in(&src, false).unwrap();
        assert_eq!(dst, store.root().join(".vimrc"));
        assert_eq!(fs::read_to_string(dst).unwrap(), "set number");
    }

    #[test]
    fn test_existing_destination_without_overwrite() {
        let (dir, store) = setup();
        let src = dir.path().join(".bashrc");
        fs::write(&src, "one").unwrap();
        store.copy_in(&src, false).unwrap();

        fs::write(&src, "two").unwrap();
        assert!(matches!(
            store.copy_in(&src, false),
            Err(TrackerError::AlreadyTracked { .. })
        ));
        assert_eq!(
            fs::read_to_string(store.root().join(".bashrc")).unwrap(),
            "one"
        );

        store.copy_in(&src, true).unwrap();
        assert_eq!(
            fs::read_to_string(store.root().join(".bashrc")).unwrap(),
            "two"
        );
    }

    #[test]
    fn test_copy_directory_merges() {
        let (dir, store) = setup();
        let src = dir.path().join("nvim");
        fs::create_dir_all(src.join("lua/plugins")).unwrap();
        fs::write(src.join("init.lua"), "require('plugins')").unwrap();
        fs::write(src.join("lua/plugins/init.lua"), "return {}").unwrap();

        let existing = store.root().join("nvim");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("old.lua"), "-- keep").unwrap();

        let dst = store.copy_in(&src, true).unwrap();
        assert_eq!(dst, existing);
        assert!(dst.join("init.lua").is_file());
        assert_eq!(
            fs::read_to_string(dst.join("lua/plugins/init.lua")).unwrap(),
            "return {}"
        );
        assert!(dst.join("old.lua").is_file());
    }

    #[test]
    #[cfg(unix)]
    fn test_copy_follows_symlink() {
        let (dir, store) = setup();
        let real = dir.path().join("real_gitconfig");
        fs::write(&real, "[user]").unwrap();
        let link = dir.path().join(".gitconfig");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let dst = store.copy_in(&link, false).unwrap();
        assert!(!fs::symlink_metadata(&dst).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(dst).unwrap(), "[user]");
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_into_store_is_not_truncated() {
        let (dir, store) = setup();
        store.ensure_exists().unwrap();
        let stored = store.root().join(".vimrc");
        fs::write(&stored, "set number\nsyntax on\n").unwrap();
        let link = dir.path().join(".vimrc");
        std::os::unix::fs::symlink(&stored, &link).unwrap();

        let result = store.copy_in(&link, true);
        assert!(matches!(result, Err(TrackerError::Copy { .. })));
        assert_eq!(
            fs::read_to_string(&stored).unwrap(),
            "set number\nsyntax on\n"
        );

        // A path already inside the store is the same file too
        assert!(matches!(
            store.copy_in(&stored, true),
            Err(TrackerError::Copy { .. })
        ));
        assert_eq!(
            fs::read_to_string(&stored).unwrap(),
            "set number\nsyntax on\n"
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_tree_with_file_linked_into_store_is_not_truncated() {
        let (dir, store) = setup();
        let stored_dir = store.root().join("nvim");
        fs::create_dir_all(&stored_dir).unwrap();
        fs::write(stored_dir.join("init.lua"), "vim.o.number = true").unwrap();

        let src = dir.path().join("nvim");
        fs::create_dir_all(&src).unwrap();
        std::os::unix::fs::symlink(stored_dir.join("init.lua"), src.join("init.lua")).unwrap();

        assert!(matches!(
            store.copy_in(&src, true),
            Err(TrackerError::Copy { .. })
        ));
        assert_eq!(
            fs::read_to_string(stored_dir.join("init.lua")).unwrap(),
            "vim.o.number = true"
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_copy_directory_preserves_directory_metadata() {
        use filetime::FileTime;
        use std::os::unix::fs::PermissionsExt;

        let (dir, store) = setup();
        let src = dir.path().join("zsh");
        let sub = src.join("functions");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("prompt.zsh"), "PROMPT='%~ '").unwrap();

        let past = FileTime::from_unix_time(1_500_000_000, 0);
        for d in [&sub, &src] {
            fs::set_permissions(d, fs::Permissions::from_mode(0o750)).unwrap();
            filetime::set_file_mtime(d, past).unwrap();
        }

        let dst = store.copy_in(&src, false).unwrap();

        for d in [dst.join("functions"), dst.clone()] {
            let meta = fs::metadata(&d).unwrap();
            assert_eq!(meta.permissions().mode() & 0o777, 0o750, "{}", d.display());
            assert_eq!(FileTime::from_last_modification_time(&meta), past);
        }
    }

    #[test]
    fn test_missing_source_is_copy_error() {
        let (dir, store) = setup();
        let result = store.copy_in(&dir.path().join("missing"), false);
        assert!(matches!(result, Err(TrackerError::Copy { .. })));
    }

    #[test]
    fn test_root_has_no_file_name() {
        let (_dir, store) = setup();
        assert!(store.destination_for(Path::new("/")).is_none());
        assert!(matches!(
            store.copy_in(Path::new("/"), true),
            Err(TrackerError::Copy { .. })
        ));
    }
}
