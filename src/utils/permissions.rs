use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;

/// Cross-platform file permissions handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePermissions {
    mode: u32,
}

impl FilePermissions {
    /// Create permissions from a raw mode value
    #[must_use]
    pub const fn from_mode(mode: u32) -> Self {
        Self { mode }
    }

    /// Get the raw mode value
    #[must_use]
    pub const fn mode(&self) -> u32 {
        self.mode
    }

    /// Read permissions from a file, following symlinks
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(Self::from_mode(metadata.mode()))
        }

        #[cfg(not(unix))]
        {
            // Read-only flag is the only permission we can carry over
            let mode = if metadata.permissions().readonly() {
                0o444
            } else {
                0o644
            };
            Ok(Self::from_mode(mode))
        }
    }

    /// Apply permissions to a path
    ///
    /// # Errors
    ///
    /// Returns an error if the permissions cannot be set
    pub fn apply_to_path(&self, path: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(self.mode))?;
        }

        #[cfg(not(unix))]
        {
            let is_readonly = (self.mode & 0o200) == 0;
            let mut permissions = fs::metadata(path)?.permissions();
            permissions.set_readonly(is_readonly);
            fs::set_permissions(path, permissions)?;
        }

        Ok(())
    }
}

/// Copies permissions and access/modification times from `src` onto `dst`.
///
/// Symlinks on `src` are followed.
///
/// # Errors
///
/// Returns an error if metadata cannot be read from `src` or written to `dst`
pub fn copy_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;

    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(dst, atime, mtime)?;

    // Permissions last: a read-only mode would block the timestamp update on
    // some platforms
    FilePermissions::from_path(src)?.apply_to_path(dst)
}

/// Copies file content and metadata from `src` to `dst`
///
/// # Errors
///
/// Returns an error if:
/// - Failed to copy the file
/// - Failed to preserve permissions or timestamps
pub fn copy_with_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;
    copy_metadata(src, dst)
}
