//! Manifest of tracked groups.
//!
//! The manifest is the source of truth for "what is tracked". It lives in
//! memory as an ordered list of [`Group`]s and is persisted as a multi-document
//! YAML stream, one `{id, paths}` mapping per document.
//!
//! # Mutate-then-flush
//!
//! Every mutation happens in memory first. [`Manifest::flush`] rewrites the
//! whole document from the current state, so the file on disk is always an
//! exact snapshot of some in-memory state. A failed flush means memory is ahead
//! of disk and must be treated as fatal by the caller.
//!
//! The document is not locked. Two processes mutating the same manifest race,
//! and the last flush wins.

use super::group::{Group, GroupRecord};
use crate::error::{Result, TrackerError};
use crate::utils::paths;
use crate::utils::permissions::FilePermissions;
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header written into a freshly created manifest
pub const MANIFEST_HEADER: &str = "# Repository of dot files tracker\n";

/// A tracked path found by [`Manifest::find_by_path`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMatch<'a> {
    /// Group holding the path
    pub group: &'a Group,
    /// The stored entry that matched
    pub path: &'a Path,
}

/// Outcome of [`Manifest::remove_path_from_group`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRemoval {
    /// At least one entry was removed and the manifest was flushed
    Removed,
    /// No group has the requested id
    GroupNotFound,
    /// The group exists but does not track the path
    PathNotFound,
}

/// In-memory collection of groups bound to a manifest document and a store
#[derive(Debug, Clone)]
pub struct Manifest {
    groups: Vec<Group>,
    store_root: PathBuf,
    manifest_path: PathBuf,
}

impl Manifest {
    /// Create an empty manifest. Nothing is read until [`Manifest::load`].
    #[must_use]
    pub fn new(store_root: PathBuf, manifest_path: PathBuf) -> Self {
        Self {
            groups: Vec::new(),
            store_root,
            manifest_path,
        }
    }

    /// Create a manifest and load it from disk.
    ///
    /// Loading failures are not fatal: the manifest is returned empty along
    /// with the error so the caller can report it.
    #[must_use]
    pub fn open(store_root: PathBuf, manifest_path: PathBuf) -> (Self, Option<TrackerError>) {
        let mut manifest = Self::new(store_root, manifest_path);
        let error = manifest.load().err();
        (manifest, error)
    }

    /// Replace the in-memory groups with the persisted document
    ///
    /// Returns the number of groups loaded. On error the manifest is left
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ManifestLoad`] if the document is missing,
    /// unreadable or not a valid group stream.
    pub fn load(&mut self) -> Result<usize> {
        self.groups.clear();

        let content = std::fs::read_to_string(&self.manifest_path).map_err(|e| {
            TrackerError::ManifestLoad {
                path: self.manifest_path.clone(),
                missing: e.kind() == std::io::ErrorKind::NotFound,
                reason: e.to_string(),
            }
        })?;

        self.groups = decode(&content).map_err(|e| TrackerError::ManifestLoad {
            path: self.manifest_path.clone(),
            reason: e.to_string(),
            missing: false,
        })?;

        Ok(self.groups.len())
    }

    /// Append a group. Duplicate ids are allowed.
    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Every stored path, across all groups, resolving to the same target as
    /// `path`
    #[must_use]
    pub fn find_by_path(&self, path: &Path) -> Vec<PathMatch<'_>> {
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .matching_paths(path)
                    .map(move |p| PathMatch { group, path: p })
            })
            .collect()
    }

    /// [`Manifest::find_by_path`] over several candidate paths
    #[must_use]
    pub fn find_any<P: AsRef<Path>>(&self, candidates: &[P]) -> Vec<PathMatch<'_>> {
        candidates
            .iter()
            .flat_map(|candidate| self.find_by_path(candidate.as_ref()))
            .collect()
    }

    /// Rename the first group with id `old_id` and flush
    ///
    /// Returns `false` without touching disk when no group matches.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Flush`] if the rename could not be persisted.
    pub fn rename_group(&mut self, old_id: &str, new_id: &str) -> Result<bool> {
        let Some(group) = self.groups.iter_mut().find(|g| g.id() == old_id) else {
            return Ok(false);
        };

        group.rename(new_id);
        self.flush()?;
        Ok(true)
    }

    /// Remove every group with the given id. The caller flushes.
    pub fn remove_group(&mut self, id: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id() != id);
        self.groups.len() != before
    }

    /// Remove `path` from every group with the given id, flushing on change
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Flush`] if the change could not be persisted.
    pub fn remove_path_from_group(&mut self, id: &str, path: &Path) -> Result<PathRemoval> {
        let mut found_group = false;
        let mut changed = false;

        for group in self.groups.iter_mut().filter(|g| g.id() == id) {
            found_group = true;
            changed |= group.remove_path(path);
        }

        if !found_group {
            return Ok(PathRemoval::GroupNotFound);
        }
        if !changed {
            return Ok(PathRemoval::PathNotFound);
        }

        self.flush()?;
        Ok(PathRemoval::Removed)
    }

    /// Rewrite the manifest document from the in-memory groups
    ///
    /// The document is written to a temporary file next to the target and
    /// renamed over it. A symlinked manifest is written through the link, and
    /// an existing document keeps its permissions.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Flush`] if encoding or any write step fails.
    pub fn flush(&self) -> Result<()> {
        let flush_err = |reason: String| TrackerError::Flush {
            path: self.manifest_path.clone(),
            reason,
        };

        let document = encode(&self.groups).map_err(|e| flush_err(e.to_string()))?;

        let target = write_target(&self.manifest_path);
        let existing_mode = FilePermissions::from_path(&target).ok();

        paths::ensure_parent_dirs(&target).map_err(|e| flush_err(e.to_string()))?;
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| flush_err(e.to_string()))?;
        tmp.write_all(document.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| flush_err(e.to_string()))?;
        if let Some(mode) = existing_mode {
            mode.apply_to_path(tmp.path())
                .map_err(|e| flush_err(e.to_string()))?;
        }
        tmp.persist(&target)
            .map_err(|e| flush_err(e.error.to_string()))?;

        Ok(())
    }

    /// All groups in insertion order
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no groups are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Directory holding copied dotfiles
    #[must_use]
    pub fn store_root(&self) -> &Path {
        &self.store_root
    }

    /// Location of the persisted document
    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

/// File the document is written to, following a symlinked manifest
fn write_target(manifest_path: &Path) -> PathBuf {
    if let Ok(resolved) = std::fs::canonicalize(manifest_path) {
        return resolved;
    }
    // Dangling link: write where it points
    match std::fs::read_link(manifest_path) {
        Ok(link) => manifest_path
            .parent()
            .map_or_else(|| link.clone(), |parent| parent.join(&link)),
        Err(_) => manifest_path.to_path_buf(),
    }
}

/// Decode a multi-document stream into groups, skipping empty documents
fn decode(content: &str) -> std::result::Result<Vec<Group>, serde_yaml::Error> {
    let has_content = content.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Ok(Vec::new());
    }

    let mut groups = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        if let Some(record) = Option::<GroupRecord>::deserialize(document)? {
            groups.push(Group::from(record));
        }
    }
    Ok(groups)
}

/// Encode groups as a multi-document stream
fn encode(groups: &[Group]) -> std::result::Result<String, serde_yaml::Error> {
    let mut out = String::new();
    for group in groups {
        out.push_str("---\n");
        out.push_str(&serde_yaml::to_string(&group.serialize())?);
    }
    Ok(out)
}
