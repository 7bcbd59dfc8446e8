//! A named set of tracked dotfile paths.

use crate::utils::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Persisted form of a [`Group`], one per manifest document.
///
/// `name` and `files` are the key names older manifests were written with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupRecord {
    /// Group identifier
    #[serde(alias = "name")]
    pub id: String,
    /// Tracked paths in insertion order
    #[serde(alias = "files", default)]
    pub paths: Vec<PathBuf>,
}

/// A named group of tracked paths.
///
/// The id only changes through [`Group::rename`]; the path list only shrinks
/// through [`Group::remove_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: String,
    paths: Vec<PathBuf>,
}

impl Group {
    /// Create a group, generating a random id when none is given
    #[must_use]
    pub fn new(id: Option<String>, paths: Vec<PathBuf>) -> Self {
        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Self { id, paths }
    }

    /// Group identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tracked paths in insertion order
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Replace the id. Uniqueness is the manifest's concern.
    pub fn rename(&mut self, new_id: impl Into<String>) {
        self.id = new_id.into();
    }

    /// Remove every entry resolving to the same target as `path`
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_path(&mut self, path: &Path) -> bool {
        let Some(target) = paths::resolve(path) else {
            return false;
        };

        let before = self.paths.len();
        self.paths
            .retain(|p| paths::resolve(p).is_none_or(|resolved| resolved != target));
        self.paths.len() != before
    }

    /// Entries resolving to the same target as `path`
    pub fn matching_paths<'a>(&'a self, path: &Path) -> impl Iterator<Item = &'a Path> + use<'a> {
        let target = paths::resolve(path);
        self.paths.iter().map(PathBuf::as_path).filter(move |p| {
            target
                .as_ref()
                .is_some_and(|target| paths::resolve(p).as_ref() == Some(target))
        })
    }

    /// Plain record for the persisted document
    #[must_use]
    pub fn serialize(&self) -> GroupRecord {
        GroupRecord {
            id: self.id.clone(),
            paths: self.paths.clone(),
        }
    }
}

impl From<GroupRecord> for Group {
    fn from(record: GroupRecord) -> Self {
        Self {
            id: record.id,
            paths: record.paths,
        }
    }
}
