//! Tracking model: groups of dotfile paths and the manifest that persists them.
//!
//! - [`Group`] - a named, ordered set of tracked paths
//! - [`Manifest`] - every group, loaded from and flushed to the manifest document
//!
//! # Usage
//!
//! ```no_run
//! use dot_tracker::tracking::{Group, Manifest};
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> anyhow::Result<()> {
//! let (mut manifest, _load_error) = Manifest::open(
//!     PathBuf::from("/home/user/dotfiles"),
//!     PathBuf::from("/home/user/dotfiles/repo.yml"),
//! );
//!
//! if manifest.find_by_path(Path::new("/home/user/.vimrc")).is_empty() {
//!     manifest.add_group(Group::new(
//!         Some("vim".to_string()),
//!         vec![PathBuf::from("/home/user/.vimrc")],
//!     ));
//!     manifest.flush()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod group;
pub mod manifest;

pub use group::{Group, GroupRecord};
pub use manifest::{Manifest, PathMatch, PathRemoval};
