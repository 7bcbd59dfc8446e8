//! Utility functions and helpers.
//!
//! - [`paths`]: tilde expansion, absolutizing and path resolution
//! - [`permissions`]: metadata-preserving file copies

/// Path manipulation and resolution utilities
pub mod paths;
/// Permission and timestamp handling
pub mod permissions;

pub use paths::{expand_tilde, make_absolute, resolve, same_target};
