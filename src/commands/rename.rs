use crate::TrackerContext;
use crate::error::TrackerError;
use crate::output::Reporter;
use anyhow::{Context, Result};

/// Execute rename command - rename the first group called `old`
///
/// # Errors
///
/// Returns an error if:
/// - No group is called `old` ([`TrackerError::NotFound`])
/// - The manifest cannot be written
pub fn execute(ctx: &TrackerContext, reporter: &Reporter, old: &str, new: &str) -> Result<()> {
    let mut manifest = super::open_manifest(ctx, reporter);

    let renamed = manifest
        .rename_group(old, new)
        .context("Rename applied in memory but the manifest was not saved")?;

    if !renamed {
        return Err(anyhow::Error::new(TrackerError::NotFound(format!(
            "group '{old}'"
        ))))
        .context("Nothing to rename");
    }

    tracing::debug!(old, new, "renamed group");
    reporter.success(&format!("Group {old} renamed to {new}"));
    Ok(())
}
