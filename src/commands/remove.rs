use crate::TrackerContext;
use crate::output::Reporter;
use crate::tracking::PathRemoval;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute remove command - drop a whole group, or one file from a group
///
/// Without `file`, every group called `group` is removed. With `file`, the
/// entries resolving to that file are removed from those groups; a group left
/// without files is kept. Copies in the store are not deleted.
///
/// A missing group or file is reported as a warning, not an error.
///
/// # Errors
///
/// Returns an error if the manifest cannot be written.
pub fn execute(
    ctx: &TrackerContext,
    reporter: &Reporter,
    group: &str,
    file: Option<&Path>,
) -> Result<()> {
    let mut manifest = super::open_manifest(ctx, reporter);

    let Some(file) = file else {
        if !manifest.remove_group(group) {
            reporter.warning(&format!("{group}: there is no such group"));
            return Ok(());
        }

        manifest
            .flush()
            .context("Group removed in memory but the manifest was not saved")?;
        tracing::debug!(group, "removed group");
        reporter.success(&format!("Removed group {group}"));
        return Ok(());
    };

    let outcome = manifest
        .remove_path_from_group(group, file)
        .context("File removed in memory but the manifest was not saved")?;

    match outcome {
        PathRemoval::Removed => {
            tracing::debug!(group, file = %file.display(), "removed file from group");
            reporter.success(&format!(
                "Removed dotfile {} from group {group}",
                file.display()
            ));
        }
        PathRemoval::GroupNotFound => {
            reporter.warning(&format!("{group}: there is no such group"));
        }
        PathRemoval::PathNotFound => {
            reporter.warning(&format!(
                "{}: there is no such file in group {group}",
                file.display()
            ));
        }
    }

    Ok(())
}
