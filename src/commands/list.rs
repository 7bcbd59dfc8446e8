use crate::TrackerContext;
use crate::output::Reporter;
use anyhow::Result;

/// Execute list command - print every group and its files in manifest order
///
/// # Errors
///
/// Currently infallible; a manifest that cannot be loaded is reported and
/// listed as empty.
pub fn execute(ctx: &TrackerContext, reporter: &Reporter) -> Result<()> {
    let manifest = super::open_manifest(ctx, reporter);

    if manifest.is_empty() {
        reporter.info("No dotfiles tracked");
        return Ok(());
    }

    for group in manifest.groups() {
        reporter.heading(group.id());
        reporter.item(1, "files:");
        for path in group.paths() {
            reporter.item(2, path.display());
        }
    }

    Ok(())
}
