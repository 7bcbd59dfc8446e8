use crate::TrackerContext;
use crate::output::Reporter;
use crate::tracking::manifest::MANIFEST_HEADER;
use crate::utils::paths::ensure_parent_dirs;
use anyhow::{Context, Result};

/// Create the store directory and an empty manifest document
///
/// An existing manifest is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - Failed to create the store directory
/// - Failed to write the manifest document
pub fn execute(ctx: &TrackerContext, reporter: &Reporter) -> Result<()> {
    let store = ctx.store();
    store
        .ensure_exists()
        .with_context(|| format!("Failed to create store: {}", store.root().display()))?;

    let manifest_path = ctx.manifest_path();
    if manifest_path.exists() {
        reporter.info(&format!(
            "Manifest already exists at {}",
            manifest_path.display()
        ));
        return Ok(());
    }

    ensure_parent_dirs(&manifest_path)
        .and_then(|()| std::fs::write(&manifest_path, MANIFEST_HEADER))
        .with_context(|| {
            format!(
                "Failed to create manifest file: {}",
                manifest_path.display()
            )
        })?;

    tracing::debug!(path = %manifest_path.display(), "created manifest");
    reporter.success(&format!(
        "Initialized store at {} with manifest {}",
        store.root().display(),
        manifest_path.display()
    ));
    Ok(())
}
