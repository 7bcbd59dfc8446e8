pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod rename;

use crate::TrackerContext;
use crate::error::TrackerError;
use crate::output::Reporter;
use crate::tracking::Manifest;

/// Load the manifest, reporting a load failure and carrying on empty
fn open_manifest(ctx: &TrackerContext, reporter: &Reporter) -> Manifest {
    let (manifest, load_error) = ctx.open_manifest();

    match load_error {
        Some(TrackerError::ManifestLoad {
            path,
            missing: true,
            ..
        }) => {
            tracing::debug!(path = %path.display(), "manifest document does not exist yet");
            reporter.info(&format!(
                "No manifest at {}, starting with an empty one",
                path.display()
            ));
        }
        Some(err) => {
            tracing::debug!(error = %err, "manifest load failed");
            reporter.warning(&format!("{err}; continuing with an empty manifest"));
        }
        None => {
            tracing::debug!(groups = manifest.len(), "manifest loaded");
        }
    }

    manifest
}
