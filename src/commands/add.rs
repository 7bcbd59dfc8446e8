use crate::TrackerContext;
use crate::error::TrackerError;
use crate::output::Reporter;
use crate::tracking::Group;
use crate::utils::paths::{make_absolute, normalize_lexically};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Execute add command - track paths as a group and copy them into the store
///
/// The add is refused as a whole when any path is already tracked, unless
/// `overwrite` is set. Once accepted, the group is recorded and every path is
/// copied over whatever the store holds under the same name, even if some
/// copies fail; the manifest is flushed either way and the failures are
/// reported afterwards.
///
/// # Errors
///
/// Returns an error if:
/// - A path cannot be made absolute
/// - A path is already tracked and `overwrite` is false
/// - The manifest cannot be written
/// - Any path could not be copied into the store
pub fn execute(
    ctx: &TrackerContext,
    reporter: &Reporter,
    paths: &[String],
    group: Option<&str>,
    overwrite: bool,
) -> Result<()> {
    if paths.is_empty() {
        anyhow::bail!("No paths given");
    }

    let absolute = paths
        .iter()
        .map(|p| {
            make_absolute(&PathBuf::from(p))
                .map(|abs| normalize_lexically(&abs))
                .with_context(|| format!("Failed to resolve path: {p}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let group = Group::new(group.map(str::to_string), absolute);
    tracing::debug!(id = group.id(), paths = group.paths().len(), "candidate group");

    let mut manifest = super::open_manifest(ctx, reporter);

    let occurrences = manifest.find_any(group.paths());
    if !occurrences.is_empty() && !overwrite {
        for occurrence in &occurrences {
            reporter.warning(&format!(
                "{} is already tracked in group '{}'",
                occurrence.path.display(),
                occurrence.group.id()
            ));
        }
        let path = occurrences[0].path.to_path_buf();
        return Err(anyhow::Error::new(TrackerError::AlreadyTracked { path }))
            .context("Same dotfile already tracked (use --overwrite to track it again)");
    }

    let store = ctx.store();
    store
        .ensure_exists()
        .with_context(|| format!("Failed to create store: {}", store.root().display()))?;

    let id = group.id().to_string();
    let sources = group.paths().to_vec();
    manifest.add_group(group);

    let mut failures = Vec::new();
    for source in &sources {
        match store.copy_in(source, true) {
            Ok(destination) => {
                tracing::debug!(
                    source = %source.display(),
                    destination = %destination.display(),
                    "copied into store"
                );
                reporter.action("copied:", source.display());
                reporter.verbose(&format!("    stored at {}", destination.display()));
            }
            Err(err) => {
                tracing::debug!(source = %source.display(), error = %err, "copy failed");
                failures.push(err);
            }
        }
    }

    manifest.flush().context(
        "Manifest was not saved; the store may now hold files the manifest does not list",
    )?;

    if failures.is_empty() {
        reporter.success(&format!(
            "Tracking {} path(s) in group '{id}'",
            sources.len()
        ));
        return Ok(());
    }

    for failure in &failures {
        reporter.error(&failure.to_string());
    }
    anyhow::bail!(
        "{} of {} path(s) in group '{id}' could not be copied into the store",
        failures.len(),
        sources.len()
    )
}
