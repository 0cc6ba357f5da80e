//! Workspace preparation: makes room for a fresh standard library install.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::archive::STDLIB_DIR;
use crate::runtime::Runtime;

/// Prepares the workspace directory for installation.
///
/// A missing workspace is created with all parents. An existing workspace
/// keeps everything except the `scout-std` subdirectory, which is removed
/// so extraction starts from a clean slate. Siblings are left untouched.
#[tracing::instrument(skip(runtime))]
pub fn prepare<R: Runtime>(runtime: &R, root: &Path) -> Result<()> {
    if !runtime.exists(root) {
        debug!("Creating workspace at {:?}", root);
        runtime
            .create_dir_all(root)
            .with_context(|| format!("Failed to create workspace at {:?}", root))?;
        return Ok(());
    }

    let stdlib_dir = root.join(STDLIB_DIR);
    if runtime.exists(&stdlib_dir) {
        debug!("Removing previous standard library at {:?}", stdlib_dir);
        runtime
            .remove_dir_all(&stdlib_dir)
            .with_context(|| format!("Failed to remove previous {} at {:?}", STDLIB_DIR, stdlib_dir))?;
    }

    Ok(())
}
