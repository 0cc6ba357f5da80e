//! Selective extraction of the standard library from a release source archive.
//!
//! Release archives wrap their contents in a top-level `scout-lang-<version>/`
//! folder. Only entries under its `scout-std/` subdirectory are extracted,
//! and the wrapper folder is stripped from their paths, so the library lands
//! at `<workspace>/scout-std/...`.

use anyhow::{Context, Result};
use log::debug;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};
use zip::ZipArchive;

use crate::runtime::Runtime;

/// Name of the standard library directory, both inside the archive and in
/// the workspace.
pub const STDLIB_DIR: &str = "scout-std";

const REPO_NAME: &str = "scout-lang";

/// The wrapper folder name of a release archive: `"v1.2.3"` -> `"scout-lang-1.2.3/"`.
///
/// The leading character of the version is dropped, mirroring how the
/// release tag `vX.Y.Z` maps onto the archive's top-level folder.
pub fn source_prefix(version: &str) -> String {
    let mut chars = version.chars();
    chars.next();
    format!("{}-{}/", REPO_NAME, chars.as_str())
}

/// The filter prefix selecting standard library entries:
/// `"v1.2.3"` -> `"scout-lang-1.2.3/scout-std/"`.
pub fn stdlib_prefix(version: &str) -> String {
    format!("{}{}/", source_prefix(version), STDLIB_DIR)
}

/// Extracts the standard library out of an in-memory release archive.
pub struct StdlibExtractor {
    source_prefix: String,
    stdlib_prefix: String,
}

impl StdlibExtractor {
    pub fn new(version: &str) -> Self {
        Self {
            source_prefix: source_prefix(version),
            stdlib_prefix: stdlib_prefix(version),
        }
    }

    /// Walks the archive and writes matching entries into the workspace.
    ///
    /// An entry is extracted when its name contains the stdlib prefix as a
    /// substring. This is deliberately not a path-segment check: it matches
    /// the layout of the published bundles, where the prefix only ever
    /// appears at the top level.
    #[tracing::instrument(skip(self, runtime, bytes, workspace))]
    pub fn extract<R: Runtime>(&self, runtime: &R, bytes: &[u8], workspace: &Path) -> Result<()> {
        debug!("Extracting {} to {:?}...", STDLIB_DIR, workspace);

        let cursor = Cursor::new(bytes);
        let mut archive = ZipArchive::new(cursor).context("Failed to parse ZIP archive")?;

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .with_context(|| format!("Failed to read ZIP entry {}", i))?;

            let name = entry.name().to_string();
            let Some(rewritten) = self.rewrite_entry_name(&name) else {
                continue;
            };

            let Some(relative) = safe_entry_path(&rewritten) else {
                debug!("Skipping entry with unsafe path: {}", name);
                continue;
            };

            let dest = workspace.join(relative);

            if entry.is_dir() {
                runtime.create_dir_all(&dest)?;
            } else {
                if let Some(parent) = dest.parent() {
                    runtime.create_dir_all(parent)?;
                }
                let mut writer = runtime.create_file(&dest)?;
                std::io::copy(&mut entry, &mut writer)
                    .with_context(|| format!("Failed to extract file {:?}", dest))?;

                // Set file permissions from archive metadata (Unix only)
                #[cfg(unix)]
                if let Some(mode) = entry.unix_mode()
                    && let Err(e) = runtime.set_permissions(&dest, mode)
                {
                    debug!("Failed to set permissions on {:?}: {}", dest, e);
                }
            }
        }

        Ok(())
    }

    /// Maps an archive entry name to its workspace-relative name, or None
    /// if the entry is not part of the standard library.
    ///
    /// The stdlib prefix filters; the wider source prefix is what gets
    /// removed, so the `scout-std/` nesting itself is preserved. Only the
    /// first occurrence is removed. A rewrite that collapses back to the
    /// source prefix (possible only when the removed substring was empty)
    /// is dropped rather than extracted.
    fn rewrite_entry_name(&self, name: &str) -> Option<String> {
        if !name.contains(&self.stdlib_prefix) {
            return None;
        }
        let rewritten = name.replacen(&self.source_prefix, "", 1);
        if rewritten == self.source_prefix {
            return None;
        }
        Some(rewritten)
    }
}

/// Normalizes an entry name into a relative path, rejecting anything that
/// could escape the extraction root (absolute paths, `..` components).
fn safe_entry_path(name: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}
