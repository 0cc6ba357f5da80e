//! Delegates compiler/runtime installation to the upstream installer script.
//!
//! The standard library is only half of a toolchain install; the compiler
//! itself ships as a separate installer script attached to each release.
//! That script is fetched over pinned TLS and piped into the shell.

use anyhow::{Context, Result};
use log::info;

use crate::runtime::Runtime;

/// Raised when the delegated installer ran but did not succeed.
#[derive(Debug)]
pub enum BootstrapError {
    InstallerFailed(String),
}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapError::InstallerFailed(detail) => {
                write!(f, "Toolchain installer failed ({})", detail)
            }
        }
    }
}

impl std::error::Error for BootstrapError {}

/// The shell command that fetches and runs the installer script.
pub fn installer_command(script_url: &str) -> String {
    format!(
        "curl --proto '=https' --tlsv1.2 -LsSf {} | sh",
        script_url
    )
}

/// Runs the upstream installer synchronously and checks its exit status.
///
/// A non-zero or signal-terminated status surfaces as
/// [`BootstrapError::InstallerFailed`] so callers can tell a failed
/// delegated install apart from this program's own errors.
#[tracing::instrument(skip(runtime))]
pub async fn run<R: Runtime>(runtime: &R, script_url: &str) -> Result<()> {
    let command = installer_command(script_url);
    info!("Running toolchain installer: {}", command);

    let status = runtime
        .run_shell(&command)
        .await
        .context("Failed to run the toolchain installer")?;

    if !status.success() {
        let detail = match status.code() {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        return Err(BootstrapError::InstallerFailed(detail).into());
    }

    Ok(())
}
