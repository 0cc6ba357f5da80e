//! Shell command execution.

use anyhow::{Context, Result};
use std::process::ExitStatus;
use tokio::process::Command;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) async fn run_shell_impl(&self, command: &str) -> Result<ExitStatus> {
        Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .await
            .context("Failed to spawn shell")
    }
}
