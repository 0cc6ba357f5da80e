//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Home directory lookup
//! - `fs` - File system operations (directories, file creation, permissions)
//! - `process` - Shell command execution

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Directories
    fn home_dir(&self) -> Option<PathBuf>;

    // File System
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;

    /// Set file permissions (mode) on Unix systems. No-op elsewhere.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    // Process
    /// Run a command through the system shell and return its exit status.
    async fn run_shell(&self, command: &str) -> Result<ExitStatus>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_file_impl(path)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.set_permissions_impl(path, mode)
    }

    async fn run_shell(&self, command: &str) -> Result<ExitStatus> {
        self.run_shell_impl(command).await
    }
}
