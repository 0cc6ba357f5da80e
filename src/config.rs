//! Program configuration assembled once at the entry point.

use anyhow::{Context, Result, anyhow};
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::env;
use std::path::PathBuf;

use crate::github::{GitHub, ReleaseFetcher};
use crate::runtime::Runtime;

/// Name of the workspace directory created under the home directory.
pub const WORKSPACE_DIR_NAME: &str = "scout-lang";

pub struct Config<R: Runtime, F: ReleaseFetcher> {
    pub runtime: R,
    pub releases: F,
    pub client: Client,
    pub workspace_root: PathBuf,
}

impl<R: Runtime> Config<R, GitHub> {
    pub fn new(
        runtime: R,
        root_override: Option<PathBuf>,
        api_url: Option<String>,
        download_base: Option<String>,
    ) -> Result<Self> {
        let workspace_root = resolve_workspace_root(&runtime, root_override)?;

        let mut headers = HeaderMap::new();
        if let Ok(token) = env::var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication");
        }

        let client = Client::builder()
            .user_agent("scoutup-cli")
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        let releases = GitHub::new(client.clone(), api_url, download_base);

        Ok(Self {
            runtime,
            releases,
            client,
            workspace_root,
        })
    }
}

/// Resolves the workspace root once, before any network traffic.
///
/// An explicit override wins; otherwise the workspace lives at
/// `<home>/scout-lang`. No home directory and no override is fatal.
pub fn resolve_workspace_root<R: Runtime>(
    runtime: &R,
    root_override: Option<PathBuf>,
) -> Result<PathBuf> {
    match root_override {
        Some(path) => Ok(path),
        None => runtime
            .home_dir()
            .map(|home| home.join(WORKSPACE_DIR_NAME))
            .ok_or_else(|| {
                anyhow!("Could not determine the home directory. Pass --root to choose a workspace location.")
            }),
    }
}
