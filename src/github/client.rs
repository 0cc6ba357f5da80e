use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::RELEASE_REPO;
use super::types::Release;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseFetcher: Send + Sync {
    /// Fetch the latest published release.
    async fn latest_release(&self) -> Result<Release>;

    /// URL of the source archive for a release version.
    fn source_archive_url(&self, version: &str) -> String;

    /// URL of the standalone installer script attached to a release.
    fn installer_script_url(&self, version: &str) -> String;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
    pub download_base: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url, download_base))]
    pub fn new(client: Client, api_url: Option<String>, download_base: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| "https://api.github.com".to_string());
        let download_base = download_base.unwrap_or_else(|| "https://github.com".to_string());
        Self {
            client,
            api_url,
            download_base,
        }
    }

    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_latest_release(client: &Client, api_url: &str) -> Result<Release> {
        let url = format!("{}/repos/{}/releases/latest", api_url, RELEASE_REPO);

        debug!("Fetching latest release from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let response = response
            .error_for_status()
            .context("GitHub API returned an error status")?;

        let release = response
            .json::<Release>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(release)
    }
}

#[async_trait]
impl ReleaseFetcher for GitHub {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self) -> Result<Release> {
        GitHub::fetch_latest_release(&self.client, &self.api_url).await
    }

    #[tracing::instrument(skip(self))]
    fn source_archive_url(&self, version: &str) -> String {
        format!(
            "{}/{}/archive/refs/tags/{}.zip",
            self.download_base, RELEASE_REPO, version
        )
    }

    #[tracing::instrument(skip(self))]
    fn installer_script_url(&self, version: &str) -> String {
        format!(
            "{}/{}/releases/download/{}/scout-installer.sh",
            self.download_base, RELEASE_REPO, version
        )
    }
}
