use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::Client;

/// Downloads a release archive from a URL, buffering the whole body in memory.
///
/// The buffer is handed to the extractor as-is; whether it is a valid zip
/// archive is only checked when the extractor opens it.
#[tracing::instrument(skip(client))]
pub async fn fetch_archive(client: &Client, url: &str) -> Result<Vec<u8>> {
    info!("Downloading archive from {}...", url);

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to start archive download")?;

    let mut response = response
        .error_for_status()
        .context("Archive download returned an error status")?;

    let mut buffer = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .context("Failed to read chunk from download stream")?
    {
        buffer.extend_from_slice(&chunk);
    }

    debug!(
        "Downloaded {:.2} MB",
        buffer.len() as f64 / (1024.0 * 1024.0)
    );

    Ok(buffer)
}
