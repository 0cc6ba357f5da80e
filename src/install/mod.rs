use anyhow::Result;
use log::info;
use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::{
    archive::{STDLIB_DIR, StdlibExtractor},
    bootstrap,
    config::{Config, resolve_workspace_root},
    download,
    github::{RELEASE_REPO, ReleaseFetcher},
    runtime::Runtime,
    workspace,
};

#[tracing::instrument(skip(runtime, workspace_root, api_url, download_base))]
pub async fn install<R: Runtime + 'static>(
    runtime: R,
    workspace_root: Option<PathBuf>,
    api_url: Option<String>,
    download_base: Option<String>,
    skip_bootstrap: bool,
) -> Result<()> {
    let config = Config::new(runtime, workspace_root, api_url, download_base)?;
    let root = config.workspace_root.clone();
    let installer = Installer::new(config.runtime, config.releases, config.client);
    installer.install(&root, skip_bootstrap).await
}

/// Print the resolved workspace paths
#[tracing::instrument(skip(runtime, workspace_root))]
pub fn paths<R: Runtime>(runtime: R, workspace_root: Option<PathBuf>) -> Result<()> {
    let root = resolve_workspace_root(&runtime, workspace_root)?;
    println!("workspace {}", root.display());
    println!("{} {}", STDLIB_DIR, root.join(STDLIB_DIR).display());
    Ok(())
}

pub struct Installer<R: Runtime, F: ReleaseFetcher> {
    pub runtime: R,
    pub releases: F,
    pub client: Client,
}

impl<R: Runtime + 'static, F: ReleaseFetcher> Installer<R, F> {
    #[tracing::instrument(skip(runtime, releases, client))]
    pub fn new(runtime: R, releases: F, client: Client) -> Self {
        Self {
            runtime,
            releases,
            client,
        }
    }

    /// Runs the full installation: prepare the workspace, resolve the latest
    /// release, download its source archive, extract the standard library,
    /// then hand over to the upstream toolchain installer.
    #[tracing::instrument(skip(self, root))]
    pub async fn install(&self, root: &Path, skip_bootstrap: bool) -> Result<()> {
        println!("    preparing {}", root.display());
        workspace::prepare(&self.runtime, root)?;

        println!("    resolving {}", RELEASE_REPO);
        let release = self.releases.latest_release().await?;
        let version = release.name;
        info!("Latest release: {}", version);

        println!("  downloading {} {}", RELEASE_REPO, version);
        let archive_url = self.releases.source_archive_url(&version);
        let archive = download::fetch_archive(&self.client, &archive_url).await?;

        println!("   installing {} {}", STDLIB_DIR, version);
        StdlibExtractor::new(&version).extract(&self.runtime, &archive, root)?;

        if skip_bootstrap {
            info!("Skipping the toolchain installer");
        } else {
            println!("bootstrapping {} {}", RELEASE_REPO, version);
            let script_url = self.releases.installer_script_url(&version);
            bootstrap::run(&self.runtime, &script_url).await?;
        }

        println!("    installed {} {} {}", RELEASE_REPO, version, root.display());
        Ok(())
    }
}
