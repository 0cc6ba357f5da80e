use anyhow::Result;
use clap::Parser;
use scoutup::install::{install, paths};
use std::path::PathBuf;

/// scoutup - ScoutLang toolchain installer
///
/// Installs the scout-lang standard library into the local workspace and
/// delegates installation of the compiler to the upstream installer script.
///
/// Examples:
///   scoutup install     # Install the latest scout-lang release
#[derive(Parser, Debug)]
#[command(author, version = env!("SCOUTUP_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace root directory (overrides <home>/scout-lang; also via SCOUTUP_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "SCOUTUP_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub workspace_root: Option<PathBuf>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Release download URL (defaults to https://github.com)
    #[arg(long = "download-base", value_name = "URL", global = true)]
    pub download_base: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Install the latest scout-lang release
    Install(InstallArgs),

    /// Print the resolved workspace paths
    Paths,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Install the standard library only, without running the upstream toolchain installer
    #[arg(long)]
    pub skip_bootstrap: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = scoutup::runtime::RealRuntime;

    match cli.command {
        Commands::Install(args) => {
            install(
                runtime,
                cli.workspace_root,
                cli.api_url,
                cli.download_base,
                args.skip_bootstrap,
            )
            .await?
        }
        Commands::Paths => paths(runtime, cli.workspace_root)?,
    }
    Ok(())
}
