mod client;
mod types;

pub use client::{GitHub, ReleaseFetcher};
pub use types::Release;

#[cfg(test)]
pub use client::MockReleaseFetcher;

/// The GitHub repository the toolchain is published from.
pub const RELEASE_REPO: &str = "maxmindlin/scout-lang";
