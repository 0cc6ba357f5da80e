use serde::{Deserialize, Serialize};

/// The latest published release, as reported by the releases API.
///
/// `name` carries the version identifier (e.g. "v1.2.3") and is required:
/// a response without it fails deserialization and aborts the run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Release {
    pub name: String,
}
