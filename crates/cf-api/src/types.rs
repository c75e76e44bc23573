use serde::Deserialize;

use crate::{Error, Result};

// ── App types ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AppSearchResponse {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub resources: Vec<AppResource>,
}

impl AppSearchResponse {
    /// First matching app, or `AppNotFound` when the listing is empty.
    pub fn into_first(self, name: &str) -> Result<AppResource> {
        self.resources
            .into_iter()
            .next()
            .ok_or_else(|| Error::AppNotFound(name.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppResource {
    pub metadata: ResourceMetadata,
    pub entity: AppEntity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceMetadata {
    pub guid: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppEntity {
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub space_guid: Option<String>,
}
