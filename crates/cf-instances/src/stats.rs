use std::collections::HashMap;

use cf_api::Method;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::connection::PlatformConnection;
use crate::{Error, Result};

// ── Wire types ───────────────────────────────────────────────────────

/// One entry of the stats response.
///
/// Instances that are not running report only `state` (and sometimes
/// `since`/`details`), so every nested field decodes to its zero value
/// when missing or `null`. Present fields of the wrong type still fail.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Instance {
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: InstanceStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstanceStats {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: u16,
    /// Bytes.
    #[serde(deserialize_with = "null_as_default")]
    pub mem_quota: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: Usage,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Usage {
    /// Fraction of one core.
    #[serde(deserialize_with = "null_as_default")]
    pub cpu: f64,
    /// Bytes.
    #[serde(deserialize_with = "null_as_default")]
    pub mem: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Collection ───────────────────────────────────────────────────────

/// Every instance of one app, keyed by its index as sent on the wire.
///
/// Indices are ordered as strings, so `"10"` comes before `"2"`.
#[derive(Debug, Clone, Default)]
pub struct InstanceCollection {
    instances: HashMap<String, Instance>,
    ordered: Vec<String>,
}

impl InstanceCollection {
    pub fn from_instances(instances: HashMap<String, Instance>) -> Self {
        let mut ordered: Vec<String> = instances.keys().cloned().collect();
        ordered.sort();
        Self { instances, ordered }
    }

    /// Decode a full stats body; any bad entry rejects the whole body.
    pub fn from_json(body: &str) -> Result<Self> {
        let instances: HashMap<String, Instance> = serde_json::from_str(body)?;
        Ok(Self::from_instances(instances))
    }

    pub fn ordered_indices(&self) -> &[String] {
        &self.ordered
    }

    pub fn get(&self, index: &str) -> Option<&Instance> {
        self.instances.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Instance)> {
        self.ordered
            .iter()
            .filter_map(|idx| self.instances.get(idx).map(|inst| (idx.as_str(), inst)))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

// ── Fetch ────────────────────────────────────────────────────────────

pub fn stats_path(app_guid: &str) -> String {
    format!("/v2/apps/{app_guid}/stats")
}

/// Look up `app_name`, read its stats endpoint once and decode the result.
pub async fn fetch_stats<C>(conn: &C, app_name: &str) -> Result<InstanceCollection>
where
    C: PlatformConnection + ?Sized,
{
    let app = conn
        .lookup_application(app_name)
        .await
        .map_err(Error::AppLookup)?;
    debug!(app = %app.name, guid = %app.guid, "resolved application");

    let path = stats_path(&app.guid);
    let chunks = conn
        .raw_request(Method::GET, &path)
        .await
        .map_err(Error::Request)?;
    debug!(%path, chunks = chunks.len(), "received stats response");

    let collection = InstanceCollection::from_json(&chunks.concat())?;
    debug!(instances = collection.len(), "decoded instance stats");
    Ok(collection)
}
