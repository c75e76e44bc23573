use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cf_api::CfClient;
use serde::Deserialize;

use crate::{Error, Result};

/// Connection settings left behind by `cf login` / `cf target`.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub api_url: String,
    pub access_token: String,
    pub space_guid: Option<String>,
}

/// Subset of `~/.cf/config.json` the connection needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CliConfigFile {
    #[serde(default)]
    target: String,
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    space_fields: Option<SpaceFields>,
}

#[derive(Debug, Deserialize)]
struct SpaceFields {
    #[serde(rename = "GUID", default)]
    guid: String,
}

impl ConnectionConfig {
    /// Load from `$CF_HOME/.cf/config.json`, falling back to `$HOME`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let home = env::var("CF_HOME")
            .or_else(|_| env::var("HOME"))
            .map_err(|_| Error::Config("neither CF_HOME nor HOME is set".into()))?;
        Self::from_file(&config_path(Path::new(&home)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self> {
        let file: CliConfigFile = serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("malformed cf config: {e}")))?;

        if file.target.is_empty() {
            return Err(Error::Config("no API endpoint set, run `cf api`".into()));
        }
        let access_token = strip_bearer(&file.access_token);
        if access_token.is_empty() {
            return Err(Error::Config("not logged in, run `cf login`".into()));
        }

        Ok(Self {
            api_url: file.target,
            access_token: access_token.to_string(),
            space_guid: file
                .space_fields
                .map(|s| s.guid)
                .filter(|guid| !guid.is_empty()),
        })
    }

    pub fn client(&self) -> CfClient {
        let client = CfClient::new(&self.api_url, &self.access_token);
        match &self.space_guid {
            Some(space) => client.with_space(space),
            None => client,
        }
    }
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join(".cf").join("config.json")
}

fn strip_bearer(token: &str) -> &str {
    let token = token.trim();
    match token.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => token,
    }
}
