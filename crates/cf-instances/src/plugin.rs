//! Registration metadata handed to the host CLI.
//!
//! Field names follow the host's plugin contract, hence the PascalCase
//! renames.

use serde::Serialize;

use crate::args::COMMAND_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginMetadata {
    pub name: &'static str,
    pub version: VersionType,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionType {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Command {
    pub name: &'static str,
    pub help_text: &'static str,
    pub usage_details: Usage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Usage {
    pub usage: &'static str,
}

pub const VERSION: VersionType = VersionType {
    major: 0,
    minor: 4,
    build: 0,
};

pub fn metadata() -> PluginMetadata {
    PluginMetadata {
        name: "instances",
        version: VERSION,
        commands: vec![Command {
            name: COMMAND_NAME,
            help_text: "Grabs instance information for the provided app like IP/Port of AI",
            usage_details: Usage {
                usage: "instances\n   cf instances APP-NAME",
            },
        }],
    }
}
