use crate::{Error, Result};

/// Subcommand registered with the host CLI.
pub const COMMAND_NAME: &str = "instances";

/// Argument the host passes when it wants the registration metadata.
pub const METADATA_REQUEST: &str = "SendMetadata";

/// What the binary was asked to do, judged by `args[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Instances,
    SendMetadata,
}

impl Invocation {
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args.first().map(String::as_str) {
            Some(COMMAND_NAME) => Ok(Self::Instances),
            Some(METADATA_REQUEST) => Ok(Self::SendMetadata),
            Some(other) => Err(Error::UnknownCommand(other.to_string())),
            None => Err(Error::MissingArgument),
        }
    }
}

/// App name from `args`, where `args[0]` is the subcommand itself.
///
/// Only presence is checked; an empty name goes through to the lookup.
pub fn resolve_app_name(args: &[String]) -> Result<&str> {
    match args.get(1) {
        Some(name) => Ok(name.as_str()),
        None => Err(Error::MissingArgument),
    }
}
