//! `cf instances APP-NAME`: live per-instance host, port and memory usage
//! for one application on a Cloud Foundry platform.

pub mod args;
pub mod config;
pub mod connection;
pub mod plugin;
pub mod report;
pub mod stats;

use std::io::Write;

pub use connection::{ApplicationDescriptor, PlatformConnection};
pub use stats::{Instance, InstanceCollection, InstanceStats, Usage, fetch_stats};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing application name")]
    MissingArgument,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    AppLookup(cf_api::Error),

    #[error("{0}")]
    Request(cf_api::Error),

    #[error("invalid stats response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Resolve the app name, fetch its stats and write the report to `out`.
///
/// Nothing is written unless every step before rendering succeeds.
pub async fn run<C, W>(conn: &C, args: &[String], out: &mut W) -> Result<()>
where
    C: PlatformConnection + ?Sized,
    W: Write,
{
    let app_name = args::resolve_app_name(args)?;
    let collection = fetch_stats(conn, app_name).await?;
    report::render(&collection, out)?;
    Ok(())
}
