use std::io::{self, Write};
use std::process::ExitCode;

use cf_instances::args::{self, Invocation};
use cf_instances::config::ConnectionConfig;
use cf_instances::{Error, Result, plugin};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match dispatch(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "instances failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(args: &[String]) -> Result<()> {
    match Invocation::from_args(args)? {
        Invocation::SendMetadata => {
            let mut out = io::stdout().lock();
            serde_json::to_writer(&mut out, &plugin::metadata())
                .map_err(|e| Error::Io(e.into()))?;
            writeln!(out)?;
            Ok(())
        }
        Invocation::Instances => {
            // Bail before touching the config or the network.
            args::resolve_app_name(args)?;

            let client = ConnectionConfig::from_env()?.client();
            tracing::debug!(api = %client.api_url(), "connecting");
            cf_instances::run(&client, args, &mut io::stdout().lock()).await
        }
    }
}
