use crate::args::{Args, Command};
use crate::config::{StaticCredentials, StorageConfig};
use crate::errors::{AppError, ConfigError};
use crate::interfaces::ObjectStore;
use crate::storage::StorageClient;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Result line printed by `exists --json`
#[derive(Debug, Serialize)]
struct ExistsReport<'a> {
    key: &'a str,
    exists: bool,
}

/// Resolve the configuration, build the client and run the command
pub async fn run_app(args: &Args) -> Result<(), AppError> {
    let config = resolve_config(args)?;
    let client = StorageClient::new(config).await?;
    let mut stdout = std::io::stdout();
    dispatch(&args.command, args.json, &client, &mut stdout).await
}

/// Command line values win over the environment
pub fn resolve_config(args: &Args) -> Result<StorageConfig, ConfigError> {
    let mut config = StorageConfig::from_lookup(|name| {
        args.override_for(name)
            .or_else(|| std::env::var(name).ok())
    })?;

    if let (Some(key_id_path), Some(secret_path)) =
        (&args.access_key_id_filepath, &args.secret_key_filepath)
    {
        config = config.with_credentials(StaticCredentials::from_files(key_id_path, secret_path)?);
    }
    Ok(config)
}

/// Run one command against `store`, writing results to `out`
pub async fn dispatch<S, W>(
    command: &Command,
    json: bool,
    store: &S,
    out: &mut W,
) -> Result<(), AppError>
where
    S: ObjectStore + ?Sized,
    W: Write,
{
    match command {
        Command::Exists { key } => {
            let exists = store.exists(key).await?;
            if json {
                let report = ExistsReport { key, exists };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(out, "{}", exists)?;
            }
        }
        Command::Head { key } => {
            let head = store.head(key).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&head)?)?;
        }
        Command::Upload {
            key,
            body,
            file,
            skip_existing,
            no_validate,
        } => {
            let body = match (body, file) {
                (Some(body), _) => body.clone(),
                (None, Some(path)) => read_body(path)?,
                (None, None) => String::new(),
            };

            if !no_validate {
                serde_json::from_str::<serde_json::Value>(&body).map_err(AppError::InvalidBody)?;
            }

            if *skip_existing && store.exists(key).await? {
                info!("Skipping upload, {} already exists", store.object_url(key));
                writeln!(out, "skipped: {}", store.object_url(key))?;
                return Ok(());
            }

            store.upload(key, body).await?;
            writeln!(out, "uploaded: {}", store.object_url(key))?;
        }
    }
    Ok(())
}

fn read_body(path: &Path) -> Result<String, AppError> {
    Ok(std::fs::read_to_string(path)?)
}
