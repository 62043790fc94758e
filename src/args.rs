use crate::config::{BUCKET_VAR, ENDPOINT_VAR, FORCE_PATH_STYLE_VAR, REGION_VAR};
use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// AWS region, overrides AWS_REGION
    #[arg(long, global = true, value_name = "REGION")]
    pub region: Option<String>,
    /// Bucket name, overrides S3_BUCKET_NAME
    #[arg(long, global = true, value_name = "BUCKET")]
    pub bucket: Option<String>,
    /// Custom endpoint for S3-compatible services, overrides S3_ENDPOINT_URL
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint_url: Option<String>,
    /// Use path-style addressing (bucket in the path, not the host)
    #[arg(long, global = true)]
    pub force_path_style: bool,
    /// File holding the access key id, pass together with --secret-key-filepath
    #[arg(long, global = true, value_parser = check_readable_file)]
    pub access_key_id_filepath: Option<PathBuf>,
    /// File holding the secret access key
    #[arg(long, global = true, value_parser = check_readable_file)]
    pub secret_key_filepath: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Print extra stuff, repeat for more
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether an object exists
    Exists { key: String },
    /// Show object metadata
    Head { key: String },
    /// Upload a JSON document
    Upload {
        key: String,
        /// Body text
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        body: Option<String>,
        /// Read the body from this file
        #[arg(long, value_parser = check_readable_file)]
        file: Option<PathBuf>,
        /// Do nothing if the object already exists (not atomic)
        #[arg(long)]
        skip_existing: bool,
        /// Upload even if the body does not parse as JSON
        #[arg(long)]
        no_validate: bool,
    },
}

impl Command {
    pub fn key(&self) -> &str {
        match self {
            Command::Exists { key } | Command::Head { key } | Command::Upload { key, .. } => key,
        }
    }
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.command.key().is_empty() {
            return Err("Object key must not be empty.".to_string());
        }

        match (&self.access_key_id_filepath, &self.secret_key_filepath) {
            (Some(_), None) | (None, Some(_)) => Err(
                "--access-key-id-filepath and --secret-key-filepath must be passed together."
                    .to_string(),
            ),
            _ => Ok(()),
        }
    }

    /// Value given on the command line for a configuration variable
    pub fn override_for(&self, var: &str) -> Option<String> {
        match var {
            REGION_VAR => self.region.clone(),
            BUCKET_VAR => self.bucket.clone(),
            ENDPOINT_VAR => self.endpoint_url.clone(),
            FORCE_PATH_STYLE_VAR if self.force_path_style => Some("true".to_string()),
            _ => None,
        }
    }
}

fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if path.is_file() && fs::metadata(&path).is_ok() {
        Ok(path)
    } else {
        Err(format!("The file '{}' is not readable.", file))
    }
}
