//! Mugshot CLI
//! ===========
//!
//! One sub-command per API operation. Responses are printed as pretty JSON.
//!
//! ```text
//! $ mugshot add ./ada.jpg --metadata '{"name":"Ada"}'
//! $ mugshot search ./unknown.jpg
//! $ mugshot match ./unknown.jpg
//! $ mugshot delete face_8f2c
//! ```
//!
//! The key comes from `--api-key`, `MUGSHOT_API_KEY`, or a `.env` file.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use mugshot::*;

#[derive(Debug, Parser)]
#[command(name = "mugshot", version)]
struct Cli {
    /// API key sent in the Authorization header
    #[arg(long, env = MUGSHOT_API_KEY_ENV_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the API
    #[arg(long, env = "MUGSHOT_ENDPOINT", default_value = MUGSHOT_API_ENDPOINT)]
    endpoint: String,

    /// Log requests and responses at DEBUG (to stderr and the log directory)
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Enroll a face
    Add {
        image: PathBuf,
        /// JSON object stored with the face
        #[arg(long, short = 'm', default_value = "{}")]
        metadata: String,
    },
    /// Find similar faces
    Search { image: PathBuf },
    /// Alias of `search`
    SearchFirst { image: PathBuf },
    /// Find similar faces and report which ones match
    Match { image: PathBuf },
    /// Delete a face by id
    Delete { face_id: String },
}

fn parse_metadata(raw: &str) -> anyhow::Result<Metadata> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("metadata is not valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => bail!("metadata must be a JSON object, got {other}"),
    }
}

fn build_client(cli: &Cli) -> MugshotResult<MugshotClient> {
    let mut builder = MugshotClient::builder().with_endpoint(&cli.endpoint);
    if let Some(key) = &cli.api_key {
        builder = builder.with_api_key(key);
    }
    if cli.verbose {
        builder = builder
            .logging_enabled(true)
            .log_level_debug()
            .log_to_stderr();
    }
    builder.build()
}

fn to_pretty<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let client = build_client(&cli)?;

    match cli.cmd {
        Cmd::Add { image, metadata } => {
            let metadata = parse_metadata(&metadata)?;
            let image = ImageInput::from_path(image).await?;
            to_pretty(&client.add_face(image, &metadata).await?)
        }
        Cmd::Search { image } => {
            let image = ImageInput::from_path(image).await?;
            to_pretty(&client.search_face(image).await?)
        }
        Cmd::SearchFirst { image } => {
            let image = ImageInput::from_path(image).await?;
            to_pretty(&client.search_face_first(image).await?)
        }
        Cmd::Match { image } => {
            let image = ImageInput::from_path(image).await?;
            to_pretty(&client.match_face(image).await?)
        }
        Cmd::Delete { face_id } => to_pretty(&client.delete_face(face_id).await?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    println!("{}", run(cli).await?);
    Ok(())
}
