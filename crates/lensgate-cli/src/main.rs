//! `lensgate` -- CLI binary for the classification pipeline stages.
//!
//! Runs one stage per invocation, which is exactly how the external
//! orchestrator drives them: a single JSON envelope in (from `--input`
//! or stdin), a single success envelope out on stdout, non-zero exit
//! on any stage failure.
//!
//! - `lensgate fetch` -- Retrieve an object from storage and emit its
//!   base64 payload.
//! - `lensgate infer` -- Classify an encoded payload via a hosted
//!   endpoint.
//! - `lensgate gate` -- Pass or halt on the confidence threshold.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use lensgate_stages::{FetchStage, GateStage, HttpInferenceEndpoint, HttpObjectStore, InferStage};
use lensgate_types::StageConfig;

/// lensgate classification pipeline CLI.
#[derive(Parser)]
#[command(name = "lensgate", about = "lensgate classification pipeline CLI", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands, one per pipeline stage.
#[derive(Subcommand)]
enum Commands {
    /// Retrieve an object from storage and emit its base64 payload.
    Fetch(FetchArgs),

    /// Classify an encoded payload via a hosted inference endpoint.
    Infer(InferArgs),

    /// Pass or halt on the confidence threshold.
    Gate(GateArgs),
}

#[derive(clap::Args)]
struct FetchArgs {
    /// Base URL of the S3-compatible object store.
    #[arg(long)]
    store_url: String,

    /// Input envelope file (defaults to stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(clap::Args)]
struct InferArgs {
    /// Base URL of the inference invocation API.
    #[arg(long)]
    endpoint_url: String,

    /// Default endpoint name (falls back to the LENSGATE_ENDPOINT
    /// environment variable).
    #[arg(long)]
    endpoint: Option<String>,

    /// Input envelope file (defaults to stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(clap::Args)]
struct GateArgs {
    /// Input envelope file (defaults to stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// Read the input envelope from a file or stdin and parse it.
fn read_envelope<T: serde::de::DeserializeOwned>(input: Option<&PathBuf>) -> anyhow::Result<T> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input envelope from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading input envelope from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("parsing input envelope")
}

/// Print a success envelope to stdout.
fn print_envelope<T: serde::Serialize>(envelope: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(envelope)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fetch(args) => {
            let stage = FetchStage::new(HttpObjectStore::new(args.store_url));
            let envelope = stage.handle(read_envelope(args.input.as_ref())?).await?;
            print_envelope(&envelope)
        }
        Commands::Infer(args) => {
            let config = match args.endpoint {
                Some(endpoint) => StageConfig::with_endpoint(endpoint),
                None => StageConfig::from_env(),
            };
            let stage = InferStage::new(HttpInferenceEndpoint::new(args.endpoint_url), config);
            let envelope = stage.handle(read_envelope(args.input.as_ref())?).await?;
            print_envelope(&envelope)
        }
        Commands::Gate(args) => {
            let stage = GateStage::new();
            let envelope = stage.handle(read_envelope(args.input.as_ref())?)?;
            print_envelope(&envelope)
        }
    }
}
