// `reconcile` command-line entry point: inspect commission payloads and build update patches.
use anyhow::Context;
use clap::{Parser, Subcommand};
use reconciler::config::settings::ReconcilerSettings;
use reconciler::data::payload::PayloadLoader;
use reconciler::CommissionService;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reconcile")]
#[command(about = "Resolve and patch per-service commission settings in backend payloads")]
struct Cli {
    /// Settings file (JSON). Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the detected binding and the normalized entries of a payload
    Resolve {
        /// Payload file, or "-" for stdin
        payload: PathBuf,
        /// Sede (location) id for per-sede payloads
        #[arg(long)]
        sede: Option<String>,
    },
    /// Print the patch that stores edited entries back into a payload
    Patch {
        /// Payload file, or "-" for stdin
        payload: PathBuf,
        /// Edited entries (JSON array or keyed object)
        #[arg(long)]
        entries: PathBuf,
        #[arg(long)]
        sede: Option<String>,
    },
    /// Print only the raw commission fields of a payload
    Fields {
        payload: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => ReconcilerSettings::load(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display()))?,
        None => ReconcilerSettings::default(),
    };

    // Logs go to stderr; stdout carries JSON only.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let service = CommissionService::new(settings);
    let pretty = service.settings().pretty;

    match cli.command {
        Command::Resolve { payload, sede } => {
            let source = PayloadLoader::load_record(&payload)
                .with_context(|| format!("Failed to read payload '{}'", payload.display()))?;
            let resolution = service.resolve(&source, sede.as_deref());
            info!(entries = resolution.entries.len(), "Resolved payload");
            print_json(&resolution, pretty)?;
        }
        Command::Patch { payload, entries, sede } => {
            let source = PayloadLoader::load_record(&payload)
                .with_context(|| format!("Failed to read payload '{}'", payload.display()))?;
            let edited = PayloadLoader::load_entries(&entries)
                .with_context(|| format!("Failed to read entries '{}'", entries.display()))?;
            let resolution = service.resolve(&source, sede.as_deref());
            let patch = service.build_patch(&source, resolution.binding.as_ref(), sede.as_deref(), &edited);
            if patch.is_empty() {
                info!("Nothing to write for this payload");
            }
            print_json(&patch, pretty)?;
        }
        Command::Fields { payload } => {
            let source = PayloadLoader::load_record(&payload)
                .with_context(|| format!("Failed to read payload '{}'", payload.display()))?;
            print_json(&service.extract_known_fields(&source), pretty)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
