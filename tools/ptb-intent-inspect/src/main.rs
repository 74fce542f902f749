use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ptb_intent_decoder::{DecodeError, Decoder};
use ptb_intent_types::{AddressRegistry, StaticRegistry, Transaction};
use serde::Serialize;
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Decode a Sui programmable transaction into the protocol intention it expresses.
///
/// Prints a JSON report on stdout. Logs go to stderr and are filtered with `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON file holding the transaction (`{"inputs": [..], "commands": [..]}`).
    #[arg(long)]
    tx: PathBuf,

    /// JSON address registry for the transaction's network.
    #[arg(long, env = "PTB_REGISTRY")]
    registry: PathBuf,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,
}

/// One line of the command listing printed when decoding fails.
#[derive(Debug, Serialize)]
struct CommandSummary {
    index: usize,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry: StaticRegistry = read_json(&cli.registry, "registry")?;
    let tx: Transaction = read_json(&cli.tx, "transaction")?;
    info!(
        network = %registry.network(),
        inputs = tx.inputs.len(),
        commands = tx.commands.len(),
        "decoding transaction"
    );

    let decoder = Decoder::new(registry);
    let outcome = decoder.decode(&tx);
    let report = report(decoder.registry(), &tx, &outcome)?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed serialising report")?;
    println!("{rendered}");

    outcome
        .map(|_| ())
        .map_err(|e| anyhow!("transaction not decoded: {e}"))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {what} {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {what} JSON in {}", path.display()))
}

fn report<R: AddressRegistry>(
    registry: &R,
    tx: &Transaction,
    outcome: &Result<ptb_intent_decoder::DecodedIntention, DecodeError>,
) -> Result<Value> {
    let now = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let mut root = json!({
        "decodedAt": now,
        "network": registry.network(),
    });
    match outcome {
        Ok(decoded) => {
            root["result"] = serde_json::to_value(decoded).context("failed serialising intention")?;
        }
        Err(e) => {
            debug!(error = %e, "decode failed");
            root["error"] = json!({
                "kind": format!("{:?}", e.kind()),
                "message": e.to_string(),
            });
            root["commands"] = json!(summarize(tx));
        }
    }
    Ok(root)
}

fn summarize(tx: &Transaction) -> Vec<CommandSummary> {
    tx.commands
        .iter()
        .enumerate()
        .map(|(index, command)| CommandSummary {
            index,
            kind: command.kind_name(),
            target: command.as_move_call().map(|call| call.target()),
        })
        .collect()
}
