//! Ledgerline command-line tool
//!
//! Shows how model and field names map onto the REST wire format, normalizes
//! payloads, and fetches records from a running API.
//!
//! Usage:
//!   ledgerline path transactionEvent
//!   ledgerline keys paymentSource --kind belongs-to
//!   ledgerline normalize --model transaction --file payload.json
//!   ledgerline fetch transaction 5 --host http://localhost:3000 --namespace api/v1

use anyhow::Result;
use clap::{Parser, Subcommand};
use ledgerline_cli::{
    fetch, keys_for, load_config, model_name_for, normalize_payload, path_for, read_payload,
};
use ledgerline_model::RelationshipKind;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ledgerline")]
#[command(about = "Ledgerline REST naming conventions and adapter")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the collection path for a model
    Path { model: String },

    /// Print the wire keys derived from a camelCase name
    Keys {
        name: String,

        /// Relationship kind (belongs-to or has-many)
        #[arg(short, long)]
        kind: Option<RelationshipKind>,
    },

    /// Print the model name a payload root key refers to
    ModelName { payload_key: String },

    /// Normalize a wire payload
    Normalize {
        /// Primary model of the payload
        #[arg(short, long)]
        model: String,

        /// Payload file (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Fetch a record, or a whole collection, from the API
    Fetch {
        model: String,
        id: Option<String>,

        /// Adapter config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// API host, overriding the config
        #[arg(long)]
        host: Option<String>,

        /// Path prefix, overriding the config
        #[arg(long)]
        namespace: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    debug!(command = ?args.command, "running");

    let output = match args.command {
        Command::Path { model } => Value::String(path_for(&model)),
        Command::Keys { name, kind } => serde_json::to_value(keys_for(&name, kind))?,
        Command::ModelName { payload_key } => Value::String(model_name_for(&payload_key)),
        Command::Normalize { model, file } => {
            let payload = read_payload(file.as_deref())?;
            normalize_payload(&model, &payload)?
        }
        Command::Fetch {
            model,
            id,
            config,
            host,
            namespace,
        } => {
            let config = load_config(config.as_deref(), host, namespace)?;
            fetch(config, &model, id.as_deref()).await?
        }
    };

    match output {
        Value::String(text) => println!("{text}"),
        other => println!("{}", serde_json::to_string_pretty(&other)?),
    }
    Ok(())
}
