//! txparse - inspect raw Bitcoin transactions and block headers

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use txparse::{Config, DecodeOptions, Explorer, Network, Tx, logging};

#[derive(Parser)]
#[command(name = "txparse")]
#[command(version)]
#[command(about = "Bitcoin transaction and block header decoder", long_about = None)]
struct Cli {
    /// Network to query (main, test, signet)
    #[arg(long, global = true)]
    network: Option<Network>,

    /// Explorer API base URL, e.g. https://blockstream.info/api
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Reject transactions with bytes left after the locktime
    #[arg(long, global = true)]
    strict: bool,

    /// Accept segregated-witness encoded transactions
    #[arg(long, global = true)]
    witness: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a raw transaction given as hex
    Decode {
        #[arg(help = "(string, required) Raw transaction hex")]
        transaction_hex: String,
    },
    /// Fetch a transaction by id and decode it
    Tx { txid: String },
    /// Fetch the block header at a height
    Header { height: u64 },
    /// Fetch block headers for an inclusive height range
    Headers { from: u64, to: u64 },
}

fn print<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> txparse::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn run(cli: Cli) -> txparse::Result<()> {
    let config = Config::load(std::env::vars())?.with_overrides(
        cli.network,
        cli.api_url,
        cli.log_level,
    );
    config.validate()?;

    logging::init(&config.log_level);

    let options = DecodeOptions {
        witness: cli.witness,
        strict: cli.strict,
    };

    match cli.command {
        Command::Decode { transaction_hex } => {
            let tx = Tx::from_hex(&transaction_hex, options)?;
            print(&tx, cli.json)
        }
        Command::Tx { txid } => {
            let explorer = Explorer::from_config(&config)?;
            info!(%txid, api = explorer.base_url(), "fetching transaction");
            let tx = explorer.fetch_tx(&txid, options)?;
            print(&tx, cli.json)
        }
        Command::Header { height } => {
            let explorer = Explorer::from_config(&config)?;
            let report = explorer.header_at(height)?;
            print(&report, cli.json)
        }
        Command::Headers { from, to } => {
            let explorer = Explorer::from_config(&config)?;
            info!(from, to, "fetching header range");
            for report in explorer.headers(from..=to) {
                print(&report?, cli.json)?;
                if !cli.json {
                    println!();
                }
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
