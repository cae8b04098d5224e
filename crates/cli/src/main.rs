// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! nb - notification bridge codec tools

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{decode, encode, end_at};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nb",
    version,
    about = "Inspect how notification requests are encoded for the host"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a notification request into a host record
    Encode(encode::EncodeArgs),
    /// Decode a host record into a notification request
    Decode(decode::DecodeArgs),
    /// Compute the end time the host gets for a repeat count
    EndAt(end_at::EndAtArgs),
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_new(nb_adapters::env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(nb_adapters::env::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped; otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No subcommand prints help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Encode(args) => encode::handle(args),
        Commands::Decode(args) => decode::handle(args),
        Commands::EndAt(args) => end_at::handle(args),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
