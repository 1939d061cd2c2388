//! graph-spectrum CLI entry point.
//!
//! Reads `{"nodes": [...], "edges": [[s, t], ...]}` from a file or stdin
//! and writes the spectral report as JSON to stdout. Logs go to stderr.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use graph_spectrum::{SpectrumConfig, wire};

/// Compute adjacency, Laplacian and normalized Laplacian spectra of a graph.
#[derive(Debug, Parser)]
#[command(name = "graph-spectrum", version, about)]
struct Cli {
    /// Graph description JSON; reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Solver configuration JSON.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SpectrumConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SpectrumConfig::default(),
    };

    let body = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let report = wire::spectrum_from_json(&body, &config)?;
    println!("{}", wire::to_json(&report, cli.pretty)?);
    Ok(())
}
