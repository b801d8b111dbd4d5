//! pathgraph binary: parse flags, read a graph payload, print tables or JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pathgraph_cli::{read_payload, run_compute, run_path, run_remove, RunConfig, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "pathgraph")]
#[command(about = "All-pairs shortest paths over a weighted directed graph")]
struct Args {
    /// Maximum node count (overrides PATHGRAPH_MAX_NODES)
    #[arg(long, global = true, value_name = "N")]
    max_nodes: Option<usize>,

    /// Print protocol JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,

    /// Debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distance and next-hop matrices with negative edge / cycle warnings
    Compute {
        /// Graph payload JSON file; stdin when omitted or "-"
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Shortest route between two nodes
    Path {
        #[arg(long, value_name = "LABEL")]
        from: String,
        #[arg(long, value_name = "LABEL")]
        to: String,
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Remove a node and its edges; prints the new payload
    Remove {
        #[arg(long, value_name = "LABEL")]
        node: String,
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pathgraph=debug,pathgraph_cli=debug"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut config = RunConfig::from_env();
    config.apply_options(&RunOptions {
        max_nodes: args.max_nodes,
        json: args.json,
        verbose: args.verbose,
    });
    if config.verbose {
        init_tracing();
    }

    let result = match &args.command {
        Command::Compute { input } => {
            read_payload(input.as_deref()).and_then(|p| run_compute(&config, &p))
        }
        Command::Path { from, to, input } => {
            read_payload(input.as_deref()).and_then(|p| run_path(&config, p, from, to))
        }
        Command::Remove { node, input } => {
            read_payload(input.as_deref()).and_then(|p| run_remove(&config, p, node))
        }
    };

    match result {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
