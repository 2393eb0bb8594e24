//! Veche CLI - load command files into a social network and query it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use veche_core::{ingest_files, IngestConfig, SocialNetwork};

/// Veche - a social graph engine fed by textual command files
#[derive(Parser, Debug)]
#[command(name = "veche")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long, env = "VECHE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Load the given command files and list every user
    Users {
        /// Command files (`adduser <name>` / `addfriends <a> <b>` lines)
        files: Vec<PathBuf>,
    },
    /// List a user's friends
    Friends {
        /// User to look up
        #[arg(long)]
        user: String,
        /// Command files to load first
        files: Vec<PathBuf>,
    },
    /// Suggest friends-of-friends for a user
    Suggest {
        /// User to suggest for
        #[arg(long)]
        user: String,
        /// Command files to load first
        files: Vec<PathBuf>,
    },
    /// Merge two users into one vertex and list the surviving users
    Merge {
        /// First user of the pair
        #[arg(long)]
        left: String,
        /// Second user of the pair
        #[arg(long)]
        right: String,
        /// Command files to load first
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => IngestConfig::load(path)?,
        None => IngestConfig::default(),
    };

    let network = Arc::new(SocialNetwork::new());

    match args.command {
        CliCommand::Users { files } => {
            load(&network, files, &config).await;
            print_sorted(network.all_users());
        }
        CliCommand::Friends { user, files } => {
            load(&network, files, &config).await;
            print_sorted(network.friends(&user));
        }
        CliCommand::Suggest { user, files } => {
            load(&network, files, &config).await;
            print_sorted(network.suggestions(&user));
        }
        CliCommand::Merge { left, right, files } => {
            load(&network, files, &config).await;
            if network.merge_users(&left, &right) {
                print_sorted(network.all_users());
            } else {
                tracing::warn!("no direct relationship between {left} and {right}, nothing merged");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Ingests the command files into the network and logs a summary.
async fn load(network: &Arc<SocialNetwork>, files: Vec<PathBuf>, config: &IngestConfig) {
    let report = ingest_files(Arc::clone(network), files, config).await;
    tracing::info!(
        sources_read = report.sources_read,
        sources_failed = report.sources_failed,
        commands_applied = report.commands_applied,
        "load finished"
    );
}

fn print_sorted(mut names: Vec<String>) {
    names.sort_unstable();
    for name in names {
        println!("{name}");
    }
}
