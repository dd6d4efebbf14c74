use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use repo_ranker::config::Config;
use repo_ranker::models::entry::RepoEntry;
use repo_ranker::stages::ranking;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short = 'f', long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Rank the entries of a repository tree listing
    Rank {
        /// Path to a JSON file containing a flat array of tree entries
        #[arg(short, long)]
        tree: PathBuf,

        /// Override the maximum number of files to select
        #[arg(short, long)]
        cap: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Log level is controlled by the RUST_LOG environment variable,
    // e.g. RUST_LOG=info or RUST_LOG=debug
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config_path {
        Some(path) => Config::from_file(Some(path))?,
        None => Config::default(),
    };

    match cli.command {
        Command::Rank { tree, cap } => {
            if let Some(cap) = cap {
                config.ranking.max_files = cap;
            }

            let listing = fs::read_to_string(&tree)
                .context(format!("Failed to read tree listing: {:?}", tree))?;
            let entries: Vec<RepoEntry> = serde_json::from_str(&listing)
                .context(format!("Failed to parse tree listing: {:?}", tree))?;

            info!("Ranking {} tree entries", entries.len());
            let ranked = ranking::rank_entries(&entries, &config.ranking)?;

            let output = serde_json::to_string_pretty(&ranked)
                .context("Failed to serialize ranked files")?;
            println!("{}", output);
        }
    }

    Ok(())
}
