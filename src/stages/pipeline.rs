use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::scored::ScoredFile;
use crate::sources::{ContentFetcher, TreeLister};
use crate::stages::fetch::fetch_contents;
use crate::stages::ranking::rank_entries;

/// The assembled result of one repository analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoAnalysis {
    /// The capped, ordered selection produced by the ranker
    pub ranked_files: Vec<ScoredFile>,

    /// Fetched content keyed by path. Files whose fetch failed are absent.
    pub contents: HashMap<String, String>,

    /// Number of files whose content was actually fetched
    pub file_count: usize,

    pub analyzed_at: DateTime<Utc>,
}

/// Run the full analysis pipeline: list the tree, rank the entries, fetch
/// the content of the selected files.
///
/// Listing failures abort the analysis and keep their `AnalysisError` kind
/// in the chain so the caller can distinguish NotFound from RateLimited.
/// Per-file fetch failures do not abort; those files are simply absent from
/// `contents`.
pub async fn analyze_repository(
    lister: &dyn TreeLister,
    fetcher: &dyn ContentFetcher,
    config: &Config,
) -> Result<RepoAnalysis> {
    let entries = lister
        .list_tree()
        .await
        .context("Failed to list repository tree")?;
    info!("Found {} total entries in repository tree", entries.len());

    let ranked_files = rank_entries(&entries, &config.ranking)
        .context("Failed to rank repository entries")?;
    info!("Selected {} important files to analyze", ranked_files.len());

    let contents = fetch_contents(&ranked_files, fetcher, &config.fetch).await;
    info!("Fetched content for {} files", contents.len());

    Ok(RepoAnalysis {
        file_count: contents.len(),
        ranked_files,
        contents,
        analyzed_at: Utc::now(),
    })
}
