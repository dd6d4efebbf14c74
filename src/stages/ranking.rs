use log::{debug, info};

use crate::config::RankingConfig;
use crate::error::AnalysisError;
use crate::models::entry::{EntryKind, RepoEntry};
use crate::models::scored::ScoredFile;

/// Weight added for a dependency/build manifest name match
const CONFIG_FILE_WEIGHT: u32 = 100;

/// Weight added for living under an application-code root
const IMPORTANT_DIR_WEIGHT: u32 = 50;

/// Weights added for entrypoint-ish name fragments
const INDEX_NAME_WEIGHT: u32 = 30;
const MAIN_NAME_WEIGHT: u32 = 30;
const APP_NAME_WEIGHT: u32 = 20;

/// Weight added for a source-code extension
const CODE_FILE_WEIGHT: u32 = 10;

/// Select the capped, ordered subset of repository files worth fetching.
///
/// Directories and ignored paths are dropped before scoring so they never
/// occupy a cap slot. Each surviving entry is scored additively from its path
/// alone, zero scorers are dropped, and the result is sorted by descending
/// priority and truncated to `config.max_files`.
///
/// Ties are broken by ascending path. The sort is therefore a total order and
/// the output is reproducible for a given input and config regardless of
/// entry discovery order.
///
/// The only failure mode is a malformed entry: an empty path fails fast with
/// `AnalysisError::InvalidInput`. Empty input produces empty output.
pub fn rank_entries(
    entries: &[RepoEntry],
    config: &RankingConfig,
) -> Result<Vec<ScoredFile>, AnalysisError> {
    for entry in entries {
        if entry.path.is_empty() {
            return Err(AnalysisError::invalid_input(
                "repository entry with empty path",
            ));
        }
    }

    let mut files: Vec<ScoredFile> = entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::Blob)
        .filter(|entry| !is_ignored(&entry.path, config))
        .map(|entry| score_entry(entry, config))
        .filter(|file| file.priority > 0)
        .collect();

    files.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.path.cmp(&b.path))
    });
    files.truncate(config.max_files);

    info!(
        "Selected {} important files out of {} tree entries",
        files.len(),
        entries.len()
    );
    for file in &files {
        debug!("Selected {} (priority: {})", file.path, file.priority);
    }

    Ok(files)
}

fn is_ignored(path: &str, config: &RankingConfig) -> bool {
    config
        .ignored_path_substrings
        .iter()
        .any(|ignored| path.contains(ignored.as_str()))
}

/// Classify and score a single surviving entry from its path alone
fn score_entry(entry: &RepoEntry, config: &RankingConfig) -> ScoredFile {
    let name = entry.name().to_string();

    let is_config_file = config.config_file_names.iter().any(|c| c == &name);
    let is_code_file = config
        .code_file_extensions
        .iter()
        .any(|ext| entry.path.ends_with(ext.as_str()));
    let is_in_important_dir = config
        .important_dir_prefixes
        .iter()
        .any(|prefix| entry.path.starts_with(prefix.as_str()));

    let lowered = name.to_lowercase();
    let mut priority = 0;
    if is_config_file {
        priority += CONFIG_FILE_WEIGHT;
    }
    if is_in_important_dir {
        priority += IMPORTANT_DIR_WEIGHT;
    }
    if lowered.contains("index") {
        priority += INDEX_NAME_WEIGHT;
    }
    if lowered.contains("main") {
        priority += MAIN_NAME_WEIGHT;
    }
    if lowered.contains("app") {
        priority += APP_NAME_WEIGHT;
    }
    if is_code_file {
        priority += CODE_FILE_WEIGHT;
    }

    ScoredFile {
        path: entry.path.clone(),
        name,
        content_ref: entry.content_ref.clone(),
        is_config_file,
        is_code_file,
        is_in_important_dir,
        priority,
    }
}
