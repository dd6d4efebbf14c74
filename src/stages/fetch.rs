use std::collections::HashMap;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::config::FetchConfig;
use crate::models::scored::ScoredFile;
use crate::sources::ContentFetcher;

/// Fetch the content behind each ranked file, concurrently.
///
/// At most `config.max_concurrent_fetches` requests are in flight at once.
/// A failed fetch is non-fatal: the file is omitted from the result and a
/// warning is logged. The returned map is keyed by path; callers that care
/// about ordering already have it from the ranked list.
pub async fn fetch_contents(
    files: &[ScoredFile],
    fetcher: &dyn ContentFetcher,
    config: &FetchConfig,
) -> HashMap<String, String> {
    let progress_bar = ProgressBar::new(files.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .unwrap(),
    );

    let mut futures = futures::stream::iter(files.iter().map(|file| {
        let progress_bar_ref = &progress_bar;

        async move {
            let result = fetcher.fetch(&file.content_ref).await;
            progress_bar_ref.inc(1);
            (file, result)
        }
    }))
    .buffer_unordered(config.max_concurrent_fetches.max(1));

    let mut contents = HashMap::new();

    while let Some((file, result)) = futures.next().await {
        match result {
            Ok(content) => {
                debug!("Fetched {} (priority: {})", file.path, file.priority);
                contents.insert(file.path.clone(), truncate_chars(&content, config.max_content_chars));
            }
            Err(e) => {
                warn!("Could not fetch {}: {}", file.path, e);
            }
        }
    }

    progress_bar.finish_with_message("Content fetch completed");

    contents
}

/// Truncate to at most `max_chars` characters, respecting char boundaries
fn truncate_chars(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_index, _)) => content[..byte_index].to_string(),
        None => content.to_string(),
    }
}
