use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::models::entry::RepoEntry;

/// Supplies the flat tree listing for a repository.
///
/// Implementations wrap whatever source-control host the pipeline talks to;
/// the ranker only ever sees the (possibly empty) entry list.
#[async_trait]
pub trait TreeLister: Send + Sync {
    async fn list_tree(&self) -> Result<Vec<RepoEntry>, AnalysisError>;
}

/// Fetches the raw content behind a `content_ref` handle.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, content_ref: &str) -> Result<String, AnalysisError>;
}
