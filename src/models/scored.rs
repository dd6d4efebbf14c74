use serde::{Deserialize, Serialize};

/// A repository file annotated with the classification flags and priority
/// that justified its inclusion in the ranked output.
///
/// Built once per ranking invocation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFile {
    /// Path relative to the repository root
    pub path: String,

    /// The final path segment
    pub name: String,

    /// Opaque handle used to fetch the file's bytes
    pub content_ref: String,

    /// The file name exactly matches a known dependency/build manifest
    pub is_config_file: bool,

    /// The path ends with a known source-code extension
    pub is_code_file: bool,

    /// The path starts with a likely application-code root
    pub is_in_important_dir: bool,

    /// Additive importance score; used purely for ordering and filtering
    pub priority: u32,
}
