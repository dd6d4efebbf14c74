use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ranking: RankingConfig,
    pub fetch: FetchConfig,
}

/// Classification tables and cap for the importance ranker.
///
/// The weights applied by the ranker depend on exact membership in these
/// tables, so changing a default changes which files downstream analysis
/// ever sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Exact file names treated as dependency/build manifests
    pub config_file_names: Vec<String>,

    /// Path prefixes treated as likely application-code roots
    pub important_dir_prefixes: Vec<String>,

    /// Path suffixes treated as source code
    pub code_file_extensions: Vec<String>,

    /// Substrings that exclude a path outright (build output, dependency
    /// caches, version-control metadata)
    pub ignored_path_substrings: Vec<String>,

    /// Maximum number of files the ranker will ever return
    pub max_files: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Upper bound on in-flight content fetches
    pub max_concurrent_fetches: usize,

    /// Per-file content truncation, in characters, applied before the
    /// content is forwarded downstream
    pub max_content_chars: usize,
}

impl Config {
    pub fn from_file(path: Option<&str>) -> Result<Self> {
        let path = path.unwrap_or("config.json");
        let file = File::open(path).context(format!("Failed to open config file: {}", path))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranking: RankingConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            config_file_names: vec![
                "package.json".to_string(),
                "requirements.txt".to_string(),
                "Gemfile".to_string(),
                "pom.xml".to_string(),
                "Cargo.toml".to_string(),
                "go.mod".to_string(),
                "composer.json".to_string(),
                "pubspec.yaml".to_string(),
                "tsconfig.json".to_string(),
            ],
            important_dir_prefixes: vec![
                "src/".to_string(),
                "app/".to_string(),
                "lib/".to_string(),
                "backend/".to_string(),
                "frontend/".to_string(),
                "server/".to_string(),
                "client/".to_string(),
            ],
            code_file_extensions: vec![
                ".js".to_string(),
                ".jsx".to_string(),
                ".ts".to_string(),
                ".tsx".to_string(),
                ".py".to_string(),
                ".java".to_string(),
                ".go".to_string(),
                ".rs".to_string(),
                ".php".to_string(),
                ".rb".to_string(),
            ],
            ignored_path_substrings: vec![
                "node_modules/".to_string(),
                "dist/".to_string(),
                "build/".to_string(),
                "__pycache__/".to_string(),
                ".git/".to_string(),
                "vendor/".to_string(),
            ],
            max_files: 15,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 15,
            max_content_chars: 2000,
        }
    }
}
