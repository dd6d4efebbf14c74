use repo_ranker::config::{Config, FetchConfig, RankingConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_classification_tables() {
    let config = RankingConfig::default();

    // The exact table contents decide which files downstream analysis sees,
    // so pin every default.
    assert_eq!(
        config.config_file_names,
        vec![
            "package.json",
            "requirements.txt",
            "Gemfile",
            "pom.xml",
            "Cargo.toml",
            "go.mod",
            "composer.json",
            "pubspec.yaml",
            "tsconfig.json",
        ]
    );
    assert_eq!(
        config.important_dir_prefixes,
        vec![
            "src/",
            "app/",
            "lib/",
            "backend/",
            "frontend/",
            "server/",
            "client/",
        ]
    );
    assert_eq!(
        config.code_file_extensions,
        vec![".js", ".jsx", ".ts", ".tsx", ".py", ".java", ".go", ".rs", ".php", ".rb"]
    );
    assert_eq!(
        config.ignored_path_substrings,
        vec![
            "node_modules/",
            "dist/",
            "build/",
            "__pycache__/",
            ".git/",
            "vendor/",
        ]
    );
    assert_eq!(config.max_files, 15);
}

#[test]
fn test_default_fetch_config() {
    let config = FetchConfig::default();
    assert_eq!(config.max_concurrent_fetches, 15);
    assert_eq!(config.max_content_chars, 2000);
}

#[test]
fn test_config_from_file() {
    let json = r#"{
        "ranking": {
            "config_file_names": ["package.json"],
            "important_dir_prefixes": ["src/"],
            "code_file_extensions": [".rs"],
            "ignored_path_substrings": ["target/"],
            "max_files": 5
        },
        "fetch": {
            "max_concurrent_fetches": 4,
            "max_content_chars": 500
        }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config = Config::from_file(file.path().to_str()).unwrap();

    assert_eq!(config.ranking.config_file_names, vec!["package.json"]);
    assert_eq!(config.ranking.important_dir_prefixes, vec!["src/"]);
    assert_eq!(config.ranking.code_file_extensions, vec![".rs"]);
    assert_eq!(config.ranking.ignored_path_substrings, vec!["target/"]);
    assert_eq!(config.ranking.max_files, 5);
    assert_eq!(config.fetch.max_concurrent_fetches, 4);
    assert_eq!(config.fetch.max_content_chars, 500);
}

#[test]
fn test_config_from_missing_file_fails() {
    let result = Config::from_file(Some("does-not-exist.json"));
    assert!(result.is_err());
}

#[test]
fn test_config_roundtrip() {
    let config = Config::default();
    let serialized = serde_json::to_string_pretty(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&serialized).unwrap();

    assert_eq!(
        deserialized.ranking.config_file_names,
        config.ranking.config_file_names
    );
    assert_eq!(deserialized.ranking.max_files, config.ranking.max_files);
    assert_eq!(
        deserialized.fetch.max_content_chars,
        config.fetch.max_content_chars
    );
}
