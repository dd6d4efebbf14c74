pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod stages;

pub use config::Config;
pub use error::AnalysisError;
