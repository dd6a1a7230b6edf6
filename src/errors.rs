//! Error types for grpcopy

use thiserror::Error;

/// Main error type for grpcopy
///
/// Command generation itself cannot fail; these variants cover loading the
/// inputs (description files, config, metadata JSON) that feed it.
#[derive(Error, Debug)]
pub enum GrpcopyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Metadata(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, GrpcopyError>;
