use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a render pass or a CLI action
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read asset {path:?}: {source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write page to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeckError>;
