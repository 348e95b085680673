// src/errors.rs
//
// Errors surfaced at startup. The trail engine itself never fails:
// missing mounts, detached tiles and narrow viewports are silent no-ops.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrailError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to load image {path}: {message}")]
    AssetLoad { path: PathBuf, message: String },

    #[error("Failed to build window: {0}")]
    Window(String),
}
