//! Fatal errors. Everything recoverable becomes a [`Finding`](crate::types::Finding) instead.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    #[error("cannot read apps directory {}: {source}", path.display())]
    AppsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
