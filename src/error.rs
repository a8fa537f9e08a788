use std::path::PathBuf;

use thiserror::Error;

use crate::contributor::DataError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed contributors file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid contributors file: {0}")]
    Data(#[from] DataError),

    #[error("invalid listen address {0}")]
    Listen(String),
}
