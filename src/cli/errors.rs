use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot access {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file is not a supported image format: {}", path.display())]
    NotAnImage { path: PathBuf },

    #[error(transparent)]
    Watermark(#[from] watermark::Error),
}
