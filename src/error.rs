use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Distribution parameters rejected at construction time.
    #[error("invalid configuration: Normal needs a finite mean and a finite positive std_dev, got mean={mean}, std_dev={std_dev}")]
    InvalidConfiguration { mean: f64, std_dev: f64 },

    /// A generator part was never supplied to the builder.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}
