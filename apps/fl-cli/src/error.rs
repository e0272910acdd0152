//! Error type for the command-line front end.

/// Wraps the library errors so `main` can return a single type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Numeric(#[from] fl_core::FlError),

    #[error("{0}")]
    Roots(#[from] fl_roots::RootsError),

    #[error("{0}")]
    Lab(#[from] fl_lab::LabError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
