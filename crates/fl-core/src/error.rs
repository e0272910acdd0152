use thiserror::Error;

pub type FlResult<T> = Result<T, FlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlError {
    #[error("Invalid argument for {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl FlError {
    /// Name of the offending input.
    pub fn what(&self) -> &'static str {
        match self {
            FlError::InvalidArgument { what, .. } | FlError::NonFinite { what, .. } => what,
        }
    }
}
