use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockError {
    /// Malformed or missing input. Maps to HTTP 400.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Well-formed key outside its valid domain. Maps to HTTP 404.
    #[error("{what} not found: {value}")]
    NotFound { what: &'static str, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MockError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput { field, reason: reason.into() }
    }

    pub fn not_found(what: &'static str, value: impl ToString) -> Self {
        Self::NotFound { what, value: value.to_string() }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Serialization(_) | Self::Other(_) => 500,
        }
    }
}

pub type MockResult<T> = Result<T, MockError>;
