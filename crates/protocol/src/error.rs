use thiserror::Error;

pub type UpstreamResult<T> = std::result::Result<T, UpstreamError>;

/// Failures of the catalog and streaming lookup collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("[{status}] {detail}")]
    UnexpectedStatus { status: u16, detail: String },

    #[error("missing credential `{0}`")]
    MissingCredential(&'static str),
}

impl UpstreamError {
    /// Maps a non-success HTTP status onto the taxonomy.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            409 => Self::Conflict(detail.into()),
            _ => Self::UnexpectedStatus {
                status,
                detail: detail.into(),
            },
        }
    }
}
