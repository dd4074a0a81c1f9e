use crate::reply::{ErrorReply, Reply};
use log::Level;
use moviequeue_protocol::UpstreamError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{0}")]
    MissingArguments(&'static str),

    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

/// User-facing failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingArguments,
    UpstreamUnauthorized,
    UpstreamForbidden,
    UpstreamConflict,
    UpstreamTransportFailure,
    UpstreamUnexpectedStatus,
    MissingCredential,
}

/// A failure mapped to its reply text and the severity it is logged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    pub level: Level,
    /// Goes to the log only, never to the chat.
    pub detail: String,
}

impl ClassifiedError {
    /// Logs at the classified severity and turns the failure into a reply.
    pub fn into_reply(self) -> Reply {
        log::log!(self.level, "{:?}: {}", self.kind, self.detail);
        Reply::Error(ErrorReply {
            kind: self.kind,
            message: self.message,
        })
    }
}

pub fn classify(error: &DispatchError) -> ClassifiedError {
    let (kind, message, level) = match error {
        DispatchError::MissingArguments(requirement) => (
            ErrorKind::MissingArguments,
            (*requirement).to_string(),
            Level::Debug,
        ),
        DispatchError::Upstream(UpstreamError::Unauthorized) => (
            ErrorKind::UpstreamUnauthorized,
            "Cannot complete action, failed to authorize to TimApi".to_string(),
            Level::Error,
        ),
        DispatchError::Upstream(UpstreamError::Forbidden) => (
            ErrorKind::UpstreamForbidden,
            "Cannot complete action, it is forbidden".to_string(),
            Level::Error,
        ),
        DispatchError::Upstream(UpstreamError::Conflict(_)) => (
            ErrorKind::UpstreamConflict,
            "Movie is already enqueued/has been watched".to_string(),
            Level::Info,
        ),
        DispatchError::Upstream(UpstreamError::Transport(detail)) => (
            ErrorKind::UpstreamTransportFailure,
            format!("failed to complete action\n{detail}"),
            Level::Error,
        ),
        DispatchError::Upstream(UpstreamError::UnexpectedStatus { status, detail }) => (
            ErrorKind::UpstreamUnexpectedStatus,
            format!("Unhandled status code error:\n[{status}] {detail}"),
            Level::Warn,
        ),
        DispatchError::Upstream(UpstreamError::MissingCredential(_)) => (
            ErrorKind::MissingCredential,
            "Failed to complete action, missing token".to_string(),
            Level::Error,
        ),
    };

    ClassifiedError {
        kind,
        message,
        level,
        detail: error.to_string(),
    }
}
