use store::form::FormError;
use store::notice::NoticeKind;
use store::text::FailureText;
use thiserror::Error;

/// Why a backend operation did not produce its result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The request never completed or the body could not be decoded.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// A required form field was blank; nothing was sent.
    #[error("{0}")]
    Invalid(&'static str),
    /// The client refused the operation before sending anything.
    #[error("{0}")]
    Protected(&'static str),
}

impl SyncError {
    /// Notification to show for this failure.
    pub fn notice(&self, text: FailureText) -> (NoticeKind, String) {
        match self {
            SyncError::Transport(_) => (NoticeKind::Failure, text.transport.to_string()),
            SyncError::Rejected(message) => {
                let prefix = text.rejected_prefix.unwrap_or_default();
                (NoticeKind::Failure, format!("{prefix}{message}"))
            }
            SyncError::Invalid(message) => (NoticeKind::Failure, message.to_string()),
            SyncError::Protected(message) => (NoticeKind::Warning, message.to_string()),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Transport(err.to_string())
    }
}

impl From<FormError> for SyncError {
    fn from(err: FormError) -> Self {
        SyncError::Invalid(err.0)
    }
}
