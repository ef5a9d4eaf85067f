use crate::adapters::download::DownloadKind;
use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 404 from an API endpoint, carrying the message of the `{"error": ...}` body.
    #[error("quaver: {0}")]
    NotFound(String),

    #[error("unable to download {0} - not found")]
    DownloadNotFound(DownloadKind),

    #[error("unexpected status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    #[error("unable to download {kind} - HTTP{}", .status.as_u16())]
    DownloadFailed {
        kind: DownloadKind,
        status: StatusCode,
    },

    /// Rejected locally, before any request was made.
    #[error("quaver: {0}")]
    Precondition(&'static str),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("context cancelled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::DownloadNotFound(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled | Error::DeadlineExceeded)
    }

    /// The HTTP status that caused this error, if it came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound(_) | Error::DownloadNotFound(_) => Some(StatusCode::NOT_FOUND),
            Error::UnexpectedStatus(status) | Error::DownloadFailed { status, .. } => {
                Some(*status)
            }
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}
