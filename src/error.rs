use thiserror::Error;

/// Reasons a locale could not be loaded. None of them touch the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("invalid locale code {0:?}")]
    InvalidCode(String),

    #[error("request for {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed translation file: {0}")]
    Malformed(String),
}
