use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(String),
    #[error("settings error: {0}")]
    Settings(String),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("console link unavailable: {0}")]
    Console(String),
    #[error("install failed: {0}")]
    Install(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl AppError {
    /// Fatal errors abort with a non-zero exit; everything else is reported
    /// to the calling shell as an `echo` line.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigUnavailable(_)
                | Self::Settings(_)
                | Self::Install(_)
                | Self::Io(_)
                | Self::Json(_)
        )
    }
}

/// Ways keyword resolution can fail. All of them are recoverable by retrying
/// with different keywords.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ResolveError {
    #[error("too few keywords used")]
    TooFewKeywords,
    #[error("no category keyword given (expected one of: {})", .expected.join(", "))]
    NoCategoryToken { expected: Vec<String> },
    #[error("no result found for your keywords: {}", .keywords.join(" "))]
    NoMatch { keywords: Vec<String> },
}
