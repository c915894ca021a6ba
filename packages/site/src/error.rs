use thiserror::Error;

use crate::i18n::{t, Lang};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid url {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// The endpoint answered with a non-2xx status and its own message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("server error: {status}")]
    Status { status: u16 },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Detail shown to the visitor between parentheses after the localized
    /// failure message.
    pub fn detail(&self, lang: Lang) -> String {
        match self {
            SiteError::Rejected { message, .. } => message.clone(),
            SiteError::Status { status } => format!("{} {status}", t(lang, "error.server_status")),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SiteError::Rejected { status, .. } | SiteError::Status { status } => Some(*status),
            SiteError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
