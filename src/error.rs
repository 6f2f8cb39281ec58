use std::result;

use thiserror::Error;

/// Error types for PubMed fetch operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// The identifier batch contained no non-empty identifier
    #[error("Empty list of PMIDs")]
    EmptyBatch,

    /// The EFetch base URL resolved to an empty string
    #[error("PubMed EFetch URL is empty")]
    MissingEndpoint,

    /// No HTTP transport was supplied
    #[error("HTTP transport is missing")]
    InvalidTransport,

    /// HTTP request failed (connection, timeout, status, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not a PubmedArticleSet document
    ///
    /// `raw` holds the response body when the caller asked for it, so the
    /// payload can still be inspected.
    #[error("Failed to decode PubMed XML: {message}")]
    Decode {
        message: String,
        raw: Option<Vec<u8>>,
    },
}

impl FetchError {
    /// Whether the call was rejected before any network activity
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            FetchError::EmptyBatch | FetchError::MissingEndpoint | FetchError::InvalidTransport
        )
    }

    /// Raw response body carried by a decode failure, if any
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            FetchError::Decode { raw, .. } => raw.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        FetchError::Decode {
            message: message.into(),
            raw: None,
        }
    }

    pub(crate) fn with_raw(self, body: Vec<u8>) -> Self {
        match self {
            FetchError::Decode { message, .. } => FetchError::Decode {
                message,
                raw: Some(body),
            },
            other => other,
        }
    }

    pub(crate) fn without_raw(self) -> Self {
        match self {
            FetchError::Decode { message, .. } => FetchError::Decode { message, raw: None },
            other => other,
        }
    }
}

pub type Result<T> = result::Result<T, FetchError>;
