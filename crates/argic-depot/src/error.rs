//! Error types for the depot client.

use thiserror::Error;

/// Errors from a depot lookup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DepotError {
    /// The request never produced a usable HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status and no SOAP fault.
    #[error("HTTP {status} from depot service")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The service returned a SOAP fault.
    #[error("SOAP fault {code}: {message}")]
    Fault {
        /// `faultcode` element text.
        code: String,
        /// `faultstring` element text.
        message: String,
    },

    /// The response was not the XML document we expected.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Missing or invalid client settings.
    #[error("configuration error: {0}")]
    Config(String),
}

impl DepotError {
    pub(crate) fn protocol(message: impl std::fmt::Display) -> Self {
        Self::Protocol(message.to_string())
    }

    /// Transport failures: no response, or a non-success HTTP status.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. })
    }

    /// Returns whether a retry could plausibly succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status } => *status >= 500,
            Self::Fault { .. } | Self::Protocol(_) | Self::Config(_) => false,
        }
    }
}

/// Result type for depot operations.
pub type Result<T> = std::result::Result<T, DepotError>;
