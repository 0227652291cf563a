//! Error types for the variables API client.

use thiserror::Error;

/// Errors that can occur while talking to the variables API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FigmaError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx, non-redirect status.
    #[error("Figma API request failed ({status}): {body}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The redirect chain exceeded the hop limit.
    #[error("too many redirects (last location: {location})")]
    TooManyRedirects {
        /// The location the next hop would have gone to.
        location: String,
    },

    /// A 2xx response body was not valid JSON for the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// A base URL, path or redirect location could not be parsed.
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL text.
        url: String,
        /// Parser message.
        message: String,
    },

    /// A header value could not be encoded.
    #[error("invalid header value for {name}")]
    InvalidHeader {
        /// Header name.
        name: String,
    },
}

impl FigmaError {
    /// HTTP status carried by the error, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FigmaError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, FigmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_includes_status_and_body() {
        let err = FigmaError::RequestFailed {
            status: 403,
            body: r#"{"status":403,"err":"Invalid token"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Figma API request failed (403): {"status":403,"err":"Invalid token"}"#
        );
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn transport_errors_have_no_status() {
        assert_eq!(FigmaError::Transport("refused".to_string()).status(), None);
    }
}
