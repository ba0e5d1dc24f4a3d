//! Digitransit client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from the Digitransit HTTP client.
#[derive(Debug)]
pub enum DigitransitError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Endpoint or resource not found (HTTP 404)
    NotFound,

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Server answered with GraphQL errors and no data
    GraphQl(Vec<String>),

    /// Response parsed but did not have the expected shape
    Conversion(ConversionError),
}

impl fmt::Display for DigitransitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitransitError::Http(e) => write!(f, "HTTP error: {e}"),
            DigitransitError::NotFound => write!(f, "not found (HTTP 404)"),
            DigitransitError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DigitransitError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DigitransitError::GraphQl(messages) => {
                write!(f, "GraphQL error: {}", messages.join("; "))
            }
            DigitransitError::Conversion(e) => write!(f, "unexpected response: {e}"),
        }
    }
}

impl std::error::Error for DigitransitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigitransitError::Http(e) => Some(e),
            DigitransitError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DigitransitError {
    fn from(err: reqwest::Error) -> Self {
        DigitransitError::Http(err)
    }
}

impl From<ConversionError> for DigitransitError {
    fn from(err: ConversionError) -> Self {
        DigitransitError::Conversion(err)
    }
}
