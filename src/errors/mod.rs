//! Error handling module for the fronter backend.
//!
//! Every error is terminal for the page request. Failures are reported to the visitor as a
//! single plain-text line with status 200, and logged with a stable error code.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const EMPTY_IDENTIFIER: &str = "EMPTY_IDENTIFIER";
    pub const INVALID_IDENTIFIER_FORMAT: &str = "INVALID_IDENTIFIER_FORMAT";
    pub const UPSTREAM_REQUEST_FAILED: &str = "UPSTREAM_REQUEST_FAILED";
    pub const UPSTREAM_NON_SUCCESS_STATUS: &str = "UPSTREAM_NON_SUCCESS_STATUS";
    pub const RESPONSE_READ_FAILED: &str = "RESPONSE_READ_FAILED";
    pub const RESPONSE_DECODE_FAILED: &str = "RESPONSE_DECODE_FAILED";
    pub const DATE_PARSE_FAILED: &str = "DATE_PARSE_FAILED";
    pub const TEMPLATE_FAILED: &str = "TEMPLATE_FAILED";
}

/// Which upstream lookup a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    System,
    Fronters,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// No system identifier in the route
    EmptyIdentifier,
    /// Identifier is not five lowercase letters (simple pages only)
    InvalidIdentifierFormat(String),
    /// Transport-level failure talking to the API
    UpstreamRequestFailed { upstream: Upstream, message: String },
    /// API answered with a non-2xx status
    UpstreamNonSuccessStatus { upstream: Upstream, status: StatusCode },
    /// Body could not be read off the wire
    ResponseReadFailed { upstream: Upstream, message: String },
    /// Body was not the expected JSON shape
    ResponseDecodeFailed { upstream: Upstream, message: String },
    /// Member birthday was not a `YYYY-MM-DD` date
    DateParseFailed(String),
    /// Template missing or failed to render
    TemplateFailed { template: String, message: String },
}

impl AppError {
    /// Status code sent with the plain-text error page.
    ///
    /// Every failure is sent with 200.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::EmptyIdentifier => codes::EMPTY_IDENTIFIER,
            AppError::InvalidIdentifierFormat(_) => codes::INVALID_IDENTIFIER_FORMAT,
            AppError::UpstreamRequestFailed { .. } => codes::UPSTREAM_REQUEST_FAILED,
            AppError::UpstreamNonSuccessStatus { .. } => codes::UPSTREAM_NON_SUCCESS_STATUS,
            AppError::ResponseReadFailed { .. } => codes::RESPONSE_READ_FAILED,
            AppError::ResponseDecodeFailed { .. } => codes::RESPONSE_DECODE_FAILED,
            AppError::DateParseFailed(_) => codes::DATE_PARSE_FAILED,
            AppError::TemplateFailed { .. } => codes::TEMPLATE_FAILED,
        }
    }

    /// Get the human-readable, one-line error message.
    pub fn message(&self) -> String {
        match self {
            AppError::EmptyIdentifier => "System ID was empty".to_string(),
            AppError::InvalidIdentifierFormat(_) => {
                "System ID wasn't a valid 5-letter ID".to_string()
            }
            AppError::UpstreamRequestFailed { upstream, message } => match upstream {
                Upstream::System => format!("Error getting system: {}", message),
                Upstream::Fronters => format!("Error getting the current fronter: {}", message),
            },
            AppError::UpstreamNonSuccessStatus { upstream, status } => match upstream {
                Upstream::System => format!("Error getting system: {}", status),
                Upstream::Fronters => {
                    format!("Error when getting the current fronter: {}", status)
                }
            },
            AppError::ResponseReadFailed { upstream, message } => match upstream {
                Upstream::System => format!("Error reading system info: {}", message),
                Upstream::Fronters => format!("Error reading the fronter info: {}", message),
            },
            AppError::ResponseDecodeFailed { upstream, message } => match upstream {
                Upstream::System => format!("Error unmarshaling system: {}", message),
                Upstream::Fronters => format!("Error unmarshaling fronter info: {}", message),
            },
            AppError::DateParseFailed(msg) => format!("Error parsing birthday: {}", msg),
            AppError::TemplateFailed { template, message } => {
                format!("Error rendering template {}: {}", template, message)
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::TemplateFailed {
            template: err.name().unwrap_or("<unknown>").to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::EmptyIdentifier | AppError::InvalidIdentifierFormat(_) => {
                tracing::warn!(code = self.error_code(), "{}", self.message())
            }
            _ => tracing::error!(code = self.error_code(), "{}", self.message()),
        }

        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_lookup() {
        let system = AppError::UpstreamNonSuccessStatus {
            upstream: Upstream::System,
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(system.message(), "Error getting system: 404 Not Found");

        let fronters = AppError::ResponseDecodeFailed {
            upstream: Upstream::Fronters,
            message: "expected value".to_string(),
        };
        assert_eq!(
            fronters.message(),
            "Error unmarshaling fronter info: expected value"
        );
    }

    #[test]
    fn test_every_error_is_reported_with_ok_status() {
        let errors = [
            AppError::EmptyIdentifier,
            AppError::InvalidIdentifierFormat("ABCDE".to_string()),
            AppError::DateParseFailed("bad".to_string()),
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::OK);
        }
    }

    #[test]
    fn test_display_includes_code() {
        assert_eq!(
            AppError::EmptyIdentifier.to_string(),
            "EMPTY_IDENTIFIER: System ID was empty"
        );
    }
}
