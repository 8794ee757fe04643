//! Classification of failed remote attempts into stable categories.
//!
//! The mapping is total: every [`RemoteUsersError`] lands in exactly one
//! [`ErrorCategory`], and the same error always lands in the same one.

use std::fmt;

use crate::domain::ports::RemoteUsersError;

const NOT_FOUND_STATUS: u16 = 404;
const SERVER_ERROR_FLOOR: u16 = 500;

/// Stable category describing why the remote path failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The service answered 404.
    NotFound,
    /// The service answered with a 5xx status.
    ServerError,
    /// The body was not JSON, or was JSON of the wrong shape.
    MalformedResponse,
    /// Any other status or a transport failure.
    Unknown,
}

impl ErrorCategory {
    /// Human-readable message shown to users for this category.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotFound => "resource not found",
            Self::ServerError => "server error",
            Self::MalformedResponse | Self::Unknown => "an error occurred",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not_found",
            Self::ServerError => "server_error",
            Self::MalformedResponse => "malformed_response",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Category plus the technical detail of the failure it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    category: ErrorCategory,
    detail: String,
}

impl ClassifiedError {
    /// Derived category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Technical detail for diagnostics.
    #[must_use]
    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }

    /// User-facing message for the category.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.category.message()
    }
}

/// Classify a failed remote attempt.
///
/// Status rules apply first (404, then 5xx); everything else falls through to
/// [`ErrorCategory::MalformedResponse`] for body problems or
/// [`ErrorCategory::Unknown`].
///
/// # Examples
/// ```
/// use client::domain::ports::RemoteUsersError;
/// use client::domain::{ErrorCategory, classify};
///
/// let classified = classify(&RemoteUsersError::status(503_u16, ""));
/// assert_eq!(classified.category(), ErrorCategory::ServerError);
/// assert_eq!(classified.message(), "server error");
/// ```
#[must_use]
pub fn classify(error: &RemoteUsersError) -> ClassifiedError {
    let category = match error.http_status() {
        Some(NOT_FOUND_STATUS) => ErrorCategory::NotFound,
        Some(status) if status >= SERVER_ERROR_FLOOR => ErrorCategory::ServerError,
        Some(_) => ErrorCategory::Unknown,
        None => match error {
            RemoteUsersError::Decode { .. } | RemoteUsersError::UnexpectedShape { .. } => {
                ErrorCategory::MalformedResponse
            }
            RemoteUsersError::Status { .. } | RemoteUsersError::Transport { .. } => {
                ErrorCategory::Unknown
            }
        },
    };
    ClassifiedError {
        category,
        detail: error.to_string(),
    }
}
