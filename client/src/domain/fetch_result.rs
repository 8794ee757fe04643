//! Provenance-tagged result envelope returned by the public API.
//!
//! The payload is never overloaded with metadata: whether data came from the
//! remote service or the fallback source travels alongside it.

use std::fmt;

/// Which path produced a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// The remote user service answered successfully.
    Remote,
    /// The remote attempt failed and synthetic data was substituted.
    Mock,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Mock => f.write_str("mock"),
        }
    }
}

/// Payload plus provenance and an optional fallback message.
///
/// ## Invariants
/// - `message` is present if and only if `provenance` is [`Provenance::Mock`].
///
/// # Examples
/// ```
/// use client::domain::{FetchResult, Provenance};
///
/// let remote = FetchResult::remote(vec![1, 2]);
/// assert_eq!(remote.provenance(), Provenance::Remote);
/// assert!(remote.message().is_none());
///
/// let mock = FetchResult::mock(vec![1], "server error — showing fallback data");
/// assert_eq!(mock.provenance(), Provenance::Mock);
/// assert!(mock.message().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult<T> {
    payload: T,
    provenance: Provenance,
    message: Option<String>,
}

impl<T> FetchResult<T> {
    /// Wrap a payload served by the remote service.
    #[must_use]
    pub const fn remote(payload: T) -> Self {
        Self {
            payload,
            provenance: Provenance::Remote,
            message: None,
        }
    }

    /// Wrap a payload served by the fallback source together with the reason.
    ///
    /// `message` must be non-empty; debug builds assert it.
    #[must_use]
    pub fn mock(payload: T, message: impl Into<String>) -> Self {
        let reason = message.into();
        debug_assert!(!reason.is_empty(), "fallback message must not be empty");
        Self {
            payload,
            provenance: Provenance::Mock,
            message: Some(reason),
        }
    }

    /// Borrow the payload.
    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Take ownership of the payload, discarding the envelope.
    #[must_use]
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Path that produced the payload.
    #[must_use]
    pub const fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Fallback message; `None` when the remote path succeeded.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Return whether the payload came from the fallback source.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.provenance, Provenance::Mock)
    }
}
