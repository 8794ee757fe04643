//! Driven port for the authoritative remote user service.
//!
//! The domain owns the error taxonomy so classification stays independent of
//! the HTTP library used by the adapter.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{NewUser, User};

define_port_error! {
    /// Failures surfaced by a remote users source.
    pub enum RemoteUsersError {
        /// The service answered with a status outside the success range.
        Status {
            /// HTTP status code.
            status: u16,
            /// Response body text; empty when unreadable.
            body: String,
        } => "remote users service returned status {status}",
        /// The request never produced a readable response.
        Transport {
            /// Transport failure description.
            message: String,
        } => "remote users transport failed: {message}",
        /// The response body was not valid JSON.
        Decode {
            /// Parser failure description.
            message: String,
        } => "remote users response is not valid JSON: {message}",
        /// The response body was JSON of the wrong shape.
        UnexpectedShape {
            /// What was found instead of the expected shape.
            message: String,
        } => "remote users response has an unexpected shape: {message}",
    }
}

impl RemoteUsersError {
    /// HTTP status carried by the error, if the service answered at all.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for listing and creating users against the remote service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteUsersSource: Send + Sync {
    /// Fetch every user known to the service.
    async fn fetch_users(&self) -> Result<Vec<User>, RemoteUsersError>;

    /// Persist `candidate` and return the stored record.
    async fn create_user(&self, candidate: &NewUser) -> Result<User, RemoteUsersError>;
}
