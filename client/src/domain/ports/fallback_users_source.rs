//! Driven port for the synthetic fallback dataset.
//!
//! Fallback sources are infallible: nothing sits beneath them, so the
//! signatures return plain values.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

/// Port serving stand-in data when the remote service is unusable.
#[async_trait]
pub trait FallbackUsersSource: Send + Sync {
    /// Return the synthetic user list.
    async fn list_users(&self) -> Vec<User>;

    /// Produce an ephemeral user from `candidate` with a freshly assigned id.
    async fn create_user(&self, candidate: NewUser) -> User;
}
