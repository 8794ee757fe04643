//! Driving port consumed by presentation adapters.
//!
//! Callers only ever receive a [`FetchResult`]; remote failures are absorbed
//! behind this boundary.

use async_trait::async_trait;

use crate::domain::{FetchResult, NewUser, User};

/// Use-case port for reading and creating directory users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return the user list together with the path that produced it.
    async fn get_users(&self) -> FetchResult<Vec<User>>;

    /// Create `candidate` and return the stored record with its provenance.
    ///
    /// The candidate has already been validated by [`NewUser::new`].
    async fn create_user(&self, candidate: NewUser) -> FetchResult<User>;
}
