//! Fallback orchestration behind the [`UserDirectory`] port.
//!
//! Every call walks the same phases: attempt the remote source; on success
//! wrap the payload as [`Provenance::Remote`](crate::domain::Provenance);
//! otherwise classify the failure, serve the same request from the fallback
//! source and annotate the result with a message. Callers never observe a
//! remote error.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::classification::classify;
use crate::domain::ports::{
    FallbackUsersSource, RemoteUsersError, RemoteUsersSource, UserDirectory,
};
use crate::domain::{FetchResult, NewUser, User};

/// Logical request being served, used to label logs and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    ListUsers,
    CreateUser,
}

impl Operation {
    const fn fallback_suffix(self) -> &'static str {
        match self {
            Self::ListUsers => "showing fallback data",
            Self::CreateUser => "using fallback data",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListUsers => f.write_str("list_users"),
            Self::CreateUser => f.write_str("create_user"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AttemptingRemote,
    SucceededRemote,
    AttemptingMock,
    Completed,
}

fn enter(operation: Operation, phase: Phase) {
    debug!(%operation, ?phase, "user directory phase");
}

/// Domain service serving directory requests with a mock fallback.
#[derive(Clone)]
pub struct UserDirectoryService<R, F> {
    remote: Arc<R>,
    fallback: Arc<F>,
}

impl<R, F> UserDirectoryService<R, F> {
    /// Create a service over a remote source and its fallback.
    #[must_use]
    pub const fn new(remote: Arc<R>, fallback: Arc<F>) -> Self {
        Self { remote, fallback }
    }
}

impl<R, F> UserDirectoryService<R, F>
where
    R: RemoteUsersSource,
    F: FallbackUsersSource,
{
    async fn list_users(&self) -> FetchResult<Vec<User>> {
        let operation = Operation::ListUsers;
        enter(operation, Phase::AttemptingRemote);
        let result = match self.remote.fetch_users().await {
            Ok(users) => {
                enter(operation, Phase::SucceededRemote);
                FetchResult::remote(users)
            }
            Err(error) => {
                let message = fallback_message(operation, &error);
                enter(operation, Phase::AttemptingMock);
                FetchResult::mock(self.fallback.list_users().await, message)
            }
        };
        enter(operation, Phase::Completed);
        result
    }

    async fn store_user(&self, candidate: NewUser) -> FetchResult<User> {
        let operation = Operation::CreateUser;
        enter(operation, Phase::AttemptingRemote);
        let result = match self.remote.create_user(&candidate).await {
            Ok(user) => {
                enter(operation, Phase::SucceededRemote);
                FetchResult::remote(user)
            }
            Err(error) => {
                let message = fallback_message(operation, &error);
                enter(operation, Phase::AttemptingMock);
                FetchResult::mock(self.fallback.create_user(candidate).await, message)
            }
        };
        enter(operation, Phase::Completed);
        result
    }
}

fn fallback_message(operation: Operation, error: &RemoteUsersError) -> String {
    let classified = classify(error);
    warn!(
        %operation,
        category = %classified.category(),
        detail = classified.detail(),
        "remote users request failed; serving fallback data"
    );
    format!(
        "{} — {}",
        classified.message(),
        operation.fallback_suffix()
    )
}

#[async_trait]
impl<R, F> UserDirectory for UserDirectoryService<R, F>
where
    R: RemoteUsersSource,
    F: FallbackUsersSource,
{
    async fn get_users(&self) -> FetchResult<Vec<User>> {
        self.list_users().await
    }

    async fn create_user(&self, candidate: NewUser) -> FetchResult<User> {
        self.store_user(candidate).await
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
