//! In-memory fallback adapter serving synthetic users.
//!
//! This module provides the [`FallbackUsersSource`] implementation used when
//! the remote service is unusable. Latency is simulated through the injected
//! [`Sleeper`] and created ids are derived from the injected clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{FallbackUsersSource, Sleeper};
use crate::domain::{NewUser, User, UserId};

const FIXTURE_USERS: [(i64, &str, &str); 2] = [
    (1, "pepe", "pepe@pepe.com"),
    (2, "maria", "maria@maria.com"),
];

/// Simulated latency applied before each mock response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    /// Delay before returning the fixture list.
    pub list: Duration,
    /// Delay before returning a created user.
    pub create: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            create: Duration::from_millis(300),
        }
    }
}

/// Deterministic fallback source.
///
/// `list_users` always yields the same two fixture records. `create_user`
/// assigns ids from the clock's epoch milliseconds, bumped past the last
/// issued id so that ids stay unique for the lifetime of the instance.
pub struct MockUsersSource {
    sleeper: Arc<dyn Sleeper>,
    clock: Arc<dyn Clock>,
    latency: MockLatency,
    last_id: AtomicI64,
}

impl MockUsersSource {
    /// Build a source with explicit runtime dependencies.
    /// ```rust,ignore
    /// let source = MockUsersSource::new(Arc::new(TokioSleeper), Arc::new(DefaultClock), MockLatency::default());
    /// ```
    #[must_use]
    pub fn new(sleeper: Arc<dyn Sleeper>, clock: Arc<dyn Clock>, latency: MockLatency) -> Self {
        let highest_fixture_id = FIXTURE_USERS
            .iter()
            .map(|(id, _, _)| *id)
            .max()
            .unwrap_or_default();
        Self {
            sleeper,
            clock,
            latency,
            last_id: AtomicI64::new(highest_fixture_id),
        }
    }

    fn next_id(&self) -> UserId {
        let now = self.clock.utc().timestamp_millis();
        let (Ok(previous) | Err(previous)) =
            self.last_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                    Some(next_after(last, now))
                });
        UserId::new(next_after(previous, now))
    }
}

const fn next_after(last: i64, now: i64) -> i64 {
    let bumped = last.saturating_add(1);
    if now > bumped { now } else { bumped }
}

fn fixture_users() -> Vec<User> {
    FIXTURE_USERS
        .iter()
        .map(|(id, name, email)| User::new(*id, *name, *email))
        .collect()
}

#[async_trait]
impl FallbackUsersSource for MockUsersSource {
    async fn list_users(&self) -> Vec<User> {
        self.sleeper.sleep(self.latency.list).await;
        fixture_users()
    }

    async fn create_user(&self, candidate: NewUser) -> User {
        self.sleeper.sleep(self.latency.create).await;
        let id = self.next_id();
        candidate.into_user(id)
    }
}
