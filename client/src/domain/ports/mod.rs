//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod fallback_users_source;
mod remote_users_source;
mod sleeper;
mod user_directory;

pub use fallback_users_source::FallbackUsersSource;
#[cfg(test)]
pub(crate) use remote_users_source::MockRemoteUsersSource;
pub use remote_users_source::{RemoteUsersError, RemoteUsersSource};
pub use sleeper::{Sleeper, TokioSleeper};
pub use user_directory::UserDirectory;
