//! Resilient user directory client.
//!
//! Fetches and creates users against a remote HTTP service and, when the
//! remote path fails for any reason, serves synthetic data instead. Every
//! result is a [`FetchResult`] recording which path produced it, so callers
//! never handle transport or HTTP errors themselves.
//!
//! # Example
//!
//! ```no_run
//! use client::config::ClientSettings;
//! use client::domain::ports::UserDirectory;
//! use client::domain::{NewUser, Provenance};
//! use client::state_builders::build_user_directory;
//!
//! # async fn demo(settings: ClientSettings) -> Result<(), Box<dyn std::error::Error>> {
//! let directory = build_user_directory(&settings)?;
//!
//! let users = directory.get_users().await;
//! if users.provenance() == Provenance::Mock {
//!     eprintln!("{}", users.message().unwrap_or_default());
//! }
//!
//! let created = directory
//!     .create_user(NewUser::new("ana", "ana@x.com")?)
//!     .await;
//! assert_eq!(created.payload().name(), "ana");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod state_builders;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use domain::{FetchResult, Provenance};
