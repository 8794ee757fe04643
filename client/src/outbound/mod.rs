//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed client for the remote users resource
//! - **mock**: in-memory synthetic users served when the remote path fails
//!
//! Adapters are thin translators between domain types and their transport or
//! storage representation. They contain no fallback logic.

pub mod http;
pub mod mock;
