//! Domain primitives, classification, and fallback orchestration.
//!
//! Purpose: define the user model, the provenance-tagged result envelope, and
//! the service that turns remote failures into annotated fallback results.
//! Transport concerns stay behind the ports in [`ports`].
//!
//! Public surface:
//! - `User` / `NewUser`: directory records and validated creation candidates.
//! - `FetchResult` / `Provenance`: result envelope returned to callers.
//! - `classify` / `ClassifiedError` / `ErrorCategory`: failure classification.
//! - `UserDirectoryService`: remote-first service with mock fallback.

pub mod classification;
pub mod fetch_result;
pub mod ports;
pub mod user;
pub mod user_directory_service;

pub use self::classification::{ClassifiedError, ErrorCategory, classify};
pub use self::fetch_result::{FetchResult, Provenance};
pub use self::user::{NewUser, User, UserId, UserValidationError};
pub use self::user_directory_service::UserDirectoryService;
