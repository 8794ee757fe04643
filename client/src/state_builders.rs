//! Builders wiring configuration into a ready-to-use user directory.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::config::{ClientSettings, ConfigError};
use crate::domain::UserDirectoryService;
use crate::domain::ports::{Sleeper, TokioSleeper};
use crate::outbound::http::{HttpUsersSource, HttpUsersSourceBuildError};
use crate::outbound::mock::MockUsersSource;

/// Directory backed by the reqwest adapter with the in-memory fallback.
pub type HttpUserDirectory = UserDirectoryService<HttpUsersSource, MockUsersSource>;

/// Errors raised while assembling the directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryBuildError {
    /// Configuration values were invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The HTTP adapter could not be built.
    #[error(transparent)]
    Remote(#[from] HttpUsersSourceBuildError),
}

/// Runtime helpers used by the fallback source.
pub struct DirectoryRuntime {
    /// Async sleep implementation used for simulated latency.
    pub sleeper: Arc<dyn Sleeper>,
    /// Clock used to derive fallback ids.
    pub clock: Arc<dyn Clock>,
}

impl Default for DirectoryRuntime {
    fn default() -> Self {
        Self {
            sleeper: Arc::new(TokioSleeper),
            clock: Arc::new(DefaultClock),
        }
    }
}

/// Build a directory using default runtime dependencies.
///
/// # Errors
///
/// Returns [`DirectoryBuildError`] when the settings are invalid or the HTTP
/// client cannot be constructed.
pub fn build_user_directory(
    settings: &ClientSettings,
) -> Result<HttpUserDirectory, DirectoryBuildError> {
    build_user_directory_with_runtime(settings, DirectoryRuntime::default())
}

/// Build a directory with injected runtime abstractions.
///
/// # Errors
///
/// Returns [`DirectoryBuildError`] when the settings are invalid or the HTTP
/// client cannot be constructed.
pub fn build_user_directory_with_runtime(
    settings: &ClientSettings,
    runtime: DirectoryRuntime,
) -> Result<HttpUserDirectory, DirectoryBuildError> {
    let remote = HttpUsersSource::new(settings.base_url()?, settings.request_timeout())?;
    let fallback = MockUsersSource::new(runtime.sleeper, runtime.clock, settings.mock_latency());
    Ok(UserDirectoryService::new(Arc::new(remote), Arc::new(fallback)))
}
