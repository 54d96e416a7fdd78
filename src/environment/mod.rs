//! `.env` file loading.
//!
//! Variables already present in the process environment win over the file,
//! so values injected by the container runtime are never replaced.

use std::path::Path;

use crate::error::StartupResult;

/// Load `path` into the process environment.
///
/// A missing file is skipped with a warning unless `required` is set.
/// Returns whether a file was loaded.
pub fn load_env_file(path: &Path, required: bool) -> StartupResult<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Loaded env file");
            Ok(true)
        }
        Err(e) if e.not_found() && !required => {
            tracing::warn!(path = %path.display(), "Env file not found, skipping");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
