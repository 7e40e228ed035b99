use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::APP_DIR_NAME;

#[derive(Error, Debug)]
pub enum ArtifactResolveError {
    #[error("explicit artifact path does not exist: {0}")]
    ExplicitMissing(PathBuf),
    #[error("classifier artifacts '{name}' not found (searched: {searched:?})")]
    NotFound { name: String, searched: Vec<PathBuf> },
}

/// Resolve a classifier artifact file, checking locations in order:
///
/// 1. Explicit path (must exist when given)
/// 2. User cache directory (platform-specific)
/// 3. Bundled directory (for development / pre-packaged installs)
pub fn resolve(
    name: &str,
    explicit: Option<&Path>,
    bundled_dir: Option<&Path>,
) -> Result<PathBuf, ArtifactResolveError> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(ArtifactResolveError::ExplicitMissing(path.to_path_buf()));
    }

    let candidates: Vec<PathBuf> = artifact_cache_dir()
        .into_iter()
        .chain(bundled_dir.map(Path::to_path_buf))
        .map(|dir| dir.join(name))
        .collect();

    match candidates.iter().find(|p| p.exists()) {
        Some(found) => {
            log::debug!("Resolved classifier artifacts at {}", found.display());
            Ok(found.clone())
        }
        None => Err(ArtifactResolveError::NotFound {
            name: name.to_string(),
            searched: candidates,
        }),
    }
}

/// Platform-specific artifact cache directory.
///
/// - macOS: `~/Library/Application Support/FaceShape/models/`
/// - Linux: `$XDG_CACHE_HOME/FaceShape/models/` or `~/.cache/FaceShape/models/`
/// - Windows: `%LOCALAPPDATA%/FaceShape/models/`
pub fn artifact_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().map(|d| d.join(APP_DIR_NAME).join("models"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir().map(|d| d.join(APP_DIR_NAME).join("models"))
    }
}
