use crate::modules::activities::core::activity::Roster;
use crate::modules::activities::core::seed::{SeedError, default_roster, validate_roster};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedLoadError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] SeedError),
}

/// Loads the roster from `path` when given, otherwise the built-in school roster.
pub fn load(path: Option<&Path>) -> Result<Roster, SeedLoadError> {
    let Some(path) = path else {
        return Ok(default_roster());
    };

    let raw = std::fs::read_to_string(path).map_err(|source| SeedLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster: Roster = serde_json::from_str(&raw).map_err(|source| SeedLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_roster(&roster)?;

    tracing::info!(path = %path.display(), activities = roster.len(), "loaded roster seed");
    Ok(roster)
}
