//! Subscription state file.
//!
//! The engines never persist anything; the binary keeps the single user's
//! subscription in a small TOML file between runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use nlg_model::UserSubscription;

/// Used when neither `--state` nor the environment names a file.
pub const DEFAULT_STATE_FILE: &str = "newsletter-studio.toml";

/// Environment variable that overrides [`DEFAULT_STATE_FILE`].
pub const STATE_ENV_VAR: &str = "NEWSLETTER_STUDIO_STATE";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read state file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid state file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode state: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// On-disk layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioState {
    #[serde(default)]
    pub subscription: UserSubscription,
}

/// Loads the state at `path`; a missing file is a brand new user.
pub fn load_state(path: &Path) -> Result<StudioState, StateError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no state file, starting fresh");
            return Ok(StudioState::default());
        }
        Err(source) => {
            return Err(StateError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&text).map_err(|source| StateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `state` to `path`, creating parent directories as needed.
pub fn save_state(path: &Path, state: &StudioState) -> Result<(), StateError> {
    let text = toml::to_string_pretty(state)?;
    let write_error = |source| StateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, text).map_err(write_error)?;
    debug!(path = %path.display(), "saved state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use nlg_model::SubscriptionTier;

    use super::*;

    #[test]
    fn missing_file_is_initial_subscription() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = load_state(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(state.subscription, UserSubscription::initial());
    }

    #[test]
    fn toml_layout() {
        let state = StudioState {
            subscription: UserSubscription {
                tier: SubscriptionTier::Pro,
                generations_used: 5,
                generations_limit: None,
            },
        };
        let text = toml::to_string_pretty(&state).expect("encode");
        assert!(text.contains("[subscription]"));
        assert!(text.contains("tier = \"pro\""));
        assert!(!text.contains("generations_limit"));
        let decoded: StudioState = toml::from_str(&text).expect("decode");
        assert_eq!(decoded, state);
    }

    #[test]
    fn unknown_tier_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("state.toml");
        fs::write(&path, "[subscription]\ntier = \"gold\"\ngenerations_used = 0\n")
            .expect("write");
        let err = load_state(&path).unwrap_err();
        assert!(matches!(err, StateError::Parse { .. }));
    }
}
