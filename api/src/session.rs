//! Session-token persistence.
//!
//! The session token is a process-wide resource with no lifecycle beyond
//! "set on login success or clear": it is read fresh on every outgoing
//! request and once at process start, written when a login succeeds, and
//! removed on logout or when the backend invalidates the session. The
//! [`TokenStore`] trait reifies that storage as an explicit injected
//! dependency rather than ambient global state, so both the API client and
//! the auth slice receive the same store instance and tests can substitute
//! an in-memory one.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the token file location.
pub const TOKEN_PATH_ENV: &str = "DOCDESK_TOKEN_PATH";

/// File name of the persisted token under the config directory.
const TOKEN_FILE: &str = "session-token";

/// Application directory under the platform config dir.
const APP_DIR: &str = "docdesk";

/// Errors from token persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The persisted token could not be read.
    #[error("failed to read persisted token: {0}")]
    Read(String),

    /// The token could not be written or removed.
    #[error("failed to write persisted token: {0}")]
    Write(String),
}

/// Persistent storage for the session token.
///
/// Implementations must be cheap to call: the client reads the token on
/// every outgoing request. No caching happens above this trait.
pub trait TokenStore: Send + Sync {
    /// Read the current token, `None` when no session is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Read`] when the backing storage is
    /// unreadable for reasons other than absence.
    fn load(&self) -> Result<Option<String>, SessionError>;

    /// Persist a token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Write`] when the token cannot be stored.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the persisted token. Clearing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Write`] when removal fails.
    fn clear(&self) -> Result<(), SessionError>;
}

/// File-backed token store.
///
/// Stores the token as a single string under a well-known path
/// (`<config dir>/docdesk/session-token` by default).
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the well-known location, honoring the
    /// `DOCDESK_TOKEN_PATH` override.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Read`] when no configuration directory is
    /// available on this platform.
    pub fn from_env() -> Result<Self, SessionError> {
        if let Ok(path) = std::env::var(TOKEN_PATH_ENV) {
            return Ok(Self::new(path));
        }

        let base = dirs::config_dir()
            .ok_or_else(|| SessionError::Read("no config directory available".to_string()))?;
        Ok(Self::new(base.join(APP_DIR).join(TOKEN_FILE)))
    }

    /// The file path backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(SessionError::Read(error.to_string())),
        }
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|error| SessionError::Write(error.to_string()))?;
        }
        std::fs::write(&self.path, token).map_err(|error| SessionError::Write(error.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionError::Write(error.to_string())),
        }
    }
}
