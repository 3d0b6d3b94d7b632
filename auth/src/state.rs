//! Authentication state types.

use docdesk_api::TokenStore;
use serde::{Deserialize, Serialize};

/// Authentication slice state.
///
/// Invariant: `is_authenticated` is true iff `token` is set. The state is
/// restored from persisted storage once at process start; the token is not
/// validated eagerly - validity is discovered lazily on the first
/// authenticated request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Current session token, if logged in.
    pub token: Option<String>,

    /// Whether a session token is held.
    pub is_authenticated: bool,

    /// Whether a login is in flight.
    pub loading: bool,

    /// Message of the last failed operation, until dismissed.
    pub error: Option<String>,
}

impl AuthState {
    /// Build the initial state from persisted storage.
    ///
    /// A present token means the session starts authenticated; an
    /// unreadable store is treated as an absent session.
    pub fn restore<T: TokenStore>(tokens: &T) -> Self {
        let token = match tokens.load() {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!(%error, "failed to read persisted session token");
                None
            },
        };

        Self {
            is_authenticated: token.is_some(),
            token,
            loading: false,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_api::SessionError;

    struct FailingStore;

    impl TokenStore for FailingStore {
        fn load(&self) -> Result<Option<String>, SessionError> {
            Err(SessionError::Read("disk on fire".to_string()))
        }

        fn save(&self, _token: &str) -> Result<(), SessionError> {
            Ok(())
        }

        fn clear(&self) -> Result<(), SessionError> {
            Ok(())
        }
    }

    struct StoredToken(Option<&'static str>);

    impl TokenStore for StoredToken {
        fn load(&self) -> Result<Option<String>, SessionError> {
            Ok(self.0.map(str::to_string))
        }

        fn save(&self, _token: &str) -> Result<(), SessionError> {
            Ok(())
        }

        fn clear(&self) -> Result<(), SessionError> {
            Ok(())
        }
    }

    #[test]
    fn restore_with_token_starts_authenticated() {
        let state = AuthState::restore(&StoredToken(Some("abc")));
        assert_eq!(state.token.as_deref(), Some("abc"));
        assert!(state.is_authenticated);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn restore_without_token_starts_anonymous() {
        let state = AuthState::restore(&StoredToken(None));
        assert!(state.token.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn restore_treats_unreadable_store_as_anonymous() {
        let state = AuthState::restore(&FailingStore);
        assert!(state.token.is_none());
        assert!(!state.is_authenticated);
        assert!(state.error.is_none());
    }
}
