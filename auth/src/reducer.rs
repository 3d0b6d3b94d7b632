//! Reducer logic for the auth slice.

use crate::actions::AuthAction;
use crate::environment::AuthEnvironment;
use crate::state::AuthState;
use docdesk_api::{ApiError, DocsApi, TokenStore};
use docdesk_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::marker::PhantomData;

/// Message used when a login failure carries no backend text.
pub const LOGIN_FALLBACK_ERROR: &str = "Authentication failed";

/// Reducer for the auth slice.
///
/// Generic over the environment's provider types so production and test
/// environments use the same transition logic.
pub struct AuthReducer<A, T> {
    _phantom: PhantomData<(A, T)>,
}

impl<A, T> AuthReducer<A, T> {
    /// Creates a new `AuthReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A, T> Clone for AuthReducer<A, T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A, T> Default for AuthReducer<A, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T> Reducer for AuthReducer<A, T>
where
    A: DocsApi + Clone + 'static,
    T: TokenStore + Clone + 'static,
{
    type State = AuthState;
    type Action = AuthAction;
    type Environment = AuthEnvironment<A, T>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AuthAction::LoginRequested { credentials } => {
                state.loading = true;
                state.error = None;
                tracing::debug!(username = %credentials.username, "login requested");

                let api = env.api.clone();
                let tokens = env.tokens.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.login(&credentials).await {
                        Ok(payload) => {
                            // Persist before the fulfilled transition so the
                            // token survives even if the process dies between
                            // the two.
                            if let Err(error) = tokens.save(&payload.token) {
                                tracing::warn!(%error, "failed to persist session token");
                            }
                            Some(AuthAction::LoginSucceeded {
                                token: payload.token,
                            })
                        },
                        Err(error) => Some(AuthAction::LoginFailed {
                            message: failure_message(&error, LOGIN_FALLBACK_ERROR),
                        }),
                    }
                }))]
            },

            AuthAction::LoginSucceeded { token } => {
                state.loading = false;
                state.token = Some(token);
                state.is_authenticated = true;
                SmallVec::new()
            },

            AuthAction::LoginFailed { message } => {
                state.loading = false;
                state.error = Some(message);
                SmallVec::new()
            },

            AuthAction::Logout => {
                state.token = None;
                state.is_authenticated = false;
                if let Err(error) = env.tokens.clear() {
                    tracing::warn!(%error, "failed to clear persisted session token");
                }
                SmallVec::new()
            },

            AuthAction::ClearError => {
                state.error = None;
                SmallVec::new()
            },
        }
    }
}

/// The backend's message when it supplied one, the fallback otherwise.
fn failure_message(error: &ApiError, fallback: &str) -> String {
    error
        .user_message()
        .map_or_else(|| fallback.to_string(), ToString::to_string)
}
