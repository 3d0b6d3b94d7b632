//! Authentication actions.
//!
//! Requests start an asynchronous operation; responses are produced by the
//! effect the request returned. `Logout` and `ClearError` are synchronous
//! commands with no effect.

use docdesk_api::Credentials;
use docdesk_macros::Action;
use serde::{Deserialize, Serialize};

/// All inputs to the auth reducer.
#[derive(Action, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthAction {
    /// Authenticate with the backend.
    ///
    /// Clears any previous error, sets `loading`, and issues the login
    /// call; resolves to [`AuthAction::LoginSucceeded`] or
    /// [`AuthAction::LoginFailed`].
    #[request]
    LoginRequested {
        /// Username and password to present.
        credentials: Credentials,
    },

    /// Login succeeded and the token has been persisted.
    #[response]
    LoginSucceeded {
        /// The issued session token.
        token: String,
    },

    /// Login failed.
    #[response]
    LoginFailed {
        /// Human-readable failure message.
        message: String,
    },

    /// Drop the session: clears the in-memory token and the persisted one.
    /// No network call.
    Logout,

    /// Dismiss the displayed error without altering session state.
    ClearError,
}
