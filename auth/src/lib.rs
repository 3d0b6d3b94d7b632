//! # Docdesk Auth
//!
//! Authentication state slice: token, authenticated flag, and the
//! login/logout transitions.
//!
//! The slice owns its state exclusively; the session token is persisted
//! through the injected [`docdesk_api::TokenStore`] and restored once at
//! startup via [`AuthState::restore`]. A present token starts the session
//! authenticated without eager validation - an expired token is discovered
//! on the first authenticated request, which clears it.
//!
//! ## Example
//!
//! ```ignore
//! use docdesk_auth::{AuthAction, AuthEnvironment, AuthReducer, AuthState};
//! use docdesk_runtime::Store;
//!
//! let env = AuthEnvironment::new(client, tokens.clone());
//! let store = Store::new(AuthState::restore(&tokens), AuthReducer::new(), env);
//!
//! store.send(AuthAction::LoginRequested { credentials }).await?;
//! ```

/// Auth actions.
pub mod actions;

/// Auth environment.
pub mod environment;

/// Auth reducer.
pub mod reducer;

/// Auth state types.
pub mod state;

pub use actions::AuthAction;
pub use environment::AuthEnvironment;
pub use reducer::{AuthReducer, LOGIN_FALLBACK_ERROR};
pub use state::AuthState;
