//! Authentication environment.
//!
//! Dependencies the auth reducer needs: the API provider for the login
//! call and the token store the session is persisted in. Both are cloned
//! into effect tasks, so implementations share state across clones.

use docdesk_api::{DocsApi, TokenStore};

/// Injected dependencies for the auth reducer.
#[derive(Clone)]
pub struct AuthEnvironment<A, T>
where
    A: DocsApi + Clone,
    T: TokenStore + Clone,
{
    /// Remote API provider.
    pub api: A,

    /// Persistent session-token storage.
    pub tokens: T,
}

impl<A, T> AuthEnvironment<A, T>
where
    A: DocsApi + Clone,
    T: TokenStore + Clone,
{
    /// Create a new authentication environment.
    #[must_use]
    pub const fn new(api: A, tokens: T) -> Self {
        Self { api, tokens }
    }
}
