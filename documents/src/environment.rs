//! Documents environment.

use docdesk_api::DocsApi;

/// Injected dependencies for the documents reducer.
#[derive(Clone)]
pub struct DocumentsEnvironment<A>
where
    A: DocsApi + Clone,
{
    /// Remote API provider.
    pub api: A,
}

impl<A> DocumentsEnvironment<A>
where
    A: DocsApi + Clone,
{
    /// Create a new documents environment.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api }
    }
}
