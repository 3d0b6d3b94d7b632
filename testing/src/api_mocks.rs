//! Programmable mocks for the API and session providers.
//!
//! These mirror the production providers' contracts with in-memory state,
//! so slice reducers and stores can be exercised without a network or a
//! filesystem.

use docdesk_api::{
    ApiError, Credentials, DocsApi, Document, DocumentDraft, DocumentId, LoginPayload,
    SessionError, TokenStore,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A recorded call against [`MockDocsApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    /// `login` was invoked with these credentials.
    Login(Credentials),
    /// `list_documents` was invoked.
    List,
    /// `create_document` was invoked with this draft.
    Create(DocumentDraft),
    /// `update_document` was invoked with this id and draft.
    Update(DocumentId, DocumentDraft),
    /// `delete_document` was invoked with this id.
    Delete(DocumentId),
}

#[derive(Default)]
struct MockDocsApiInner {
    login: Option<Result<LoginPayload, ApiError>>,
    list: Option<Result<Vec<Document>, ApiError>>,
    create: Option<Result<Document, ApiError>>,
    update: Option<Result<Document, ApiError>>,
    delete: Option<Result<(), ApiError>>,
    calls: Vec<ApiCall>,
}

/// Programmable mock API.
///
/// Each operation returns its programmed result; an unprogrammed
/// operation fails with a distinctive network error so a test that
/// forgot to program a response fails loudly instead of hanging.
///
/// # Example
///
/// ```
/// use docdesk_testing::{MockDocsApi, helpers};
///
/// let api = MockDocsApi::new()
///     .with_list(Ok(vec![helpers::document("42", "Contract")]));
/// ```
#[derive(Clone, Default)]
pub struct MockDocsApi {
    inner: Arc<Mutex<MockDocsApiInner>>,
}

impl MockDocsApi {
    /// Create a mock with no programmed responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Program the `login` result.
    #[must_use]
    pub fn with_login(self, result: Result<LoginPayload, ApiError>) -> Self {
        self.lock().login = Some(result);
        self
    }

    /// Program the `list_documents` result.
    #[must_use]
    pub fn with_list(self, result: Result<Vec<Document>, ApiError>) -> Self {
        self.lock().list = Some(result);
        self
    }

    /// Program the `create_document` result.
    #[must_use]
    pub fn with_create(self, result: Result<Document, ApiError>) -> Self {
        self.lock().create = Some(result);
        self
    }

    /// Program the `update_document` result.
    #[must_use]
    pub fn with_update(self, result: Result<Document, ApiError>) -> Self {
        self.lock().update = Some(result);
        self
    }

    /// Program the `delete_document` result.
    #[must_use]
    pub fn with_delete(self, result: Result<(), ApiError>) -> Self {
        self.lock().delete = Some(result);
        self
    }

    /// All calls recorded so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockDocsApiInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn programmed<T: Clone>(
        slot: &Option<Result<T, ApiError>>,
        operation: &str,
    ) -> Result<T, ApiError> {
        slot.clone().unwrap_or_else(|| {
            Err(ApiError::Network(format!(
                "no mock response programmed for {operation}"
            )))
        })
    }
}

impl DocsApi for MockDocsApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginPayload, ApiError> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::Login(credentials.clone()));
        Self::programmed(&inner.login, "login")
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::List);
        Self::programmed(&inner.list, "list_documents")
    }

    async fn create_document(&self, draft: &DocumentDraft) -> Result<Document, ApiError> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::Create(draft.clone()));
        Self::programmed(&inner.create, "create_document")
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        draft: &DocumentDraft,
    ) -> Result<Document, ApiError> {
        let mut inner = self.lock();
        inner
            .calls
            .push(ApiCall::Update(id.clone(), draft.clone()));
        Self::programmed(&inner.update, "update_document")
    }

    async fn delete_document(&self, id: &DocumentId) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::Delete(id.clone()));
        Self::programmed(&inner.delete, "delete_document")
    }
}

/// In-memory token store.
///
/// Shares its token across clones, so the store handed to a client and
/// the one inspected by a test observe the same session.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.lock() = Some(token.to_string());
        store
    }

    /// The current token, for assertions.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.current())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers;

    #[tokio::test]
    async fn unprogrammed_operation_fails_loudly() {
        let api = MockDocsApi::new();
        let error = api.list_documents().await.unwrap_err();
        assert!(matches!(error, ApiError::Network(message) if message.contains("list_documents")));
    }

    #[tokio::test]
    async fn programmed_results_are_returned_and_calls_recorded() {
        let api = MockDocsApi::new()
            .with_list(Ok(vec![helpers::document("42", "Contract")]))
            .with_delete(Ok(()));

        let documents = api.list_documents().await.unwrap();
        assert_eq!(documents.len(), 1);

        api.delete_document(&DocumentId::from("42")).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![ApiCall::List, ApiCall::Delete(DocumentId::from("42"))]
        );
    }

    #[test]
    fn memory_token_store_shares_state_across_clones() {
        let store = MemoryTokenStore::new();
        let clone = store.clone();

        store.save("abc").unwrap();
        assert_eq!(clone.current(), Some("abc".to_string()));

        clone.clear().unwrap();
        assert_eq!(store.current(), None);
    }
}
