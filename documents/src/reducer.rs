//! Reducer logic for the documents slice.

use crate::actions::DocumentsAction;
use crate::environment::DocumentsEnvironment;
use crate::state::DocumentsState;
use docdesk_api::{ApiError, DocsApi};
use docdesk_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::marker::PhantomData;

/// Message used when a fetch failure carries no backend text.
pub const FETCH_FALLBACK_ERROR: &str = "Failed to fetch documents";

/// Message used when a create failure carries no backend text.
pub const CREATE_FALLBACK_ERROR: &str = "Failed to create document";

/// Message used when an update failure carries no backend text.
pub const UPDATE_FALLBACK_ERROR: &str = "Failed to update document";

/// Message used when a delete failure carries no backend text.
pub const DELETE_FALLBACK_ERROR: &str = "Failed to delete document";

/// Reducer for the documents slice.
pub struct DocumentsReducer<A> {
    _phantom: PhantomData<A>,
}

impl<A> DocumentsReducer<A> {
    /// Creates a new `DocumentsReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A> Clone for DocumentsReducer<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> Default for DocumentsReducer<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Enter the pending phase shared by all four operations.
fn enter_pending(state: &mut DocumentsState) {
    state.loading = true;
    state.error = None;
}

/// The backend's message when it supplied one, the fallback otherwise.
fn failure_message(error: &ApiError, fallback: &str) -> String {
    error
        .user_message()
        .map_or_else(|| fallback.to_string(), ToString::to_string)
}

impl<A> Reducer for DocumentsReducer<A>
where
    A: DocsApi + Clone + 'static,
{
    type State = DocumentsState;
    type Action = DocumentsAction;
    type Environment = DocumentsEnvironment<A>;

    #[allow(clippy::too_many_lines)] // one arm per lifecycle phase of four operations
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Fetch ==========
            DocumentsAction::FetchRequested => {
                enter_pending(state);
                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.list_documents().await {
                        Ok(documents) => DocumentsAction::FetchSucceeded { documents },
                        Err(error) => DocumentsAction::FetchFailed {
                            message: failure_message(&error, FETCH_FALLBACK_ERROR),
                        },
                    })
                }))]
            },

            DocumentsAction::FetchSucceeded { documents } => {
                state.loading = false;
                // Full refresh, not a merge: the server sequence wins.
                state.documents = documents;
                SmallVec::new()
            },

            // ========== Create ==========
            DocumentsAction::CreateRequested { draft } => {
                enter_pending(state);
                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.create_document(&draft).await {
                        Ok(document) => DocumentsAction::CreateSucceeded { document },
                        Err(error) => DocumentsAction::CreateFailed {
                            message: failure_message(&error, CREATE_FALLBACK_ERROR),
                        },
                    })
                }))]
            },

            DocumentsAction::CreateSucceeded { document } => {
                state.loading = false;
                state.documents.push(document);
                SmallVec::new()
            },

            // ========== Update ==========
            DocumentsAction::UpdateRequested { id, draft } => {
                enter_pending(state);
                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.update_document(&id, &draft).await {
                        Ok(document) => DocumentsAction::UpdateSucceeded { document },
                        Err(error) => DocumentsAction::UpdateFailed {
                            message: failure_message(&error, UPDATE_FALLBACK_ERROR),
                        },
                    })
                }))]
            },

            DocumentsAction::UpdateSucceeded { document } => {
                state.loading = false;
                // The server response is the source of truth: a missing
                // match means the entry was already removed, so the
                // collection stays as it is.
                match state
                    .documents
                    .iter_mut()
                    .find(|existing| existing.id == document.id)
                {
                    Some(existing) => *existing = document,
                    None => {
                        tracing::debug!(id = %document.id, "updated document not in collection");
                    },
                }
                SmallVec::new()
            },

            // ========== Delete ==========
            DocumentsAction::DeleteRequested { id } => {
                enter_pending(state);
                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.delete_document(&id).await {
                        Ok(()) => DocumentsAction::DeleteSucceeded { id },
                        Err(error) => DocumentsAction::DeleteFailed {
                            message: failure_message(&error, DELETE_FALLBACK_ERROR),
                        },
                    })
                }))]
            },

            DocumentsAction::DeleteSucceeded { id } => {
                state.loading = false;
                state.documents.retain(|document| document.id != id);
                SmallVec::new()
            },

            // ========== Shared rejected + dismissal ==========
            DocumentsAction::FetchFailed { message }
            | DocumentsAction::CreateFailed { message }
            | DocumentsAction::UpdateFailed { message }
            | DocumentsAction::DeleteFailed { message } => {
                state.loading = false;
                state.error = Some(message);
                SmallVec::new()
            },

            DocumentsAction::ClearError => {
                state.error = None;
                SmallVec::new()
            },
        }
    }
}
