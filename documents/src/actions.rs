//! Documents actions.
//!
//! Four independent request/response cycles - fetch, create, update,
//! delete - plus the synchronous `ClearError` command. Each request
//! transitions the slice to pending and issues the API call; the matching
//! response applies the result or records a failure message.

use docdesk_api::{Document, DocumentDraft, DocumentId};
use docdesk_macros::Action;
use serde::{Deserialize, Serialize};

/// All inputs to the documents reducer.
#[derive(Action, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentsAction {
    /// Fetch the full document list.
    #[request]
    FetchRequested,

    /// Fetch fulfilled: the server's sequence replaces the collection.
    #[response]
    FetchSucceeded {
        /// Documents in server order.
        documents: Vec<Document>,
    },

    /// Fetch rejected.
    #[response]
    FetchFailed {
        /// Human-readable failure message.
        message: String,
    },

    /// Create a document from a complete draft.
    #[request]
    CreateRequested {
        /// Fields of the new document.
        draft: DocumentDraft,
    },

    /// Create fulfilled: the server-assigned document is appended.
    #[response]
    CreateSucceeded {
        /// The created document, including its new identifier.
        document: Document,
    },

    /// Create rejected.
    #[response]
    CreateFailed {
        /// Human-readable failure message.
        message: String,
    },

    /// Replace the fields of an existing document.
    #[request]
    UpdateRequested {
        /// Identifier of the document to update.
        id: DocumentId,
        /// Replacement fields.
        draft: DocumentDraft,
    },

    /// Update fulfilled: the returned document replaces the matching entry.
    #[response]
    UpdateSucceeded {
        /// The updated document as the server stored it.
        document: Document,
    },

    /// Update rejected.
    #[response]
    UpdateFailed {
        /// Human-readable failure message.
        message: String,
    },

    /// Delete a document.
    #[request]
    DeleteRequested {
        /// Identifier of the document to delete.
        id: DocumentId,
    },

    /// Delete fulfilled. The identifier is carried forward from the
    /// request since the delete response has no payload.
    #[response]
    DeleteSucceeded {
        /// Identifier of the removed document.
        id: DocumentId,
    },

    /// Delete rejected.
    #[response]
    DeleteFailed {
        /// Human-readable failure message.
        message: String,
    },

    /// Dismiss the displayed error. Leaves the collection untouched.
    ClearError,
}
