//! Documents slice state.

use docdesk_api::{Document, DocumentId};
use serde::{Deserialize, Serialize};

/// Documents slice state.
///
/// The collection keeps the server's response order and is mutated in
/// place by the CRUD transitions. All four operations share one `loading`
/// flag and one `error` field; overlapping operations therefore race on
/// them and the fields reflect whichever operation resolves last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentsState {
    /// Known documents, in server order.
    pub documents: Vec<Document>,

    /// Whether any operation is in flight.
    pub loading: bool,

    /// Message of the last failed operation, until dismissed.
    pub error: Option<String>,
}

impl DocumentsState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            documents: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Number of known documents.
    #[must_use]
    pub fn count(&self) -> usize {
        self.documents.len()
    }

    /// Returns a document by identifier.
    #[must_use]
    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|document| &document.id == id)
    }

    /// Checks whether a document with this identifier is known.
    #[must_use]
    pub fn contains(&self, id: &DocumentId) -> bool {
        self.get(id).is_some()
    }
}
