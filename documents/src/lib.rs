//! # Docdesk Documents
//!
//! Documents state slice: the document collection and its four CRUD
//! request/response cycles.
//!
//! The collection mirrors the server (response order, full refresh on
//! fetch, in-place mutation on create/update/delete) and is left untouched
//! by any failed operation - only the shared `loading`/`error` fields
//! change. There is no optimistic mutation: state changes only when the
//! backend has confirmed the operation.
//!
//! ## Example
//!
//! ```ignore
//! use docdesk_documents::{DocumentsAction, DocumentsEnvironment, DocumentsReducer, DocumentsState};
//! use docdesk_runtime::Store;
//!
//! let store = Store::new(
//!     DocumentsState::new(),
//!     DocumentsReducer::new(),
//!     DocumentsEnvironment::new(client),
//! );
//!
//! store.send(DocumentsAction::FetchRequested).await?;
//! ```

/// Documents actions.
pub mod actions;

/// Documents environment.
pub mod environment;

/// Documents reducer.
pub mod reducer;

/// Documents state types.
pub mod state;

pub use actions::DocumentsAction;
pub use environment::DocumentsEnvironment;
pub use reducer::{
    CREATE_FALLBACK_ERROR, DELETE_FALLBACK_ERROR, DocumentsReducer, FETCH_FALLBACK_ERROR,
    UPDATE_FALLBACK_ERROR,
};
pub use state::DocumentsState;
