//! # Docdesk API
//!
//! Remote API client for the document-management backend, plus the
//! session-token persistence both the client and the auth slice share.
//!
//! The backend exposes five operations behind one response envelope:
//! login, list, create, update, and delete. [`client::DocsApi`] is the
//! trait the state slices program against; [`client::DocsClient`] is the
//! reqwest implementation that attaches the session token to every
//! request and clears it when the backend invalidates the session.
//!
//! ## Example
//!
//! ```no_run
//! use docdesk_api::{Credentials, DocsApi, DocsClient, FileTokenStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = FileTokenStore::from_env()?;
//! let client = DocsClient::from_env(tokens);
//!
//! let payload = client
//!     .login(&Credentials::new("user1", "password"))
//!     .await?;
//! println!("token: {}", payload.token);
//!
//! let documents = client.list_documents().await?;
//! println!("{} documents", documents.len());
//! # Ok(())
//! # }
//! ```

/// HTTP client and the `DocsApi` operation trait.
pub mod client;

/// Error taxonomy for backend interactions.
pub mod error;

/// Session-token persistence.
pub mod session;

/// Wire types and the response envelope.
pub mod types;

pub use client::{AUTH_HEADER, BASE_URL_ENV, DEFAULT_BASE_URL, DocsApi, DocsClient};
pub use error::ApiError;
pub use session::{FileTokenStore, SessionError, TOKEN_PATH_ENV, TokenStore};
pub use types::{
    ApiEnvelope, Credentials, Document, DocumentDraft, DocumentId, LoginPayload,
    SESSION_INVALID_CODE,
};
