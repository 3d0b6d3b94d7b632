//! HTTP client for the document backend.

use crate::error::ApiError;
use crate::session::TokenStore;
use crate::types::{
    ApiEnvelope, Credentials, Document, DocumentDraft, DocumentId, LoginPayload,
    SESSION_INVALID_CODE,
};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;

/// Base URL of the default deployment.
pub const DEFAULT_BASE_URL: &str = "https://test.v5.pryaniky.com";

/// Header carrying the session token on authenticated requests.
pub const AUTH_HEADER: &str = "x-auth";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "DOCDESK_BASE_URL";

/// Fixed path prefix of the document endpoints.
const DOCS_PREFIX: &str = "/ru/data/v3/testmethods/docs";

/// One operation per backend capability.
///
/// Implementations return `Send` futures so reducers can move calls into
/// spawned effect tasks. The production implementation is [`DocsClient`];
/// tests substitute a programmable mock.
pub trait DocsApi: Send + Sync {
    /// Authenticate and obtain a session token.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginPayload, ApiError>> + Send;

    /// Fetch the full document list, in server order.
    fn list_documents(&self) -> impl Future<Output = Result<Vec<Document>, ApiError>> + Send;

    /// Create a document; the server assigns the identifier.
    fn create_document(
        &self,
        draft: &DocumentDraft,
    ) -> impl Future<Output = Result<Document, ApiError>> + Send;

    /// Replace the fields of an existing document.
    fn update_document(
        &self,
        id: &DocumentId,
        draft: &DocumentDraft,
    ) -> impl Future<Output = Result<Document, ApiError>> + Send;

    /// Delete a document. The response carries no payload.
    fn delete_document(
        &self,
        id: &DocumentId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Production API client.
///
/// Attaches the current session token (read fresh from the injected
/// [`TokenStore`] on each call) to every outgoing request, and eagerly
/// clears the persisted token whenever a response reports HTTP 401 or the
/// application-level session-invalid code - independent of which operation
/// triggered it. Failures surface to the caller; there is no retry, no
/// backoff, and no timeout override beyond transport defaults.
#[derive(Clone)]
pub struct DocsClient<T> {
    http: reqwest::Client,
    base_url: String,
    tokens: T,
}

impl<T: TokenStore + Clone> DocsClient<T> {
    /// Creates a client against the default deployment.
    #[must_use]
    pub fn new(tokens: T) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, tokens)
    }

    /// Creates a client against an explicit base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, tokens: T) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens,
        }
    }

    /// Creates a client with the base URL taken from `DOCDESK_BASE_URL`,
    /// falling back to the default deployment.
    #[must_use]
    pub fn from_env(tokens: T) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::with_base_url(url, tokens),
            Err(_) => Self::new(tokens),
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{DOCS_PREFIX}{path}", self.base_url)
    }

    /// Attach the current session token, read fresh from the store.
    fn authed(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(match self.tokens.load()? {
            Some(token) => builder.header(AUTH_HEADER, token),
            None => builder,
        })
    }

    /// Clear the persisted token after the backend invalidated the session.
    fn invalidate_session(&self, operation: &'static str) {
        tracing::warn!(operation, "session invalidated, clearing persisted token");
        if let Err(error) = self.tokens.clear() {
            tracing::warn!(operation, %error, "failed to clear persisted token");
        }
    }

    /// Issue a request and decode the response envelope.
    ///
    /// Handles the cross-cutting response rules: 401 and the
    /// session-invalid code clear the persisted token, non-zero envelope
    /// codes become [`ApiError::Api`], and everything else maps to a
    /// distinct error variant.
    async fn execute<P: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        operation: &'static str,
    ) -> Result<ApiEnvelope<P>, ApiError> {
        let response = self
            .authed(builder)?
            .send()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;

        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session(operation);
            return Err(ApiError::Unauthorized {
                message: error_text_of(&body),
            });
        }

        if !status.is_success() {
            // Error statuses may still carry a decodable envelope; prefer
            // its error_text over the raw body.
            return Err(match decode_error_envelope(&body) {
                Some((code, message)) if code == SESSION_INVALID_CODE => {
                    self.invalidate_session(operation);
                    ApiError::SessionInvalid { message }
                },
                Some((code, message)) => ApiError::Api {
                    code,
                    message: message.unwrap_or_default(),
                },
                None => ApiError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let envelope: ApiEnvelope<P> =
            serde_json::from_str(&body).map_err(|error| ApiError::Decode(error.to_string()))?;

        if envelope.error_code == SESSION_INVALID_CODE {
            self.invalidate_session(operation);
            return Err(ApiError::SessionInvalid {
                message: envelope.error_text,
            });
        }

        if envelope.error_code != 0 {
            return Err(ApiError::Api {
                code: envelope.error_code,
                message: envelope.error_text.unwrap_or_default(),
            });
        }

        tracing::debug!(operation, "request succeeded");
        Ok(envelope)
    }
}

impl<T: TokenStore + Clone> DocsApi for DocsClient<T> {
    async fn login(&self, credentials: &Credentials) -> Result<LoginPayload, ApiError> {
        let builder = self.http.post(self.url("/login")).json(credentials);
        let envelope: ApiEnvelope<LoginPayload> = self.execute(builder, "login").await?;
        envelope
            .data
            .ok_or(ApiError::MalformedResponse("login response carried no token payload"))
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let builder = self.http.get(self.url("/userdocs/get"));
        let envelope: ApiEnvelope<Vec<Document>> = self.execute(builder, "list").await?;
        envelope
            .data
            .ok_or(ApiError::MalformedResponse("document list response carried no data"))
    }

    async fn create_document(&self, draft: &DocumentDraft) -> Result<Document, ApiError> {
        let builder = self.http.post(self.url("/userdocs/create")).json(draft);
        let envelope: ApiEnvelope<Document> = self.execute(builder, "create").await?;
        envelope
            .data
            .ok_or(ApiError::MalformedResponse("create response carried no created document"))
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        draft: &DocumentDraft,
    ) -> Result<Document, ApiError> {
        let builder = self
            .http
            .post(self.url(&format!("/userdocs/set/{id}")))
            .json(draft);
        let envelope: ApiEnvelope<Document> = self.execute(builder, "update").await?;
        envelope
            .data
            .ok_or(ApiError::MalformedResponse("update response carried no updated document"))
    }

    async fn delete_document(&self, id: &DocumentId) -> Result<(), ApiError> {
        let builder = self.http.post(self.url(&format!("/userdocs/delete/{id}")));
        // The delete response carries no payload the caller needs; decode
        // the envelope only for its error fields.
        let _envelope: ApiEnvelope<serde_json::Value> = self.execute(builder, "delete").await?;
        Ok(())
    }
}

/// Best-effort extraction of `error_text` from an undecodable-as-`T` body.
fn error_text_of(body: &str) -> Option<String> {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.error_text)
}

/// Best-effort decode of an error envelope from a non-2xx body.
fn decode_error_envelope(body: &str) -> Option<(i64, Option<String>)> {
    let envelope = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body).ok()?;
    if envelope.error_code == 0 {
        return None;
    }
    Some((envelope.error_code, envelope.error_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct NoTokens;

    impl TokenStore for NoTokens {
        fn load(&self) -> Result<Option<String>, crate::session::SessionError> {
            Ok(None)
        }

        fn save(&self, _token: &str) -> Result<(), crate::session::SessionError> {
            Ok(())
        }

        fn clear(&self) -> Result<(), crate::session::SessionError> {
            Ok(())
        }
    }

    #[test]
    fn urls_join_prefix_and_path() {
        let client = DocsClient::with_base_url("https://example.test/", NoTokens);
        assert_eq!(client.base_url(), "https://example.test");
        assert_eq!(
            client.url("/userdocs/set/42"),
            "https://example.test/ru/data/v3/testmethods/docs/userdocs/set/42"
        );
    }

    #[test]
    fn error_text_extraction_tolerates_garbage() {
        assert_eq!(error_text_of("not json"), None);
        assert_eq!(
            error_text_of(r#"{"error_code": 2004, "error_text": "expired"}"#),
            Some("expired".to_string())
        );
    }

    #[test]
    fn error_envelope_requires_nonzero_code() {
        assert_eq!(decode_error_envelope(r#"{"error_code": 0}"#), None);
        assert_eq!(
            decode_error_envelope(r#"{"error_code": 7, "error_text": "nope"}"#),
            Some((7, Some("nope".to_string())))
        );
    }
}
