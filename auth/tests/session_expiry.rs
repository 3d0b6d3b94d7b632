//! Lazy session-expiry discovery.
//!
//! A persisted token starts the session authenticated without validation.
//! The first authenticated request that the backend rejects clears the
//! persisted token, so the next restore comes up anonymous.

use docdesk_api::{ApiError, DocsApi, DocsClient};
use docdesk_auth::AuthState;
use docdesk_testing::MemoryTokenStore;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn rejected_request_forces_the_restored_session_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ru/data/v3/testmethods/docs/userdocs/get"))
        .and(header("x-auth", "stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_code": 2004,
            "error_text": "session expired"
        })))
        .mount(&server)
        .await;

    let tokens = MemoryTokenStore::with_token("stale");
    let client = DocsClient::with_base_url(server.uri(), tokens.clone());

    // Restored before the failure: token present, session authenticated.
    let state = AuthState::restore(&tokens);
    assert!(state.is_authenticated);

    // The rejected fetch clears the persisted token as a side effect of
    // response handling.
    let error = client.list_documents().await.expect_err("fetch should fail");
    assert!(matches!(error, ApiError::Unauthorized { .. }));
    assert_eq!(tokens.current(), None);

    // Restored after the failure: anonymous.
    let state = AuthState::restore(&tokens);
    assert!(!state.is_authenticated);
    assert!(state.token.is_none());
}
