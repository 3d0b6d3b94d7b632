//! Integration tests for the `#[derive(Action)]` macro.

use docdesk_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum SampleAction {
    #[request]
    FetchRequested,

    #[request]
    CreateRequested {
        name: String,
    },

    #[response]
    FetchSucceeded {
        items: Vec<String>,
    },

    #[response]
    FetchFailed(String),

    ClearError,
}

#[test]
fn request_variants_are_requests() {
    assert!(SampleAction::FetchRequested.is_request());
    assert!(
        SampleAction::CreateRequested {
            name: "a".to_string(),
        }
        .is_request()
    );
    assert!(!SampleAction::FetchRequested.is_response());
}

#[test]
fn response_variants_are_responses() {
    let succeeded = SampleAction::FetchSucceeded { items: vec![] };
    let failed = SampleAction::FetchFailed("boom".to_string());

    assert!(succeeded.is_response());
    assert!(failed.is_response());
    assert!(!succeeded.is_request());
    assert!(!failed.is_request());
}

#[test]
fn unmarked_variants_are_synchronous_commands() {
    assert!(!SampleAction::ClearError.is_request());
    assert!(!SampleAction::ClearError.is_response());
}

#[test]
fn labels_are_kebab_case() {
    assert_eq!(SampleAction::FetchRequested.label(), "fetch-requested");
    assert_eq!(
        SampleAction::FetchSucceeded { items: vec![] }.label(),
        "fetch-succeeded"
    );
    assert_eq!(SampleAction::ClearError.label(), "clear-error");
}
