//! # Docdesk Testing
//!
//! Testing utilities and helpers for the docdesk state container.
//!
//! This crate provides:
//! - A fluent given/when/then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effect vectors
//! - Mock implementations of the environment providers
//!   ([`MockDocsApi`], [`MemoryTokenStore`], [`FixedClock`])
//! - Builders for realistic test data ([`helpers`])
//!
//! ## Example
//!
//! ```ignore
//! use docdesk_testing::{MockDocsApi, MemoryTokenStore, ReducerTest, assertions};
//!
//! ReducerTest::new(AuthReducer::new())
//!     .with_env(AuthEnvironment::new(MockDocsApi::new(), MemoryTokenStore::new()))
//!     .given_state(AuthState::default())
//!     .when_action(AuthAction::ClearError)
//!     .then_state(|state| assert!(state.error.is_none()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use docdesk_core::environment::Clock;

/// Programmable mocks for the API and token-store providers
pub mod api_mocks;

/// Fluent reducer test harness
pub mod reducer_test;

/// Mock implementations of core environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use docdesk_testing::mocks::FixedClock;
    /// use docdesk_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Builders for realistic test data
pub mod helpers {
    use super::mocks::test_clock;
    use docdesk_api::{Credentials, Document, DocumentDraft, DocumentId};
    use docdesk_core::environment::Clock;

    /// A complete document with the given id and name, fixed timestamps.
    #[must_use]
    pub fn document(id: &str, name: &str) -> Document {
        let signed_at = test_clock().now();
        Document {
            id: DocumentId::from(id),
            company_sig_date: signed_at,
            company_signature_name: "Acme Corp".to_string(),
            document_name: name.to_string(),
            document_status: "signed".to_string(),
            document_type: "agreement".to_string(),
            employee_number: "1001".to_string(),
            employee_sig_date: signed_at,
            employee_signature_name: "J. Smith".to_string(),
        }
    }

    /// A complete draft with the given name, fixed timestamps.
    #[must_use]
    pub fn draft(name: &str) -> DocumentDraft {
        document("unused", name).to_draft()
    }

    /// Well-known test credentials.
    #[must_use]
    pub fn credentials() -> Credentials {
        Credentials::new("user1", "password")
    }
}

// Re-export commonly used items
pub use api_mocks::{ApiCall, MemoryTokenStore, MockDocsApi};
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_core::environment::Clock;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn helper_document_is_complete() {
        let document = helpers::document("42", "Contract");
        assert!(document.to_draft().is_complete());
    }
}
