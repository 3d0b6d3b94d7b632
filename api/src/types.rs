//! Wire types for the document-management backend.
//!
//! Every endpoint wraps its payload in the same envelope
//! (`error_code` / `error_text` / `data`), so the shapes here are the
//! single source of truth for response handling - no runtime branching
//! on payload shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application-level error code the backend uses for an invalid or
/// expired session.
pub const SESSION_INVALID_CODE: i64 = 2004;

/// Server-assigned document identifier.
///
/// Identifiers are opaque strings, immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a `DocumentId` from a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A document record as stored by the backend.
///
/// All nine fields are present and non-null once a document exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Server-assigned identifier, immutable after creation.
    pub id: DocumentId,

    /// When the company signed.
    pub company_sig_date: DateTime<Utc>,

    /// Name of the company signatory.
    pub company_signature_name: String,

    /// Document title.
    pub document_name: String,

    /// Free-form status string.
    pub document_status: String,

    /// Free-form type string.
    pub document_type: String,

    /// Employee number of the signing employee.
    pub employee_number: String,

    /// When the employee signed.
    pub employee_sig_date: DateTime<Utc>,

    /// Name of the employee signatory.
    pub employee_signature_name: String,
}

impl Document {
    /// Returns the mutable fields of this document as a draft, for use in
    /// an update request.
    #[must_use]
    pub fn to_draft(&self) -> DocumentDraft {
        DocumentDraft {
            company_sig_date: self.company_sig_date,
            company_signature_name: self.company_signature_name.clone(),
            document_name: self.document_name.clone(),
            document_status: self.document_status.clone(),
            document_type: self.document_type.clone(),
            employee_number: self.employee_number.clone(),
            employee_sig_date: self.employee_sig_date,
            employee_signature_name: self.employee_signature_name.clone(),
        }
    }
}

/// A document minus its server-assigned identifier.
///
/// This is the request body for both create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    /// When the company signed.
    pub company_sig_date: DateTime<Utc>,

    /// Name of the company signatory.
    pub company_signature_name: String,

    /// Document title.
    pub document_name: String,

    /// Free-form status string.
    pub document_status: String,

    /// Free-form type string.
    pub document_type: String,

    /// Employee number of the signing employee.
    pub employee_number: String,

    /// When the employee signed.
    pub employee_sig_date: DateTime<Utc>,

    /// Name of the employee signatory.
    pub employee_signature_name: String,
}

impl DocumentDraft {
    /// Names of string fields that are empty.
    ///
    /// Callers (the form layer) require every field to be non-empty before
    /// dispatching a create or update; this is the only validation the
    /// system performs.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.company_signature_name.trim().is_empty() {
            missing.push("companySignatureName");
        }
        if self.document_name.trim().is_empty() {
            missing.push("documentName");
        }
        if self.document_status.trim().is_empty() {
            missing.push("documentStatus");
        }
        if self.document_type.trim().is_empty() {
            missing.push("documentType");
        }
        if self.employee_number.trim().is_empty() {
            missing.push("employeeNumber");
        }
        if self.employee_signature_name.trim().is_empty() {
            missing.push("employeeSignatureName");
        }
        missing
    }

    /// Whether every required field is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Login request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,

    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Manual Debug so the password never reaches logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload of a successful login response.
///
/// The backend returns more fields alongside the token; only the token is
/// contractual and the rest are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    /// The issued session token.
    pub token: String,
}

/// The backend's uniform response envelope.
///
/// `error_code == 0` means success and `data` carries the payload.
/// A non-zero `error_code` is an application-level failure described by
/// `error_text`; [`SESSION_INVALID_CODE`] marks an invalid session.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Application-level result code, zero on success.
    #[serde(default)]
    pub error_code: i64,

    /// Human-readable result description.
    #[serde(default)]
    pub error_text: Option<String>,

    /// The payload, present on success for payload-carrying endpoints.
    #[serde(default)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document_json() -> &'static str {
        r#"{
            "id": "42",
            "companySigDate": "2024-03-01T10:00:00Z",
            "companySignatureName": "Acme Corp",
            "documentName": "Contract",
            "documentStatus": "signed",
            "documentType": "agreement",
            "employeeNumber": "1001",
            "employeeSigDate": "2024-03-02T09:30:00Z",
            "employeeSignatureName": "J. Smith"
        }"#
    }

    #[test]
    fn document_round_trips_camel_case() {
        let document: Document =
            serde_json::from_str(sample_document_json()).expect("document should deserialize");
        assert_eq!(document.id, DocumentId::from("42"));
        assert_eq!(document.document_name, "Contract");

        let json = serde_json::to_value(&document).expect("document should serialize");
        assert_eq!(json["companySignatureName"], "Acme Corp");
        assert_eq!(json["employeeSigDate"], "2024-03-02T09:30:00Z");
    }

    #[test]
    fn draft_omits_id() {
        let document: Document =
            serde_json::from_str(sample_document_json()).expect("document should deserialize");
        let json = serde_json::to_value(document.to_draft()).expect("draft should serialize");
        assert!(json.get("id").is_none());
        assert_eq!(json["documentName"], "Contract");
    }

    #[test]
    fn missing_fields_reports_empty_strings() {
        let document: Document =
            serde_json::from_str(sample_document_json()).expect("document should deserialize");
        let mut draft = document.to_draft();
        assert!(draft.is_complete());

        draft.document_name = String::new();
        draft.employee_number = "   ".to_string();
        assert_eq!(draft.missing_fields(), vec!["documentName", "employeeNumber"]);
        assert!(!draft.is_complete());
    }

    #[test]
    fn envelope_defaults_missing_fields() {
        let envelope: ApiEnvelope<LoginPayload> =
            serde_json::from_str(r#"{"error_code": 0}"#).expect("envelope should deserialize");
        assert_eq!(envelope.error_code, 0);
        assert!(envelope.error_text.is_none());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let credentials = Credentials::new("user1", "hunter2");
        let formatted = format!("{credentials:?}");
        assert!(formatted.contains("user1"));
        assert!(!formatted.contains("hunter2"));
        assert!(formatted.contains("<redacted>"));
    }
}
