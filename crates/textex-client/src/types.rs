//! # API Types
//!
//! Types for API requests and responses.
//!
//! The backend is tolerant about which fields it returns, so response structs
//! default anything optional rather than failing deserialization.

use serde::{Deserialize, Serialize};

fn default_role() -> String {
    "User".to_string()
}

/// The user's profile as returned by a successful login request.
///
/// `email`, `role`, and `token` may be absent depending on backend version.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Username echoed back by the backend (defaults to the requested one).
    #[serde(default)]
    pub username: String,
    /// The user's email address.
    #[serde(default)]
    pub email: String,
    /// The user's role (defaults to "User").
    #[serde(default = "default_role")]
    pub role: String,
    /// Optional session token (unused by Basic-Auth flows, kept for newer
    /// backends that issue one).
    #[serde(default)]
    pub token: Option<String>,
}

/// An uploaded document as listed by `GET /api/Upload/my-documents`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document identifier used for extraction requests.
    pub id: String,
    /// Original file name.
    #[serde(default)]
    pub file_name: String,
    /// Size in bytes (0 when the backend omits it).
    #[serde(default)]
    pub size: u64,
    /// Upload timestamp as reported by the backend.
    #[serde(default)]
    pub uploaded_at: Option<String>,
    /// Processing status label.
    #[serde(default)]
    pub status: Option<String>,
}

/// Response after a successful upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    /// Identifier assigned to the uploaded document.
    #[serde(default)]
    pub id: Option<String>,
    /// File name as stored by the backend.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Status of an extraction job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    /// Queued, not yet started.
    #[default]
    Pending,
    /// Currently running.
    Processing,
    /// Finished, text available.
    Completed,
    /// Failed, see message.
    Failed,
}

/// Result of `GET /api/Extraction/result/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Document identifier.
    #[serde(default)]
    pub id: String,
    /// Job status.
    #[serde(default)]
    pub status: ExtractionStatus,
    /// Extracted text (empty until completed).
    #[serde(default)]
    pub text: String,
    /// Optional status or error message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Options sent when starting an extraction job.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOptions {
    /// Language hint for the extractor.
    pub language: String,
    /// Whether to run OCR on image content.
    pub ocr: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            ocr: true,
        }
    }
}

/// A user record from the admin API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// User identifier.
    pub id: String,
    /// Username (login).
    #[serde(default)]
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Role label.
    #[serde(default = "default_role")]
    pub role: String,
    /// Whether the account is active.
    #[serde(default)]
    pub active: bool,
}

/// Request to create a user via the admin API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Role label.
    pub role: String,
    /// SHA-256 hex digest of the initial password.
    pub password: String,
}

/// Request to update a user via the admin API.
///
/// `None` fields are omitted and left unchanged by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New role label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Activate or deactivate the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// An extraction record from the admin API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminExtraction {
    /// Extraction identifier.
    pub id: String,
    /// Document the extraction belongs to.
    #[serde(default)]
    pub document_id: String,
    /// Owning username.
    #[serde(default)]
    pub username: String,
    /// Job status.
    #[serde(default)]
    pub status: ExtractionStatus,
    /// Completion timestamp, if finished.
    #[serde(default)]
    pub finished_at: Option<String>,
}

/// Aggregate statistics from `GET /api/Admin/statistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Total registered users.
    #[serde(default)]
    pub total_users: u64,
    /// Users active in the reporting window.
    #[serde(default)]
    pub active_users: u64,
    /// Total uploaded documents.
    #[serde(default)]
    pub total_documents: u64,
    /// Total extraction jobs.
    #[serde(default)]
    pub total_extractions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_tolerates_missing_fields() {
        let doc: Document = serde_json::from_str(r#"{"id":"42"}"#).unwrap();
        assert_eq!(doc.id, "42");
        assert_eq!(doc.file_name, "");
        assert_eq!(doc.size, 0);
        assert!(doc.uploaded_at.is_none());
    }

    #[test]
    fn test_document_full() {
        let doc: Document = serde_json::from_str(
            r#"{"id":"42","fileName":"report.pdf","size":1024,"uploadedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(doc.file_name, "report.pdf");
        assert_eq!(doc.size, 1024);
    }

    #[test]
    fn test_extraction_status_parsing() {
        let result: ExtractionResult = serde_json::from_str(
            r#"{"id":"42","status":"completed","text":"hello world"}"#,
        )
        .unwrap();
        assert_eq!(result.status, ExtractionStatus::Completed);
        assert_eq!(result.text, "hello world");
    }

    #[test]
    fn test_extraction_result_defaults() {
        let result: ExtractionResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.status, ExtractionStatus::Pending);
        assert!(result.text.is_empty());
    }

    #[test]
    fn test_extraction_options_fixed_body() {
        let body = serde_json::to_string(&ExtractionOptions::default()).unwrap();
        assert_eq!(body, r#"{"language":"auto","ocr":true}"#);
    }

    #[test]
    fn test_update_user_request_omits_none() {
        let req = UpdateUserRequest {
            role: Some("Admin".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(body, r#"{"role":"Admin"}"#);
    }

    #[test]
    fn test_statistics_defaults() {
        let stats: Statistics = serde_json::from_str(r#"{"totalUsers":7}"#).unwrap();
        assert_eq!(stats.total_users, 7);
        assert_eq!(stats.total_documents, 0);
    }

    #[test]
    fn test_user_profile_defaults_role() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(profile.role, "User");
        assert!(profile.token.is_none());
    }
}
