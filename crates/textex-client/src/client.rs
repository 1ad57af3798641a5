//! # API Client
//!
//! HTTP client for communicating with the Text Extraction backend.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio_util::io::ReaderStream;

use crate::auth::{hash_password, Credentials};
use crate::error::{ApiError, ApiResult};
use crate::scan;
use crate::types::{
    AdminExtraction, AdminUser, CreateUserRequest, Document, ExtractionOptions, ExtractionResult,
    Statistics, UpdateUserRequest, UploadReceipt, UserProfile,
};

/// Timeout for ordinary JSON requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for multipart uploads of large files.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Upload progress callback: `(bytes_sent, bytes_total)`.
///
/// Invoked on the async task as body chunks are pulled off the stream, so
/// implementations must be cheap and thread-safe (typically writing to
/// shared atomics the UI polls).
pub type ProgressFn = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// A plain status/body/success view of an HTTP exchange.
///
/// Returned by the generic verb methods. Non-2xx statuses still produce a
/// response (`is_success == false`); only transport failures become errors.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
    /// Whether the status was in the 2xx range.
    pub is_success: bool,
}

/// HTTP client for the Text Extraction backend API.
///
/// Holds the base URL and optional Basic-Auth credentials explicitly; there
/// is no process-wide state. The client is cheaply cloneable and can be
/// shared across UI components.
///
/// # Examples
///
/// ```rust,ignore
/// use textex_client::ApiClient;
///
/// let client = ApiClient::new("http://127.0.0.1:5000");
/// let profile = client.login("alice", "secret").await?;
/// let docs = client.my_documents().await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    upload_http: Client,
    credentials: Option<Credentials>,
}

impl ApiClient {
    /// Creates a new client for the given backend URL.
    ///
    /// A trailing slash and a trailing `/api` segment are stripped so that
    /// both `http://host:5000` and `http://host:5000/api` configure the same
    /// client.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        if let Some(stripped) = base_url.strip_suffix("/api") {
            base_url = stripped.to_string();
        }

        Self {
            base_url,
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to create HTTP client"),
            upload_http: Client::builder()
                .timeout(UPLOAD_TIMEOUT)
                .build()
                .expect("failed to create HTTP client"),
            credentials: None,
        }
    }

    /// Creates a client from a host and port, e.g. `("127.0.0.1", 5000)`.
    pub fn from_host_port(host: &str, port: u16) -> Self {
        Self::new(format!("http://{}:{}", host, port))
    }

    /// Returns the configured base URL (without the `/api` suffix).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attaches Basic-Auth credentials for subsequent requests.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Removes any attached credentials.
    pub fn clear_credentials(&mut self) {
        self.credentials = None;
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}/api/{}", self.base_url, endpoint);
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(ref creds) = self.credentials {
            builder = builder.header(AUTHORIZATION, creds.basic_header());
        }
        builder
    }

    async fn execute(&self, builder: RequestBuilder) -> ApiResult<HttpResponse> {
        let res = builder.send().await?;
        let status = res.status().as_u16();
        let is_success = res.status().is_success();
        let body = res.text().await.unwrap_or_default();

        tracing::debug!(status, is_success, "API response");
        Ok(HttpResponse {
            status,
            body,
            is_success,
        })
    }

    /// Converts a response to a typed value, turning non-2xx statuses into
    /// [`ApiError::Server`] with the message pulled from the body.
    fn typed<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
        if !response.is_success {
            return Err(ApiError::Server {
                status: response.status,
                message: scan::extract_message(&response.body),
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    // ==================== Generic Verbs ====================

    /// Performs a `GET /api/{endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport failure; HTTP error
    /// statuses are reported through the response's `is_success` flag.
    pub async fn get(&self, endpoint: &str) -> ApiResult<HttpResponse> {
        self.execute(self.request(Method::GET, endpoint)).await
    }

    /// Performs a `POST /api/{endpoint}` with a JSON body.
    pub async fn post(&self, endpoint: &str, json_body: &str) -> ApiResult<HttpResponse> {
        self.execute(self.request(Method::POST, endpoint).body(json_body.to_string()))
            .await
    }

    /// Performs a `PUT /api/{endpoint}` with a JSON body.
    pub async fn put(&self, endpoint: &str, json_body: &str) -> ApiResult<HttpResponse> {
        self.execute(self.request(Method::PUT, endpoint).body(json_body.to_string()))
            .await
    }

    /// Performs a `DELETE /api/{endpoint}`.
    pub async fn delete(&self, endpoint: &str) -> ApiResult<HttpResponse> {
        self.execute(self.request(Method::DELETE, endpoint)).await
    }

    // ==================== Connection ====================

    /// Checks whether the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the request fails entirely; an
    /// unhealthy status yields `Ok(false)`.
    pub async fn check_connection(&self) -> ApiResult<bool> {
        let res = self
            .http
            .get(&self.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await?;
        Ok(res.status().is_success())
    }

    // ==================== Authentication ====================

    /// Logs in with a username and *plaintext* password.
    ///
    /// The password is hashed client-side; the backend only ever sees the
    /// SHA-256 hex digest, as both the query parameter and the Basic-Auth
    /// password for subsequent requests.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - transport failure
    /// * [`ApiError::Server`] - invalid credentials (401) or backend error
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<UserProfile> {
        let password_hash = hash_password(password);

        let response = self
            .execute(
                self.request(Method::GET, "User")
                    .query(&[("username", username), ("password", password_hash.as_str())]),
            )
            .await?;

        let mut profile: UserProfile = Self::typed(response)?;
        if profile.username.is_empty() {
            profile.username = username.to_string();
        }

        tracing::info!(username = %profile.username, role = %profile.role, "Login succeeded");
        Ok(profile)
    }

    // ==================== Documents ====================

    /// Uploads a file as `POST /api/Upload` (multipart, `file` part).
    ///
    /// The file is streamed rather than buffered; `progress` (if given) is
    /// called with `(bytes_sent, bytes_total)` as chunks leave the client.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Io`] - the file cannot be opened
    /// * [`ApiError::Network`] - transport failure or timeout
    /// * [`ApiError::Server`] - backend rejected the upload
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        progress: Option<ProgressFn>,
    ) -> ApiResult<UploadReceipt> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await?;
        let total = file.metadata().await?.len();

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mut sent: u64 = 0;
        let stream = ReaderStream::new(file).map(move |chunk| {
            if let Ok(ref bytes) = chunk {
                sent += bytes.len() as u64;
                if let Some(ref cb) = progress {
                    cb(sent, total);
                }
            }
            chunk
        });

        let part = Part::stream_with_length(Body::wrap_stream(stream), total)
            .file_name(file_name.clone());
        let form = Form::new().part("file", part);

        let mut builder = self
            .upload_http
            .post(format!("{}/api/Upload", self.base_url))
            .multipart(form);
        if let Some(ref creds) = self.credentials {
            builder = builder.header(AUTHORIZATION, creds.basic_header());
        }

        let response = self.execute(builder).await?;
        tracing::info!(file = %file_name, status = response.status, "Upload finished");
        Self::typed(response)
    }

    /// Lists the current user's documents.
    pub async fn my_documents(&self) -> ApiResult<Vec<Document>> {
        Self::typed(self.get("Upload/my-documents").await?)
    }

    // ==================== Extraction ====================

    /// Starts an extraction job for a document.
    ///
    /// Sends the fixed options body (`{"language":"auto","ocr":true}`).
    pub async fn start_extraction(&self, document_id: &str) -> ApiResult<()> {
        let body = serde_json::to_string(&ExtractionOptions::default())
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        let response = self
            .post(&format!("Extraction/{}", document_id), &body)
            .await?;

        if !response.is_success {
            return Err(ApiError::Server {
                status: response.status,
                message: scan::extract_message(&response.body),
            });
        }
        Ok(())
    }

    /// Fetches the result of an extraction job.
    pub async fn extraction_result(&self, document_id: &str) -> ApiResult<ExtractionResult> {
        Self::typed(
            self.get(&format!("Extraction/result/{}", document_id))
                .await?,
        )
    }

    // ==================== Admin ====================

    /// Lists all users (admin only).
    pub async fn admin_users(&self) -> ApiResult<Vec<AdminUser>> {
        Self::typed(self.get("Admin/users").await?)
    }

    /// Lists all documents (admin only).
    pub async fn admin_documents(&self) -> ApiResult<Vec<Document>> {
        Self::typed(self.get("Admin/documents").await?)
    }

    /// Lists all extraction jobs (admin only).
    pub async fn admin_extractions(&self) -> ApiResult<Vec<AdminExtraction>> {
        Self::typed(self.get("Admin/extractions").await?)
    }

    /// Fetches aggregate statistics (admin only).
    pub async fn admin_statistics(&self) -> ApiResult<Statistics> {
        Self::typed(self.get("Admin/statistics").await?)
    }

    /// Creates a user (admin only).
    pub async fn admin_create_user(&self, req: &CreateUserRequest) -> ApiResult<AdminUser> {
        let body = serde_json::to_string(req)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        Self::typed(self.post("Admin/users", &body).await?)
    }

    /// Updates a user (admin only).
    pub async fn admin_update_user(
        &self,
        user_id: &str,
        req: &UpdateUserRequest,
    ) -> ApiResult<AdminUser> {
        let body = serde_json::to_string(req)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        Self::typed(self.put(&format!("Admin/users/{}", user_id), &body).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicU64, Ordering};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_check_connection_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        assert!(client.check_connection().await.unwrap());
    }

    #[tokio::test]
    async fn test_check_connection_unhealthy() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        assert!(!client.check_connection().await.unwrap());
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Nothing listens on this port.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.my_documents().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_login_happy_path() {
        let mock_server = MockServer::start().await;
        let expected_hash = hash_password("secret");

        Mock::given(method("GET"))
            .and(path("/api/User"))
            .and(query_param("username", "alice"))
            .and(query_param("password", expected_hash.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "email": "alice@example.com",
                "role": "Admin"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let profile = client.login("alice", "secret").await.unwrap();

        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@example.com");
        assert_eq!(profile.role, "Admin");
    }

    #[tokio::test]
    async fn test_login_rejected_extracts_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/User"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"message":"invalid credentials"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let err = client.login("alice", "wrong").await.unwrap_err();

        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid credentials");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_requests_carry_basic_auth() {
        let mock_server = MockServer::start().await;
        let creds = Credentials::from_plaintext("alice", "secret");

        Mock::given(method("GET"))
            .and(path("/api/Upload/my-documents"))
            .and(wiremock::matchers::header(
                "authorization",
                creds.basic_header().as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).with_credentials(creds);
        let docs = client.my_documents().await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_my_documents_parses_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/Upload/my-documents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "fileName": "a.pdf", "size": 10},
                {"id": "2", "fileName": "b.txt"}
            ])))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let docs = client.my_documents().await.unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].file_name, "a.pdf");
        assert_eq!(docs[1].size, 0);
    }

    #[tokio::test]
    async fn test_delete_hits_api_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/Upload/99"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let response = client.delete("Upload/99").await.unwrap();

        assert!(response.is_success);
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_start_extraction_posts_fixed_options() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/Extraction/42"))
            .and(wiremock::matchers::body_string(
                r#"{"language":"auto","ocr":true}"#,
            ))
            .respond_with(ResponseTemplate::new(202))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        client.start_extraction("42").await.unwrap();
    }

    #[tokio::test]
    async fn test_extraction_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/Extraction/result/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "42",
                "status": "completed",
                "text": "extracted text"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let result = client.extraction_result("42").await.unwrap();
        assert_eq!(result.text, "extracted text");
    }

    #[tokio::test]
    async fn test_admin_statistics() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/Admin/statistics"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalUsers": 7,
                "activeUsers": 5,
                "totalDocuments": 31,
                "totalExtractions": 12
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let stats = client.admin_statistics().await.unwrap();
        assert_eq!(stats.total_users, 7);
        assert_eq!(stats.active_users, 5);
    }

    #[tokio::test]
    async fn test_upload_streams_file_and_reports_progress() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/Upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "99",
                "fileName": "sample.txt"
            })))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("sample.txt");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"hello upload").unwrap();

        let last_sent = Arc::new(AtomicU64::new(0));
        let seen_total = Arc::new(AtomicU64::new(0));
        let progress: ProgressFn = {
            let last_sent = Arc::clone(&last_sent);
            let seen_total = Arc::clone(&seen_total);
            Arc::new(move |sent, total| {
                last_sent.store(sent, Ordering::SeqCst);
                seen_total.store(total, Ordering::SeqCst);
            })
        };

        let client = ApiClient::new(mock_server.uri());
        let receipt = client.upload_file(&file_path, Some(progress)).await.unwrap();

        assert_eq!(receipt.id.as_deref(), Some("99"));
        assert_eq!(last_sent.load(Ordering::SeqCst), 12);
        assert_eq!(seen_total.load(Ordering::SeqCst), 12);
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_io_error() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client
            .upload_file("/no/such/file.pdf", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(ApiClient::new("http://h:5000/").base_url(), "http://h:5000");
        assert_eq!(
            ApiClient::new("http://h:5000/api").base_url(),
            "http://h:5000"
        );
        assert_eq!(
            ApiClient::from_host_port("127.0.0.1", 5000).base_url(),
            "http://127.0.0.1:5000"
        );
    }
}
