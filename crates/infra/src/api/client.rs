//! API client with retry logic and envelope handling
//!
//! Provides the HTTP-based client the REST repositories are built on. The
//! backend wraps most payloads as `{"data": ...}`; some endpoints return the
//! bare resource. Both shapes are accepted.

use std::sync::Arc;
use std::time::Duration;

use meetnotify_domain::{ApiConfig, MeetNotifyError};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::auth::{AccessTokenProvider, StaticTokenProvider};
use super::errors::ApiError;
use crate::http::{HttpClient, RetryPolicy, TransportError};

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "https://rapat.example.go.id/api")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Total attempts per request, including the first
    pub max_attempts: usize,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs.max(1)),
            max_attempts: config.max_attempts.max(1),
        }
    }
}

/// REST API client
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// `auth` is optional; without it requests carry no `Authorization`
    /// header.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is invalid or the HTTP
    /// client cannot be created.
    pub fn new(
        config: ApiClientConfig,
        auth: Option<Arc<dyn AccessTokenProvider>>,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            ApiError::Config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "API base URL must be http or https, got '{}'",
                base_url.scheme()
            )));
        }

        let http_client = HttpClient::new(config.timeout, RetryPolicy::new(config.max_attempts))
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client: Arc::new(http_client), auth, base_url })
    }

    /// Build a client from application configuration, using the configured
    /// token (if any) as a static bearer token.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let auth = config
            .token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(|token| Arc::new(StaticTokenProvider::new(token)) as Arc<dyn AccessTokenProvider>);
        Self::new(ApiClientConfig::from(config), auth)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute a GET request and decode the (possibly enveloped) body
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None).await?;
        let result = Self::decode(response).await?;
        debug!(path = %path, "GET request successful");
        Ok(result)
    }

    /// Execute a POST request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = Self::encode(body)?;
        let response = self.execute(Method::POST, path, Some(body)).await?;
        let result = Self::decode(response).await?;
        info!(path = %path, "POST request successful");
        Ok(result)
    }

    /// Execute a PUT request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = Self::encode(body)?;
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        let result = Self::decode(response).await?;
        info!(path = %path, "PUT request successful");
        Ok(result)
    }

    /// Execute a DELETE request; any response body is ignored
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None).await?;
        info!(path = %path, "DELETE request successful");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ApiError::Config(format!("Invalid API path '{path}': {e}")))
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        debug!(%method, url = %url, "API request");

        let mut request = self
            .http_client
            .request(method, url.clone())
            .header("Accept", "application/json");
        if let Some(auth) = &self.auth {
            let token = auth.access_token().await?;
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = match self.http_client.send(request).await {
            Ok(resp) => resp,
            Err(TransportError::Failed(err)) => return Err(Self::map_domain_error(err)),
            Err(TransportError::Deadline(after)) => {
                warn!(url = %url, "API request timed out");
                return Err(ApiError::Timeout(after));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, url.as_str(), body));
        }
        Ok(response)
    }

    fn encode<T: Serialize>(body: &T) -> Result<Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| ApiError::Client(format!("Failed to serialize body: {}", e)))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        // 204/205 have no body by RFC
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "No content response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
        let value: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))?
        };

        serde_json::from_value(unwrap_envelope(value))
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        let detail = error_detail(&body);
        let message = match detail {
            Some(detail) => format!("{} returned status {}: {}", url, status, detail),
            None => format!("{} returned status {}", url, status),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::CONFLICT => ApiError::Conflict(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(message),
            s if s.is_server_error() => ApiError::Server(message),
            s if s.is_client_error() => ApiError::Client(message),
            _ => ApiError::Network(message),
        }
    }

    fn map_domain_error(err: MeetNotifyError) -> ApiError {
        match err {
            MeetNotifyError::Network(message) => ApiError::Network(message),
            MeetNotifyError::Auth(message) => ApiError::Auth(message),
            MeetNotifyError::Config(message) => ApiError::Config(message),
            MeetNotifyError::NotFound(message) => ApiError::NotFound(message),
            MeetNotifyError::Conflict(message) => ApiError::Conflict(message),
            MeetNotifyError::InvalidInput(message) => ApiError::Client(message),
            MeetNotifyError::Server(message) | MeetNotifyError::Internal(message) => {
                ApiError::Server(message)
            }
        }
    }
}

/// Take the payload out of a `{"data": ...}` envelope, or return the value
/// unchanged when it is not enveloped.
pub fn unwrap_envelope(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        if let Some(data) = map.remove("data") {
            return data;
        }
    }
    value
}

/// Human-readable detail from an error body (`{"message": ...}` or plain text).
fn error_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => match map.get("message").and_then(Value::as_str) {
            Some(message) => Some(message.to_string()),
            None => Some(trimmed.to_string()),
        },
        _ => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
        let config = ApiClientConfig {
            base_url: format!("{}/api", server.uri()),
            timeout: Duration::from_secs(5),
            max_attempts: 1,
        };
        let auth = token.map(|t| Arc::new(StaticTokenProvider::new(t)) as Arc<dyn AccessTokenProvider>);
        ApiClient::new(config, auth).unwrap()
    }

    #[test]
    fn unwrap_envelope_handles_both_shapes() {
        assert_eq!(unwrap_envelope(json!({"data": [1, 2]})), json!([1, 2]));
        assert_eq!(unwrap_envelope(json!({"id": 1})), json!({"id": 1}));
        assert_eq!(unwrap_envelope(json!([1])), json!([1]));
    }

    #[test]
    fn error_detail_prefers_message_field() {
        assert_eq!(
            error_detail(r#"{"message": "The title field is required."}"#).as_deref(),
            Some("The title field is required.")
        );
        assert_eq!(error_detail("  ").as_deref(), None);
        assert_eq!(error_detail("Bad Gateway").as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let config = ApiClientConfig { base_url: "ftp://example.com".into(), ..Default::default() };
        assert!(matches!(ApiClient::new(config, None), Err(ApiError::Config(_))));

        let config = ApiClientConfig { base_url: "not a url".into(), ..Default::default() };
        assert!(matches!(ApiClient::new(config, None), Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn get_sends_bearer_token_and_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ping"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"message": "pong"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-token"));
        let result: TestResponse = client.get("/ping").await.unwrap();
        assert_eq!(result, TestResponse { message: "pong".into() });
    }

    #[tokio::test]
    async fn get_accepts_bare_json_without_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "pong"})))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let result: TestResponse = client.get("ping").await.unwrap();
        assert_eq!(result.message, "pong");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn post_and_put_send_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/items"))
            .and(body_json(json!({"message": "hello"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "created"})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/items/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let body = TestResponse { message: "hello".into() };
        let created: TestResponse = client.post("/items", &body).await.unwrap();
        assert_eq!(created.message, "created");

        client.put::<_, ()>("/items/1", &body).await.unwrap();
    }

    #[tokio::test]
    async fn maps_status_codes_to_errors() {
        let server = MockServer::start().await;
        for (route, status) in [("/api/a", 401u16), ("/api/b", 404), ("/api/c", 409), ("/api/d", 422)] {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(json!({"message": "nope"})),
                )
                .mount(&server)
                .await;
        }

        let client = client_for(&server, None);
        assert!(matches!(client.get::<Value>("/a").await, Err(ApiError::Auth(_))));
        assert!(matches!(client.get::<Value>("/b").await, Err(ApiError::NotFound(_))));
        assert!(matches!(client.get::<Value>("/c").await, Err(ApiError::Conflict(_))));
        match client.get::<Value>("/d").await {
            Err(ApiError::Client(message)) => assert!(message.contains("nope")),
            other => panic!("expected client error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert!(matches!(client.get::<TestResponse>("/broken").await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn delete_ignores_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/items/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        client.delete("/items/3").await.unwrap();
    }
}
