//! HTTP gateway shared by every resource accessor.
//!
//! ARCHITECTURE
//! ============
//! `Gateway` shapes requests (URL, headers, JSON body) and turns raw responses
//! into typed results. The actual network hop sits behind the `Transport`
//! trait: `fetch::FetchTransport` in the browser, a scripted fake in tests.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or propagates transport exceptions. Every failure is
//! folded into `ApiError`, whose `Display` is the message screens show.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;

const UNKNOWN_TRANSPORT_ERROR: &str = "An unknown error occurred";

/// HTTP verbs used by the catalog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully shaped request, ready for a transport to put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as seen by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam. Implementations report connection-level failures as `Err`
/// and hand back every HTTP answer (including 4xx/5xx) as `Ok`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Serialize a request body, mapping failures into `ApiError::Encode`.
///
/// # Errors
///
/// Returns `ApiError::Encode` if `body` cannot be represented as JSON.
pub fn json_body<B: Serialize>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Request shaper bound to one API origin.
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            transport,
        }
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one call and decode the response body into `R`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures, non-2xx statuses, or bodies
    /// that do not decode into `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> ApiResult<R> {
        let request = build_request(&self.base_url, method, path, token, body.as_ref());
        log::debug!("{} {}", method.as_str(), path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(message) => {
                log::warn!("{} {} failed: {message}", method.as_str(), path);
                return Err(transport_error(message));
            }
        };

        let result = decode_response(response);
        if let Err(e) = &result {
            log::warn!("{} {} returned error: {e}", method.as_str(), path);
        }
        result
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> ApiResult<R> {
        self.request(Method::Get, path, token, None).await
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> ApiResult<R> {
        self.request(Method::Post, path, token, body).await
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> ApiResult<R> {
        self.request(Method::Delete, path, token, None).await
    }
}

pub(crate) fn build_request(
    base_url: &str,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<&serde_json::Value>,
) -> HttpRequest {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    HttpRequest {
        method,
        url: format!("{base_url}{path}"),
        headers,
        body: body.map(serde_json::Value::to_string),
    }
}

fn transport_error(message: String) -> ApiError {
    if message.trim().is_empty() {
        ApiError::Transport(UNKNOWN_TRANSPORT_ERROR.to_owned())
    } else {
        ApiError::Transport(message)
    }
}

pub(crate) fn decode_response<R: DeserializeOwned>(response: HttpResponse) -> ApiResult<R> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            message: error_message(response.status, &response.status_text, &response.body),
        });
    }
    let body = response.body.trim();
    let body = if body.is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pick the most specific message available for a failed response.
///
/// Order: `{"error": "..."}` field, bare JSON string body, status text,
/// then a synthesized `HTTP <status>`.
pub(crate) fn error_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(ErrorBody { error: Some(message) }) = serde_json::from_str::<ErrorBody>(body) {
        if !message.trim().is_empty() {
            return message;
        }
    }
    if let Ok(message) = serde_json::from_str::<String>(body) {
        if !message.trim().is_empty() {
            return message;
        }
    }
    if status_text.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        status_text.to_owned()
    }
}
