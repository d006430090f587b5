//! HTTP transport shared by every resource client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, Url};
use serde_json::Value;

use crate::error::{ApiError, PayMongoError, Result};

const USER_AGENT: &str = concat!("paymongo-client/", env!("CARGO_PKG_VERSION"));

/// `Authorization` value for an API key: Basic auth, key as user, empty password.
#[must_use]
pub fn authorization_header(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{api_key}:")))
}

/// Authenticated JSON transport bound to one API key and base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a transport for `api_key` against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PayMongoError::Config`] if the base URL does not parse, the
    /// key cannot be sent as a header, or the HTTP client cannot be built.
    pub fn new(api_key: &str, base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| PayMongoError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let mut auth = HeaderValue::from_str(&authorization_header(api_key))
            .map_err(|_| PayMongoError::Config("API key is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PayMongoError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for `path`, appending only the query values that are present.
    ///
    /// # Errors
    ///
    /// Returns [`PayMongoError::Config`] if the joined URL does not parse.
    pub fn build_url(&self, path: &str, query: &[(&str, Option<String>)]) -> Result<Url> {
        let joined = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| PayMongoError::Config(format!("invalid request URL {joined:?}: {e}")))?;

        let present: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
            .collect();
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }

        Ok(url)
    }

    /// Send one request and return the parsed JSON body.
    ///
    /// An empty body, or a body that is not JSON on a success status, yields
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PayMongoError::Network`] if the request cannot complete and
    /// [`PayMongoError::Api`] for any non-2xx status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, Option<String>)],
    ) -> Result<Option<Value>> {
        let url = self.build_url(path, query)?;

        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "PayMongo request"
        );

        if status.is_success() {
            return Ok(parse_success_body(&bytes, path));
        }

        Err(ApiError::from_response(status.as_u16(), parse_error_body(&bytes)).into())
    }
}

fn parse_success_body(bytes: &[u8], path: &str) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Discarding non-JSON success body");
            None
        }
    }
}

fn parse_error_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}
