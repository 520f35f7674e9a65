//! HTTP request client for the web-larek storefront API.
//!
//! Provides a small builder API for outbound requests with automatic JSON
//! handling, and the [`Api`] capability the storefront gateway is written
//! against.
//!
//! # Example
//!
//! ```rust,ignore
//! use larek_data::{Api, PostMethod, RestApi};
//!
//! let api = RestApi::new("https://larek-api.nomoreparties.co/api/weblarek");
//!
//! // GET returns the parsed JSON body
//! let products = api.get("/product/").await?;
//!
//! // POST with a JSON body
//! let order = serde_json::json!({ "payment": "card", "items": ["1"], "total": 750 });
//! let created = api.post("/order/", order, PostMethod::Post).await?;
//! ```

mod api;
mod error;
mod request;
mod response;
mod timeout;

pub use api::{Api, InMemoryApi, RecordedRequest, RestApi};
pub use error::FetchError;
pub use request::{Method, PostMethod, RequestBuilder};
pub use response::Response;
pub use timeout::TimeoutConfig;

use std::collections::HashMap;

/// HTTP client for making outbound requests.
///
/// A thin wrapper around a pooled `reqwest` client that resolves request
/// paths against an optional base URL and applies default headers.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Apply connect and total timeouts to every request.
    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Result<Self, FetchError> {
        self.http = reqwest::Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()?;
        Ok(self)
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let full_url = self.resolve(url.into());

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            builder,
        }
    }

    fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        }
    }
}

/// A request builder bound to a client.
#[derive(Debug)]
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// The request as built so far.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the response.
    ///
    /// Any status code is returned as a [`Response`]; use
    /// [`Response::error_for_status`] to turn non-2xx answers into errors.
    #[tracing::instrument(skip(self), fields(method = self.builder.method.as_str(), url = %self.builder.url))]
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            method,
            url,
            headers,
            body,
        } = self.builder;

        let mut request = self.http.request(method.to_reqwest(), &url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();
        let response = Response::new(status, headers, body);

        tracing::debug!(
            status,
            bytes = response.body.len(),
            content_type = response.header("content-type"),
            "Response received"
        );

        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Api, FetchClient, FetchError, Method, PostMethod, Response, RestApi};
}
