//! The request capability consumed by the storefront gateway.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::{FetchClient, FetchError, Method, PostMethod, Response};

/// Performs requests against the storefront API and returns parsed JSON.
///
/// Implementations must fail with a [`FetchError`] on network failure, a
/// non-2xx status, or a body that is not valid JSON.
#[async_trait]
pub trait Api: Send + Sync {
    /// Issue a GET request for `uri`.
    async fn get(&self, uri: &str) -> Result<Value, FetchError>;

    /// Send `body` as JSON to `uri` using `method`.
    async fn post(&self, uri: &str, body: Value, method: PostMethod) -> Result<Value, FetchError>;
}

/// [`Api`] implementation backed by a [`FetchClient`].
#[derive(Debug, Clone)]
pub struct RestApi {
    client: FetchClient,
}

impl RestApi {
    /// Create an API client rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_client(FetchClient::new().with_base_url(base_url))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: FetchClient) -> Self {
        let client = client.with_default_header("Accept", "application/json");
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

#[async_trait]
impl Api for RestApi {
    async fn get(&self, uri: &str) -> Result<Value, FetchError> {
        self.client
            .get(uri)
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    async fn post(&self, uri: &str, body: Value, method: PostMethod) -> Result<Value, FetchError> {
        self.client
            .request(method.into(), uri)
            .json(&body)?
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

/// A request observed by [`InMemoryApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Canned {
    Reply { status: u16, body: Vec<u8> },
    Unreachable(String),
}

/// In-memory [`Api`] (for development/testing).
///
/// Answers from canned responses registered per method and URI, and records
/// every request it receives. Unregistered routes answer `404`.
#[derive(Debug, Default)]
pub struct InMemoryApi {
    routes: HashMap<(Method, String), Canned>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl InMemoryApi {
    /// Create an API with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method uri` with `200` and `body`.
    pub fn with_json(self, method: Method, uri: impl Into<String>, body: Value) -> Self {
        self.with_status(method, uri, 200, body)
    }

    /// Answer `method uri` with `status` and a JSON `body`.
    pub fn with_status(
        self,
        method: Method,
        uri: impl Into<String>,
        status: u16,
        body: Value,
    ) -> Self {
        self.with_raw(method, uri, status, body.to_string())
    }

    /// Answer `method uri` with `status` and an arbitrary body.
    pub fn with_raw(
        mut self,
        method: Method,
        uri: impl Into<String>,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.routes.insert(
            (method, uri.into()),
            Canned::Reply {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Fail `method uri` as if the server could not be reached.
    pub fn unreachable(mut self, method: Method, uri: impl Into<String>) -> Self {
        self.routes.insert(
            (method, uri.into()),
            Canned::Unreachable("connection refused".to_string()),
        );
        self
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn respond(&self, method: Method, uri: &str, body: Option<Value>) -> Result<Value, FetchError> {
        let request = RecordedRequest {
            method,
            uri: uri.to_string(),
            body,
        };
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }

        match self.routes.get(&(method, uri.to_string())) {
            Some(Canned::Reply { status, body }) => {
                Response::new(*status, HashMap::new(), body.clone())
                    .error_for_status()?
                    .json()
            }
            Some(Canned::Unreachable(reason)) => Err(FetchError::RequestError(reason.clone())),
            None => Err(FetchError::HttpError {
                status: 404,
                message: "Not Found".to_string(),
            }),
        }
    }
}

#[async_trait]
impl Api for InMemoryApi {
    async fn get(&self, uri: &str) -> Result<Value, FetchError> {
        self.respond(Method::Get, uri, None)
    }

    async fn post(&self, uri: &str, body: Value, method: PostMethod) -> Result<Value, FetchError> {
        self.respond(method.into(), uri, Some(body))
    }
}
