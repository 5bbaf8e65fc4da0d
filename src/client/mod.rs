//! Request/response adapter for the course API.
//!
//! One call per submission: parameters always travel as a query string,
//! even for POST endpoints, and the HTTP status is never inspected.

#![allow(async_fn_in_trait)]

use reqwest::{Client, Method};

use crate::error::ApiError;
use crate::event::AppEvent;
use crate::model::{Functionality, Table, Verb};

/// A fully built request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub functionality: Functionality,
    pub url: String,
    pub verb: Verb,
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn new(
        functionality: Functionality,
        base_url: &str,
        params: Vec<(&'static str, String)>,
    ) -> Self {
        Self {
            functionality,
            url: endpoint_url(base_url, functionality.endpoint()),
            verb: functionality.verb(),
            params,
        }
    }
}

/// `{base}/{endpoint}` with exactly one slash between them.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint)
}

/// Anything that can execute an `ApiRequest`.
pub trait ApiClient {
    async fn fetch_table(&self, request: &ApiRequest) -> Result<Table, ApiError>;
}

/// Send `request` and wrap the outcome for `update`. Errors are not
/// retried or translated.
pub async fn complete<C: ApiClient>(client: &C, request: &ApiRequest) -> AppEvent {
    AppEvent::ResponseReceived {
        functionality: request.functionality,
        result: client.fetch_table(request).await,
        received_at: chrono::Utc::now(),
    }
}

/// reqwest-backed client. No timeout and no retry beyond reqwest defaults.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
}

impl HttpApiClient {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ApiClient for HttpApiClient {
    async fn fetch_table(&self, request: &ApiRequest) -> Result<Table, ApiError> {
        let method = match request.verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
        };

        let resp = self
            .client
            .request(method, &request.url)
            .query(&request.params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        let table = Table::from_envelope(&body)?;

        tracing::info!(
            endpoint = request.functionality.endpoint(),
            status = status.as_u16(),
            rows = table.len(),
            "response received"
        );
        Ok(table)
    }
}
