//! # Request Gateway
//!
//! The single seam through which the client talks to the backend. A gateway
//! resolves a request to the response body when the backend answers with
//! HTTP 200 and to a [`GatewayError`] in every other case, so callers always
//! get an explicit failure continuation.
//!
//! [`ExpenseApi`] layers the typed endpoints on top of any gateway.

use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{Category, ExpenseRecord, ExpensesResponse, NewExpense, ReportingPeriod, StatisticsRow};

/// Content type sent with every request that carries a payload
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A request relative to the backend base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/`, e.g. `/expenses/30`
    pub path: String,
    /// Serialized JSON body
    pub payload: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            payload: None,
        }
    }

    pub fn post(path: impl Into<String>, payload: String) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            payload: Some(payload),
        }
    }

    /// The `Content-Type` header to send, if any
    pub fn content_type(&self) -> Option<&'static str> {
        self.payload.as_ref().map(|_| JSON_CONTENT_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Transport that issues a request and reports the outcome.
///
/// Implementations must return `Ok` only for HTTP status 200. Futures run on
/// the UI thread and are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait RequestGateway {
    async fn send(&self, request: ApiRequest) -> Result<String, GatewayError>;
}

impl<G: RequestGateway + ?Sized> RequestGateway for &G {
    async fn send(&self, request: ApiRequest) -> Result<String, GatewayError> {
        (**self).send(request).await
    }
}

/// Typed client for the expense backend endpoints
#[derive(Clone)]
pub struct ExpenseApi<G> {
    gateway: G,
}

impl<G: RequestGateway> ExpenseApi<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// `POST /expense`
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<(), GatewayError> {
        let payload = serde_json::to_string(expense).map_err(|e| GatewayError::Encode(e.to_string()))?;
        self.send(ApiRequest::post("/expense", payload)).await?;
        Ok(())
    }

    /// `GET /expenses/{limit}`, most recent first
    pub async fn recent_expenses(&self, limit: u32) -> Result<Vec<ExpenseRecord>, GatewayError> {
        let response: ExpensesResponse = self.fetch_json(&format!("/expenses/{}", limit)).await?;
        Ok(response.results)
    }

    /// `GET /categories`
    pub async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.fetch_json("/categories").await
    }

    /// `GET /statistics/{start}/{end}`
    pub async fn statistics(&self, period: &ReportingPeriod) -> Result<Vec<StatisticsRow>, GatewayError> {
        let path = format!(
            "/statistics/{}/{}",
            period.start_timestamp(),
            period.end_timestamp()
        );
        self.fetch_json(&path).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let body = self.send(ApiRequest::get(path)).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(path, error = %e, "unexpected response shape");
            GatewayError::Decode(e.to_string())
        })
    }

    async fn send(&self, request: ApiRequest) -> Result<String, GatewayError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let method = request.method;
        let path = request.path.clone();
        self.gateway.send(request).await.map_err(|e| {
            warn!(%method, %path, error = %e, "request failed");
            e
        })
    }
}
