use std::cell::RefCell;
use std::collections::HashMap;

use crate::gateway::{ApiRequest, GatewayError, RequestGateway};

/// Scripted in-memory gateway keyed by `"METHOD /path"`.
///
/// Unscripted requests answer with a 404 status error. Every request is
/// recorded in arrival order.
#[derive(Default)]
pub struct FakeGateway {
    responses: HashMap<String, Result<String, GatewayError>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: &str, body: &str) -> Self {
        self.responses.insert(key.to_string(), Ok(body.to_string()));
        self
    }

    pub fn fail(mut self, key: &str, error: GatewayError) -> Self {
        self.responses.insert(key.to_string(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| format!("{} {}", request.method, request.path))
            .collect()
    }
}

impl RequestGateway for FakeGateway {
    async fn send(&self, request: ApiRequest) -> Result<String, GatewayError> {
        let key = format!("{} {}", request.method, request.path);
        self.requests.borrow_mut().push(request);
        self.responses.get(&key).cloned().unwrap_or(Err(GatewayError::Status {
            status: 404,
            body: format!("no route for {}", key),
        }))
    }
}

/// Categories used across tests
pub const CATEGORIES_JSON: &str = r#"[{"id": "1", "name": "Food"}, {"id": "2", "name": "Rent"}]"#;

/// Statistics used across tests
pub const STATISTICS_JSON: &str =
    r#"[{"category": {"name": "Food"}, "total": 12.5}, {"category": {"name": "Rent"}, "total": 800}]"#;
