use gloo::net::http::Request;
use shared::{ApiRequest, ClientConfig, GatewayError, Method, RequestGateway};

/// HTTP gateway to the expense backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client for the configured base URL; an empty base URL
    /// targets the page's own origin
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl RequestGateway for ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<String, GatewayError> {
        let url = self.config.url(&request.path);
        let content_type = request.content_type();

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };

        let sent = match (content_type, request.payload) {
            (Some(content_type), Some(payload)) => {
                builder
                    .header("Content-Type", content_type)
                    .body(payload)
                    .map_err(|e| GatewayError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            _ => builder.send().await,
        };

        let response = sent.map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if status == 200 {
            Ok(body)
        } else {
            Err(GatewayError::Status { status, body })
        }
    }
}
