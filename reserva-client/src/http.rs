//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{ApiResponse, ErrorCode};

use crate::{ClientConfig, ClientError, ClientResult};

/// Request body envelope expected by the API
#[derive(Serialize)]
struct DataEnvelope<'a, B> {
    data: &'a B,
}

/// Legacy error body (`{"error": "..."}`)
#[derive(serde::Deserialize)]
struct LegacyError {
    error: String,
}

/// HTTP client for making network requests to the reservation API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a `{"data": ...}` body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(&DataEnvelope { data: body })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a `{"data": ...}` body
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self
            .client
            .put(&url)
            .json(&DataEnvelope { data: body })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Unwrap the response envelope or turn the error body into a [`ClientError`]
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let err = Self::error_from_body(status, &text);
            tracing::warn!(status = status.as_u16(), error = %err, "API request failed");
            return Err(err);
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&text)?;
        if !envelope.is_success() {
            let code = envelope
                .code
                .and_then(|c| ErrorCode::try_from(c).ok())
                .unwrap_or(ErrorCode::Unknown);
            return Err(ClientError::Api {
                code,
                status: status.as_u16(),
                message: envelope.message,
            });
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    fn error_from_body(status: StatusCode, text: &str) -> ClientError {
        let fallback_code = ErrorCode::from_http_status(status);

        if let Ok(api_err) = serde_json::from_str::<ApiResponse<serde_json::Value>>(text)
            && !api_err.message.is_empty()
        {
            let code = api_err
                .code
                .and_then(|c| ErrorCode::try_from(c).ok())
                .unwrap_or(fallback_code);
            return ClientError::Api {
                code,
                status: status.as_u16(),
                message: api_err.message,
            };
        }
        if let Ok(legacy) = serde_json::from_str::<LegacyError>(text) {
            return ClientError::Api {
                code: fallback_code,
                status: status.as_u16(),
                message: legacy.error,
            };
        }

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(text.to_string()),
            _ => ClientError::Api {
                code: fallback_code,
                status: status.as_u16(),
                message: if text.trim().is_empty() {
                    fallback_code.message().to_string()
                } else {
                    text.to_string()
                },
            },
        }
    }
}
