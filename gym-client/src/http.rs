//! HTTP client for the dashboard REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ErrorBody;

/// HTTP client wrapping `reqwest` with the backend's error conventions
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.apply_auth(self.client.get(&url)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with URL query pairs
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, params = query.len(), "GET");
        let response = self
            .apply_auth(self.client.get(&url).query(query))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .apply_auth(self.client.post(&url).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.apply_auth(self.client.post(&url)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self
            .apply_auth(self.client.put(&url).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request without body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.apply_auth(self.client.put(&url)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request with JSON body
    pub async fn delete_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self
            .apply_auth(self.client.delete(&url).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response.
    ///
    /// 429 is mapped to [`ClientError::RateLimited`] with the body's
    /// retry-after hint (header fallback) and logged at debug only. Other
    /// non-success statuses surface the `{error}` body verbatim.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let header_hint = retry_after_header(&response);
            let text = response.text().await.unwrap_or_default();
            let retry_after = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.retry_after)
                .or(header_hint);
            tracing::debug!(?retry_after, "rate limited");
            return Err(ClientError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Decode through serde_json so a malformed success body surfaces as
        // a serialization error rather than a transport one
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }
}

fn retry_after_header(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
