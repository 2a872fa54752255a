// konveksi-client/src/client/http.rs
// HTTP client - network transport

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// `path` always starts with `/` and may carry a query string.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
}

/// Decode a 2xx body, or map a failure status
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: http::StatusCode,
    body: &[u8],
) -> ClientResult<T> {
    if !status.is_success() {
        let text = String::from_utf8_lossy(body);
        tracing::debug!(status = %status, body = %text, "Request failed");
        return Err(ClientError::from_status(status, &text));
    }
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(req).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        decode_body(status, &bytes)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = NetworkHttpClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/banners"), "http://localhost:5000/api/banners");
    }

    #[test]
    fn test_decode_body_failure_status() {
        let result: ClientResult<u32> =
            decode_body(http::StatusCode::NOT_FOUND, br#"{"message":"nope"}"#);
        assert!(matches!(result, Err(ClientError::NotFound(Some(ref m))) if m == "nope"));
    }

    #[test]
    fn test_decode_body_rejects_malformed_json() {
        let result: ClientResult<u32> = decode_body(http::StatusCode::OK, b"<html>");
        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }
}
