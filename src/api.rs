use crate::errors::ApiError;
use crate::models::{DashboardSummary, UploadRequest, UploadResult};
use axum::body::Bytes;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

pub fn api_url(base: &str, endpoint: &str) -> String {
    format!("{base}{endpoint}")
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        api_url(&self.base_url, endpoint)
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, ApiError> {
        let url = self.url("/dashboard");
        let response = send(self.http.get(&url), &url).await?;
        decode(response, &url).await
    }

    pub async fn report(&self) -> Result<Bytes, ApiError> {
        let url = self.url("/report");
        let response = send(self.http.get(&url), &url).await?;
        response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { url, source })
    }

    pub async fn reset(&self) -> Result<(), ApiError> {
        let url = self.url("/reset");
        send(self.http.delete(&url), &url).await?;
        Ok(())
    }

    pub async fn upload(&self, text: &str) -> Result<UploadResult, ApiError> {
        let url = self.url("/upload");
        let body = UploadRequest {
            text: text.to_string(),
        };
        let response = send(self.http.post(&url).json(&body), &url).await?;
        decode(response, &url).await
    }
}

async fn send(request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
    debug!("api request {url}");
    let response = request.send().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    response.json().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_prefixes_base() {
        assert_eq!(
            api_url("http://127.0.0.1:8000", "/dashboard"),
            "http://127.0.0.1:8000/dashboard"
        );
        assert_eq!(api_url("", "/upload"), "/upload");
    }

    #[test]
    fn client_builds_endpoint_urls() {
        let client = ApiClient::new("https://api.c-trace.test");
        assert_eq!(client.url("/reset"), "https://api.c-trace.test/reset");
        assert_eq!(client.base_url(), "https://api.c-trace.test");
    }
}
