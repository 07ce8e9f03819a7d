//! HTTP candidate, fetched with caching disabled

use super::Source;
use crate::error::LoadError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use std::time::Duration;
use tokio::sync::OnceCell;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A catalog served over HTTP(S)
pub struct HttpSource {
    url: String,
    /// Built on the first fetch, reused after that
    client: OnceCell<reqwest::Client>,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&reqwest::Client, LoadError> {
        self.client
            .get_or_try_init(|| async {
                let mut headers = HeaderMap::new();
                headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
                headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

                reqwest::Client::builder()
                    .default_headers(headers)
                    .timeout(REQUEST_TIMEOUT)
                    .build()
                    .map_err(|e| self.http_error(e))
            })
            .await
    }

    fn http_error(&self, e: reqwest::Error) -> LoadError {
        LoadError::Http {
            location: self.url.clone(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl Source for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client()
            .await?
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.http_error(e))?;
        Ok(body.to_vec())
    }

    fn location(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_built_once() {
        let source = HttpSource::new("http://127.0.0.1:9/books.json");
        assert!(!source.client.initialized());

        assert!(source.fetch().await.is_err());
        let first: *const reqwest::Client = source.client().await.unwrap();

        assert!(source.fetch().await.is_err());
        let second: *const reqwest::Client = source.client().await.unwrap();
        assert_eq!(first, second);
    }
}
