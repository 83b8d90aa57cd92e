use reqwest::{Client as HttpClient, Method};
use serde_json::Value;

use crate::core::response::{self, RawResponse};
use crate::utils::error::{Error, Result};

/// Performs one HTTP request per call and runs the response through the
/// envelope decoder.
///
/// Every request carries the `aftership-api-key` and JSON content-type
/// headers. There are no retries and no backoff; a timeout or unreachable
/// host surfaces as `Error::Timeout` carrying the target URL. The
/// `transform` callback receives the decoded envelope so call sites can
/// unwrap the nested field they need without duplicating that logic.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    http: HttpClient,
    api_key: String,
    debug: bool,
}

impl RequestExecutor {
    pub fn new(api_key: String, debug: bool) -> Self {
        Self {
            http: HttpClient::new(),
            api_key,
            debug,
        }
    }

    pub async fn get<T>(
        &self,
        url: &str,
        transform: impl FnOnce(Value) -> Result<T>,
    ) -> Result<T> {
        self.perform(Method::GET, url, None, transform).await
    }

    pub async fn post<T>(
        &self,
        url: &str,
        body: &Value,
        transform: impl FnOnce(Value) -> Result<T>,
    ) -> Result<T> {
        self.perform(Method::POST, url, Some(body), transform).await
    }

    pub async fn put<T>(
        &self,
        url: &str,
        body: &Value,
        transform: impl FnOnce(Value) -> Result<T>,
    ) -> Result<T> {
        self.perform(Method::PUT, url, Some(body), transform).await
    }

    async fn perform<T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        transform: impl FnOnce(Value) -> Result<T>,
    ) -> Result<T> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header("aftership-api-key", &self.api_key)
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            let serialized = serde_json::to_string(body)?;
            if self.debug {
                tracing::debug!(%url, body = %serialized, "request body");
            }
            request = request.body(serialized);
        }

        tracing::debug!(%method, %url, "performing API request");

        let raw = match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await?;
                tracing::debug!(%url, status, "API response");
                if self.debug {
                    tracing::debug!(%url, body = %body, "response body");
                }
                RawResponse {
                    status,
                    body,
                    timed_out: false,
                }
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                tracing::debug!(%url, "request never completed");
                RawResponse {
                    status: 0,
                    body: String::new(),
                    timed_out: true,
                }
            }
            Err(e) => return Err(Error::Transport(e)),
        };

        let payload = response::decode(url, raw)?;
        transform(payload)
    }
}
