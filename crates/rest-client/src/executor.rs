use crate::error::ClientError;
use crate::request::{Method, Request, ResponseBody, ResponseKind};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart;
use std::time::Duration;

/// Issues a [`Request`] and returns its body
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: Request) -> Result<ResponseBody, ClientError>;
}

/// Executor backed by `reqwest`
#[derive(Clone)]
pub struct HttpExecutor {
    http: reqwest::Client,
}

impl HttpExecutor {
    /// Create an executor without a request timeout
    pub fn new() -> Result<Self, ClientError> {
        Self::with_timeout(None)
    }

    /// Create an executor that aborts requests after `timeout`
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Setup)?;
        Ok(Self { http })
    }

    /// Translate a request descriptor into a `reqwest` request
    fn build_request(&self, request: &Request) -> Result<reqwest::Request, ClientError> {
        let transport_error = |source| ClientError::Transport {
            method: request.method,
            url: request.url.clone(),
            source,
        };

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(part) = &request.form {
            let file = multipart::Part::text(part.content.clone())
                .file_name(part.file_name.clone())
                .mime_str(&part.mime)
                .map_err(transport_error)?;
            builder = builder.multipart(multipart::Form::new().part(part.field.clone(), file));
        }

        builder.build().map_err(transport_error)
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: Request) -> Result<ResponseBody, ClientError> {
        let http_request = self.build_request(&request)?;
        debug!("{} {}", request.method, http_request.url());

        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(|source| ClientError::Transport {
                method: request.method,
                url: request.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Status {
                method: request.method,
                url: request.url,
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| ClientError::Transport {
                method: request.method,
                url: request.url.clone(),
                source,
            })?;

        match request.response {
            ResponseKind::Raw => Ok(ResponseBody::Raw(text)),
            ResponseKind::Json => serde_json::from_str(&text)
                .map(ResponseBody::Json)
                .map_err(|source| ClientError::Decode {
                    url: request.url,
                    source,
                }),
        }
    }
}
