//! Request descriptors handed to a [`RequestExecutor`](crate::RequestExecutor)

use crate::error::ClientError;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the executor should hand back the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Json,
    Raw,
}

/// A single file sent as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub content: String,
}

/// Everything needed to issue one HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub response: ResponseKind,
    /// Query parameters in the order they are sent
    pub query: Vec<(String, String)>,
    pub form: Option<FilePart>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>, response: ResponseKind) -> Self {
        Self {
            method,
            url: url.into(),
            response,
            query: Vec::new(),
            form: None,
        }
    }

    /// Append a query parameter
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Attach a file part; the request is then sent as multipart form data
    pub fn file_part(mut self, part: FilePart) -> Self {
        self.form = Some(part);
        self
    }

    /// First value of a query parameter
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Response body as returned by an executor
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Raw(String),
}

impl ResponseBody {
    pub fn into_json(self, url: &str) -> Result<Value, ClientError> {
        match self {
            ResponseBody::Json(value) => Ok(value),
            ResponseBody::Raw(_) => Err(ClientError::UnexpectedBody {
                url: url.to_string(),
            }),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Raw(text) => text,
        }
    }
}
