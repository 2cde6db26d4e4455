pub(crate) mod web;

#[cfg(test)]
pub(crate) mod fake;

use std::fmt::Display;

use getset::Getters;
use serde_json::Value;
use thiserror::Error;

const ACCEPT_HEADER: (&str, &str) = ("accept", "application/json");

/// Capabilities handed to a request routine by the environment hosting it: network access and output encoding.
pub(crate) trait Sandbox {
    /// Perform a single HTTP GET. `Err` means the request never produced a response at all.
    fn make_http_request(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFault>;

    fn encode_string(&self, value: &str) -> Vec<u8> {
        value.as_bytes().to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub(crate) struct HttpRequest {
    #[getset(get = "pub(crate)")]
    url: String,
    #[getset(get = "pub(crate)")]
    headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub(crate) fn json(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: vec![(ACCEPT_HEADER.0.to_owned(), ACCEPT_HEADER.1.to_owned())],
        }
    }
}

/// Answer of a request which did reach a server. Either `error` is set, or `data` holds the parsed body.
#[derive(Debug, Clone, PartialEq, Getters)]
pub(crate) struct HttpResponse {
    #[getset(get = "pub(crate)")]
    data: Option<Value>,
    #[getset(get = "pub(crate)")]
    error: Option<ResponseError>,
}

impl HttpResponse {
    pub(crate) fn ok(data: Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub(crate) fn failed(error: ResponseError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub(crate) struct ResponseError {
    #[getset(get = "pub(crate)")]
    message: String,
    #[getset(get = "pub(crate)")]
    code: Option<u16>,
}

impl ResponseError {
    pub(crate) fn new(message: impl Into<String>, code: Option<u16>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (status {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum TransportFault {
    #[error("Query limit of {0} reached")]
    QueryLimitReached(usize),
    #[error("URL is {length} bytes long, the limit is {max}")]
    UrlTooLong { length: usize, max: usize },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Request timed out")]
    Timeout,
}
