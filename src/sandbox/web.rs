use std::{
    io::{self, Read},
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::{Context, Result};
use log::{debug, trace};
use reqwest::{
    blocking::{Client, ClientBuilder},
    header::{HeaderMap, HeaderName, HeaderValue},
    redirect::Policy,
};
use serde_json::Value;

use crate::{
    config::{sandbox_limits::SandboxLimits, web_config::WebConfig},
    logging::LOG_TARGET,
};

use super::{HttpRequest, HttpResponse, ResponseError, Sandbox, TransportFault};

/// Sandbox whose HTTP capability goes out over the network, within the limits of a request's budget.
pub(crate) struct WebSandbox {
    web_client: Client,
    limits: SandboxLimits,
    queries_made: AtomicUsize,
}

impl WebSandbox {
    pub(crate) fn new(config: &WebConfig, limits: SandboxLimits) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .danger_accept_invalid_certs(config.insecure())
            .user_agent(config.user_agent().to_string())
            .timeout(*limits.max_query_duration());
        if !config.redirect() {
            client_builder = client_builder.redirect(Policy::none());
        }

        let web_client = client_builder.build().context("Web client setup failed")?;

        Ok(Self {
            web_client,
            limits,
            queries_made: AtomicUsize::new(0),
        })
    }

    pub(crate) fn queries_made(&self) -> usize {
        self.queries_made.load(Ordering::SeqCst)
    }

    // the budget is never replenished, one sandbox serves one invocation
    fn claim_query(&self) -> Result<(), TransportFault> {
        let allowed = *self.limits.allowed_queries();
        let claimed = self
            .queries_made
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |made| {
                (made < allowed).then(|| made + 1)
            });

        claimed
            .map(|_| ())
            .map_err(|_| TransportFault::QueryLimitReached(allowed))
    }
}

impl Sandbox for WebSandbox {
    fn make_http_request(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFault> {
        let max_url_length = *self.limits.max_query_url_length();
        if request.url().len() > max_url_length {
            return Err(TransportFault::UrlTooLong {
                length: request.url().len(),
                max: max_url_length,
            });
        }
        let headers = header_map(request.headers())?;
        self.claim_query()?;

        debug!(
            target: LOG_TARGET,
            "GET {} ({}/{})",
            request.url(),
            self.queries_made(),
            self.limits.allowed_queries()
        );
        let response = self
            .web_client
            .get(request.url())
            .headers(headers)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    TransportFault::Timeout
                } else if e.is_builder() {
                    TransportFault::InvalidRequest(e.to_string())
                } else {
                    TransportFault::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        trace!(target: LOG_TARGET, "{} answered with {}", request.url(), status);
        if !status.is_success() {
            return Ok(HttpResponse::failed(ResponseError::new(
                format!("Server responded with {}", status),
                Some(status.as_u16()),
            )));
        }

        let max_response_bytes = *self.limits.max_query_response_bytes();
        if response
            .content_length()
            .map_or(false, |length| length > max_response_bytes as u64)
        {
            return Ok(HttpResponse::failed(response_too_large(
                max_response_bytes,
                status.as_u16(),
            )));
        }

        // content length is optional and can't be trusted, so never pull more than one byte past the limit
        let body = match read_limited(response, max_response_bytes) {
            Ok(body) => body,
            Err(e) if e.kind() == io::ErrorKind::TimedOut => return Err(TransportFault::Timeout),
            Err(e) => {
                return Ok(HttpResponse::failed(ResponseError::new(
                    format!("Reading response body failed: {}", e),
                    Some(status.as_u16()),
                )))
            }
        };
        if body.len() > max_response_bytes {
            return Ok(HttpResponse::failed(response_too_large(
                max_response_bytes,
                status.as_u16(),
            )));
        }

        match serde_json::from_slice::<Value>(&body) {
            Ok(data) => Ok(HttpResponse::ok(data)),
            Err(e) => Ok(HttpResponse::failed(ResponseError::new(
                format!("Response body is not valid JSON: {}", e),
                Some(status.as_u16()),
            ))),
        }
    }
}

fn read_limited(body: impl Read, max_bytes: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    body.take(max_bytes as u64 + 1).read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn response_too_large(max_response_bytes: usize, status: u16) -> ResponseError {
    ResponseError::new(
        format!("Response exceeds the limit of {} bytes", max_response_bytes),
        Some(status),
    )
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportFault> {
    headers
        .iter()
        .map(|(name, value)| -> Result<(HeaderName, HeaderValue), TransportFault> {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                TransportFault::InvalidRequest(format!("Invalid header name: {}", name))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                TransportFault::InvalidRequest(format!("Invalid header value: {}", value))
            })?;
            Ok((name, value))
        })
        .collect()
}
