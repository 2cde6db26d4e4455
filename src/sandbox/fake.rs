use std::{cell::RefCell, collections::HashMap};

use serde_json::Value;

use super::{HttpRequest, HttpResponse, ResponseError, Sandbox, TransportFault};

/// Scripted sandbox: answers per URL and remembers every request in the order it was made.
#[derive(Default)]
pub(crate) struct FakeSandbox {
    answers: HashMap<String, Result<HttpResponse, TransportFault>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeSandbox {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn serve(mut self, url: &str, data: Value) -> Self {
        self.answers.insert(url.to_owned(), Ok(HttpResponse::ok(data)));
        self
    }

    pub(crate) fn reject(mut self, url: &str, message: &str) -> Self {
        self.answers.insert(
            url.to_owned(),
            Ok(HttpResponse::failed(ResponseError::new(message, Some(500)))),
        );
        self
    }

    pub(crate) fn break_connection(mut self, url: &str) -> Self {
        self.answers.insert(
            url.to_owned(),
            Err(TransportFault::Connection(format!("{} is unreachable", url))),
        );
        self
    }

    pub(crate) fn requested_urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.url().clone())
            .collect()
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Sandbox for FakeSandbox {
    fn make_http_request(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFault> {
        self.requests.borrow_mut().push(request.clone());
        self.answers
            .get(request.url())
            .cloned()
            // unscripted means unreachable
            .unwrap_or_else(|| Err(TransportFault::Connection(format!("no route to {}", request.url()))))
    }
}
