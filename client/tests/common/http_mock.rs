//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing of the IReV API.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server.expect_get("/api/v1/election-types")
//!         .respond_with_envelope(json!([]))
//!         .mount()
//!         .await;
//!
//!     let client = HttpIrevClient::new(&server.api_config(["token"])).unwrap();
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_envelope(data)` or `.respond_with_json(value)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Raw body**: `.respond_with_body("<html>")`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

#![allow(dead_code)]

use std::time::Duration;

use irev_client::config::ApiConfig;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A wiremock server standing in for one IReV host.
pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL, usable as an IReV host.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Client config pointing at this server only.
    pub fn api_config<I, S>(&self, tokens: I) -> ApiConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ApiConfig {
            hosts: vec![self.url()],
            ..ApiConfig::with_tokens(tokens)
        }
    }

    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    pub fn expect_get(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            mock: Mock::given(method("GET")).and(path(route)),
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }

    /// Number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// Panics if any mounted `expect_times` expectation was not met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }
}

enum Body {
    Json(Value),
    Raw(String),
}

/// Builder for a single stubbed route.
pub struct StubBuilder<'a> {
    server: &'a MockServer,
    mock: wiremock::MockBuilder,
    status: u16,
    body: Option<Body>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.mock = self.mock.and(header(name, value));
        self
    }

    pub fn with_query(mut self, name: &'static str, value: &str) -> Self {
        self.mock = self.mock.and(query_param(name, value));
        self
    }

    /// Respond with `{"success": true, "data": data}`.
    pub fn respond_with_envelope(self, data: Value) -> Self {
        self.respond_with_json(json!({ "success": true, "data": data }))
    }

    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(Body::Json(body));
        self
    }

    pub fn respond_with_body(mut self, body: &str) -> Self {
        self.body = Some(Body::Raw(body.to_string()));
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut response = ResponseTemplate::new(self.status);
        response = match self.body {
            Some(Body::Json(value)) => response.set_body_json(value),
            Some(Body::Raw(text)) => response.set_body_string(text),
            None => response,
        };
        if let Some(delay) = self.delay {
            response = response.set_delay(delay);
        }

        let mut mock = self.mock.respond_with(response);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
