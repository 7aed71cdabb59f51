//! Common test utilities for integration tests.
//!
//! This module provides:
//!
//! - [`http_mock::MockHttpServer`] - wiremock server standing in for an IReV host
//! - [`fixtures`] - upstream-shaped JSON for every entity
//!
//! # Usage
//!
//! ```ignore
//! use crate::common::{fixtures, http_mock::MockHttpServer};
//!
//! #[tokio::test]
//! async fn test_with_server() {
//!     let server = MockHttpServer::start().await;
//!     server
//!         .expect_get("/api/v1/election-types")
//!         .respond_with_envelope(json!([fixtures::election_type()]))
//!         .mount()
//!         .await;
//! }
//! ```

pub mod fixtures;
pub mod http_mock;
