//! IReV API client module.
//!
//! Provides a typed client for the INEC Result Viewing portal API: election
//! types, elections, states, LGAs, wards, polling units and their result
//! documents.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`IrevApi`] - Trait defining API operations
//! - [`HttpIrevClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockIrevClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! A request runs through a fixed sequence: pick a host and token from their
//! pools, build the [`Endpoint`] URL, unwrap the `{success, data}` envelope,
//! flatten nested wards for the polling unit endpoints, then decode.
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! ```ignore
//! use irev_client::irev::mock::MockIrevClient;
//!
//! let mock = MockIrevClient::new();
//! mock.set_election_types_result(Ok(vec![presidential()]));
//!
//! let found = find_election_type(&mock, "PRES").await;
//! assert!(found.is_ok());
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! let server = MockHttpServer::start().await;
//!
//! server
//!     .expect_get("/api/v1/election-types")
//!     .with_header("Authorization", "Bearer test-token")
//!     .respond_with_envelope(json!([presidential_json()]))
//!     .mount()
//!     .await;
//!
//! let client = HttpIrevClient::new(&server.api_config(["test-token"]))?;
//! let types = client.get_election_types().await?;
//! ```

mod client;
mod endpoint;
mod envelope;
mod error;
mod pool;
mod types;

pub use client::{HttpIrevClient, IrevApi, DEFAULT_HOSTS, DEFAULT_USER_AGENT};
pub use endpoint::{Endpoint, STATE_ID_RANGE};
pub use error::{ApiFailure, IrevApiError, RawResponse};
pub use pool::Pool;
pub use types::{
    Document, Election, ElectionPollStats, ElectionType, Lga, LgaApiResult, PUApiResult,
    PollingUnit, State, Ward,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
