//! IReV API client for fetching election results.
//!
//! This module provides a trait-based HTTP client for the INEC Result Viewing
//! (IReV) portal API. The trait abstraction enables:
//!
//! - Easy mocking in unit tests
//! - HTTP-level testing with `MockHttpServer` in integration tests
//!
//! # Example
//!
//! ```ignore
//! use irev_client::config::ApiConfig;
//! use irev_client::irev::{HttpIrevClient, IrevApi};
//!
//! let client = HttpIrevClient::new(&ApiConfig::with_tokens(["my-token"]))?;
//! let types = client.get_election_types().await?;
//! println!("Found {} election types", types.len());
//! ```

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;

use super::endpoint::Endpoint;
use super::envelope::{decode, flatten_polling_unit_wards, unwrap_envelope};
use super::error::{ApiFailure, IrevApiError, RawResponse};
use super::pool::Pool;
use super::types::{
    Election, ElectionPollStats, ElectionType, LgaApiResult, PUApiResult, RawPollStats,
};
use crate::config::ApiConfig;

/// Hosts serving the IReV API, as used by the IReV web application (2023-02-26).
pub const DEFAULT_HOSTS: [&str; 3] = [
    "https://lv001-g.inecelectionresults.ng",
    "https://lv001-r.inecelectionresults.ng",
    "https://irev-v2.herokuapp.com",
];

/// Desktop Safari. Upstream blocks agents that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.0 Safari/605.1.15";

const API_PREFIX: &str = "/api/v1";

/// Trait for IReV API operations.
///
/// Use `HttpIrevClient` for real HTTP calls, or `mock::MockIrevClient`
/// in tests.
#[async_trait]
pub trait IrevApi: Send + Sync {
    /// List every election type (presidential, governorship, ...).
    async fn get_election_types(&self) -> Result<Vec<ElectionType>, IrevApiError>;

    /// List the elections of one election type.
    async fn get_elections(&self, election_type: &str) -> Result<Vec<Election>, IrevApiError>;

    async fn get_election(&self, election: &str) -> Result<Election, IrevApiError>;

    /// Count of polling units and uploaded result sheets for an election.
    async fn get_election_stats(&self, election: &str) -> Result<ElectionPollStats, IrevApiError>;

    /// All LGAs of a state, with their wards.
    ///
    /// `state_id` must be within 1..=37 (36 states and the FCT); anything else
    /// fails with [`IrevApiError::Validation`] without touching the network.
    async fn get_lgas_by_state(
        &self,
        election: &str,
        state_id: u32,
    ) -> Result<Vec<LgaApiResult>, IrevApiError>;

    async fn get_lga(&self, election: &str, lga: &str) -> Result<LgaApiResult, IrevApiError>;

    /// All polling units of a ward, with their result documents.
    async fn get_polling_units_by_ward(
        &self,
        election: &str,
        ward: &str,
    ) -> Result<Vec<PUApiResult>, IrevApiError>;

    async fn get_polling_unit(
        &self,
        election: &str,
        polling_unit: &str,
    ) -> Result<PUApiResult, IrevApiError>;
}

/// HTTP-based implementation of `IrevApi`.
///
/// Each request picks one host and one auth token at random. The inner
/// `reqwest::Client` keeps connections alive between requests.
#[derive(Clone)]
pub struct HttpIrevClient {
    client: reqwest::Client,
    auth_tokens: Pool<String>,
    hosts: Pool<String>,
    user_agent: String,
}

impl HttpIrevClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    /// Returns [`IrevApiError::Config`] if no auth token is configured.
    pub fn new(config: &ApiConfig) -> Result<Self, IrevApiError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client with a custom `reqwest::Client` (timeouts, proxies).
    ///
    /// # Errors
    /// Returns [`IrevApiError::Config`] if no auth token is configured.
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Result<Self, IrevApiError> {
        let auth_tokens = Pool::new(non_blank(&config.auth_tokens)).ok_or_else(|| {
            IrevApiError::Config("at least one auth token is required".to_string())
        })?;

        let hosts: Vec<String> = non_blank(&config.hosts)
            .into_iter()
            .map(|host| host.trim_end_matches('/').to_string())
            .collect();
        let hosts = Pool::new(hosts)
            .or_else(default_hosts)
            .ok_or_else(|| IrevApiError::Config("no API hosts available".to_string()))?;

        let user_agent = config
            .user_agent
            .as_deref()
            .map(str::trim)
            .filter(|agent| !agent.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
            .to_string();

        Ok(Self {
            client,
            auth_tokens,
            hosts,
            user_agent,
        })
    }

    /// Hosts requests are spread across.
    pub fn hosts(&self) -> &[String] {
        self.hosts.as_slice()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Issue one GET and return the envelope's `data`, ward fix-up applied.
    async fn request<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, IrevApiError> {
        let host = self.hosts.sample();
        let token = self.auth_tokens.sample();
        let path = endpoint.path();
        let url = format!("{host}{API_PREFIX}{path}");

        tracing::debug!(%host, %path, "requesting IReV API");

        let response = self
            .client
            .get(&url)
            .query(&endpoint.query())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(%host, %path, error = %err, "IReV request failed");
                IrevApiError::Request(err)
            })?;

        let url = response.url().to_string();
        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(
                    %host,
                    %path,
                    status = status.as_u16(),
                    error = %err,
                    "failed to read IReV response body"
                );
                let raw = RawResponse {
                    url,
                    status,
                    headers,
                    body: String::new(),
                };
                return Err(IrevApiError::api(ApiFailure::InvalidJson, raw));
            }
        };
        let raw = RawResponse {
            url,
            status,
            headers,
            body,
        };

        let parsed = unwrap_envelope(&raw).and_then(|mut data| {
            if endpoint.returns_nested_ward() {
                flatten_polling_unit_wards(&mut data);
            }
            decode(data)
        });

        parsed.map_err(|reason| {
            tracing::warn!(
                %host,
                %path,
                status = raw.status.as_u16(),
                %reason,
                "IReV API returned an unusable response"
            );
            IrevApiError::api(reason, raw)
        })
    }
}

impl fmt::Debug for HttpIrevClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpIrevClient")
            .field("hosts", &self.hosts.as_slice())
            .field("auth_tokens", &format_args!("<{} redacted>", self.auth_tokens.as_slice().len()))
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect()
}

fn default_hosts() -> Option<Pool<String>> {
    Pool::new(DEFAULT_HOSTS.iter().map(ToString::to_string).collect())
}

#[async_trait]
impl IrevApi for HttpIrevClient {
    async fn get_election_types(&self) -> Result<Vec<ElectionType>, IrevApiError> {
        self.request(Endpoint::ElectionTypes).await
    }

    async fn get_elections(&self, election_type: &str) -> Result<Vec<Election>, IrevApiError> {
        self.request(Endpoint::Elections { election_type }).await
    }

    async fn get_election(&self, election: &str) -> Result<Election, IrevApiError> {
        self.request(Endpoint::Election { election }).await
    }

    async fn get_election_stats(&self, election: &str) -> Result<ElectionPollStats, IrevApiError> {
        let raw: RawPollStats = self.request(Endpoint::ElectionStats { election }).await?;
        Ok(raw.into())
    }

    async fn get_lgas_by_state(
        &self,
        election: &str,
        state_id: u32,
    ) -> Result<Vec<LgaApiResult>, IrevApiError> {
        let endpoint = Endpoint::lgas_by_state(election, state_id)?;
        self.request(endpoint).await
    }

    async fn get_lga(&self, election: &str, lga: &str) -> Result<LgaApiResult, IrevApiError> {
        self.request(Endpoint::Lga { election, lga }).await
    }

    async fn get_polling_units_by_ward(
        &self,
        election: &str,
        ward: &str,
    ) -> Result<Vec<PUApiResult>, IrevApiError> {
        self.request(Endpoint::PollingUnitsByWard { election, ward })
            .await
    }

    async fn get_polling_unit(
        &self,
        election: &str,
        polling_unit: &str,
    ) -> Result<PUApiResult, IrevApiError> {
        self.request(Endpoint::PollingUnit {
            election,
            polling_unit,
        })
        .await
    }
}


#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{
        Election, ElectionPollStats, ElectionType, Endpoint, IrevApi, IrevApiError, LgaApiResult,
        PUApiResult,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    type Slot<T> = Mutex<Option<Result<T, IrevApiError>>>;

    /// Mock implementation of `IrevApi` for unit tests.
    ///
    /// Configure responses with `set_*_result` methods; each result is handed
    /// out once. Unset list operations return an empty list, unset single
    /// lookups return `IrevApiError::Validation`. Every call is recorded as
    /// `"operation(arg, ...)"` and available through `calls()`.
    #[derive(Default)]
    pub struct MockIrevClient {
        election_types: Slot<Vec<ElectionType>>,
        elections: Slot<Vec<Election>>,
        election: Slot<Election>,
        election_stats: Slot<ElectionPollStats>,
        lgas_by_state: Slot<Vec<LgaApiResult>>,
        lga: Slot<LgaApiResult>,
        polling_units_by_ward: Slot<Vec<PUApiResult>>,
        polling_unit: Slot<PUApiResult>,
        calls: Mutex<Vec<String>>,
    }

    impl MockIrevClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_election_types_result(&self, result: Result<Vec<ElectionType>, IrevApiError>) {
            *self.election_types.lock().unwrap() = Some(result);
        }

        pub fn set_elections_result(&self, result: Result<Vec<Election>, IrevApiError>) {
            *self.elections.lock().unwrap() = Some(result);
        }

        pub fn set_election_result(&self, result: Result<Election, IrevApiError>) {
            *self.election.lock().unwrap() = Some(result);
        }

        pub fn set_election_stats_result(&self, result: Result<ElectionPollStats, IrevApiError>) {
            *self.election_stats.lock().unwrap() = Some(result);
        }

        pub fn set_lgas_by_state_result(&self, result: Result<Vec<LgaApiResult>, IrevApiError>) {
            *self.lgas_by_state.lock().unwrap() = Some(result);
        }

        pub fn set_lga_result(&self, result: Result<LgaApiResult, IrevApiError>) {
            *self.lga.lock().unwrap() = Some(result);
        }

        pub fn set_polling_units_by_ward_result(
            &self,
            result: Result<Vec<PUApiResult>, IrevApiError>,
        ) {
            *self.polling_units_by_ward.lock().unwrap() = Some(result);
        }

        pub fn set_polling_unit_result(&self, result: Result<PUApiResult, IrevApiError>) {
            *self.polling_unit.lock().unwrap() = Some(result);
        }

        /// Every call made so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    fn take_list<T>(slot: &Slot<Vec<T>>) -> Result<Vec<T>, IrevApiError> {
        slot.lock().unwrap().take().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn take_one<T>(slot: &Slot<T>, what: &str) -> Result<T, IrevApiError> {
        slot.lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(IrevApiError::Validation(format!("no mock {what} set"))))
    }

    #[async_trait]
    impl IrevApi for MockIrevClient {
        async fn get_election_types(&self) -> Result<Vec<ElectionType>, IrevApiError> {
            self.record("get_election_types()".to_string());
            take_list(&self.election_types)
        }

        async fn get_elections(&self, election_type: &str) -> Result<Vec<Election>, IrevApiError> {
            self.record(format!("get_elections({election_type})"));
            take_list(&self.elections)
        }

        async fn get_election(&self, election: &str) -> Result<Election, IrevApiError> {
            self.record(format!("get_election({election})"));
            take_one(&self.election, "election")
        }

        async fn get_election_stats(
            &self,
            election: &str,
        ) -> Result<ElectionPollStats, IrevApiError> {
            self.record(format!("get_election_stats({election})"));
            take_one(&self.election_stats, "election stats")
        }

        async fn get_lgas_by_state(
            &self,
            election: &str,
            state_id: u32,
        ) -> Result<Vec<LgaApiResult>, IrevApiError> {
            self.record(format!("get_lgas_by_state({election}, {state_id})"));
            Endpoint::lgas_by_state(election, state_id)?;
            take_list(&self.lgas_by_state)
        }

        async fn get_lga(&self, election: &str, lga: &str) -> Result<LgaApiResult, IrevApiError> {
            self.record(format!("get_lga({election}, {lga})"));
            take_one(&self.lga, "lga")
        }

        async fn get_polling_units_by_ward(
            &self,
            election: &str,
            ward: &str,
        ) -> Result<Vec<PUApiResult>, IrevApiError> {
            self.record(format!("get_polling_units_by_ward({election}, {ward})"));
            take_list(&self.polling_units_by_ward)
        }

        async fn get_polling_unit(
            &self,
            election: &str,
            polling_unit: &str,
        ) -> Result<PUApiResult, IrevApiError> {
            self.record(format!("get_polling_unit({election}, {polling_unit})"));
            take_one(&self.polling_unit, "polling unit")
        }
    }
}
