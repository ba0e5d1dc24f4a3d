//! Digitransit GraphQL HTTP client.
//!
//! Sends the stop search and timetable queries and converts the responses
//! to domain types. Requests are made one at a time by the caller; the
//! client itself holds no state besides the connection pool.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{SearchTerm, StopId, Timetable};

use super::convert::{convert_stop_search, convert_timetable};
use super::error::DigitransitError;
use super::query;
use super::types::{
    GraphQlRequest, GraphQlResponse, StopSearchData, StopSearchVariables, TimetableData,
    TimetableVariables,
};

/// Default endpoint: the HSL routing API.
const DEFAULT_ENDPOINT: &str = "https://api.digitransit.fi/routing/v2/hsl/gtfs/v1";

/// Default number of stop-times requested per stop.
const DEFAULT_DEPARTURES: u16 = 10;

/// Longest response excerpt kept in parse errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the Digitransit client.
#[derive(Debug, Clone)]
pub struct DigitransitConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of upcoming departures to request per stop
    pub departures: u16,
}

impl DigitransitConfig {
    /// Create a config pointing at the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: 30,
            departures: DEFAULT_DEPARTURES,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the number of departures requested per stop.
    pub fn with_departures(mut self, n: u16) -> Self {
        self.departures = n;
        self
    }
}

impl Default for DigitransitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Digitransit routing API client.
#[derive(Debug, Clone)]
pub struct DigitransitClient {
    http: reqwest::Client,
    endpoint: String,
    departures: u16,
}

impl DigitransitClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DigitransitConfig) -> Result<Self, DigitransitError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
            departures: config.departures,
        })
    }

    /// Find stops whose name or number matches `term`.
    ///
    /// Returns the matching stop ids in the order the API ranks them. An
    /// empty list means nothing matched.
    pub async fn search_stops(&self, term: &SearchTerm) -> Result<Vec<StopId>, DigitransitError> {
        let variables = StopSearchVariables {
            name: term.as_str(),
        };
        let data: StopSearchData = self.post(query::STOP_SEARCH, variables).await?;
        let ids = convert_stop_search(&data)?;

        debug!(term = %term, matches = ids.len(), "stop search");
        Ok(ids)
    }

    /// Get a stop's metadata and upcoming departures.
    pub async fn timetable(&self, stop: &StopId) -> Result<Timetable, DigitransitError> {
        let variables = TimetableVariables {
            id: stop.as_str(),
            departures: self.departures,
        };
        let data: TimetableData = self.post(query::TIMETABLE, variables).await?;
        let timetable = convert_timetable(&data, stop)?;

        debug!(
            stop = %stop,
            departures = timetable.departures.len(),
            "timetable fetched"
        );
        Ok(timetable)
    }

    /// POST a GraphQL query and unwrap the `data` member of the response.
    async fn post<V, T>(&self, query: &'static str, variables: V) -> Result<T, DigitransitError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request = GraphQlRequest { query, variables };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Map a non-success HTTP status to a client error.
fn status_error(status: StatusCode, body: String) -> DigitransitError {
    if status == StatusCode::NOT_FOUND {
        return DigitransitError::NotFound;
    }

    DigitransitError::ApiError {
        status: status.as_u16(),
        message: body,
    }
}

/// Parse a GraphQL response body into its `data` member.
fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, DigitransitError> {
    let response: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|e| DigitransitError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })?;

    match response.data {
        Some(data) => Ok(data),
        None if !response.errors.is_empty() => Err(DigitransitError::GraphQl(
            response.errors.into_iter().map(|e| e.message).collect(),
        )),
        None => Err(DigitransitError::Json {
            message: "response has neither data nor errors".to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        }),
    }
}
