//! Client for the Travel Advisor search endpoints on RapidAPI.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Url;

use crate::error::{FetchError, TravelError};
use crate::fetch::RetryingFetcher;
use crate::retry::{Sleeper, TokioSleeper};

/// Raw candidates requested per search, independent of the caller's limit,
/// so filtering has room for attrition.
pub const UPSTREAM_LIMIT: usize = 30;

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

pub struct TravelApi<S = TokioSleeper> {
    fetcher: RetryingFetcher<S>,
    locations_url: Url,
    attractions_url: Url,
    headers: HeaderMap,
}

impl<S: Sleeper> TravelApi<S> {
    /// # Errors
    ///
    /// Returns [`TravelError::InvalidBaseUrl`] if `base_url` does not parse and
    /// [`TravelError::InvalidHeader`] if the key or host is not a valid
    /// header value.
    pub fn new(
        fetcher: RetryingFetcher<S>,
        base_url: &str,
        api_key: &str,
        api_host: &str,
    ) -> Result<Self, TravelError> {
        // Trailing slash so `join` appends instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| TravelError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let root = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let locations_url = root
            .join("locations/search")
            .map_err(|e| invalid(e.to_string()))?;
        let attractions_url = root
            .join("attractions/search")
            .map_err(|e| invalid(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(KEY_HEADER, header_value(KEY_HEADER, api_key)?);
        headers.insert(HOST_HEADER, header_value(HOST_HEADER, api_host)?);

        Ok(Self {
            fetcher,
            locations_url,
            attractions_url,
            headers,
        })
    }

    /// `GET locations/search` for `destination`.
    ///
    /// # Errors
    ///
    /// Propagates the [`FetchError`] from the retrying fetcher.
    pub async fn search_locations(
        &self,
        destination: &str,
    ) -> Result<serde_json::Value, FetchError> {
        let url = Self::build_url(&self.locations_url, destination);
        self.fetcher.fetch(&url, &self.headers).await
    }

    /// `GET attractions/search` for `"{destination} attractions"`.
    ///
    /// # Errors
    ///
    /// Propagates the [`FetchError`] from the retrying fetcher.
    pub async fn search_attractions(
        &self,
        destination: &str,
    ) -> Result<serde_json::Value, FetchError> {
        let url = Self::build_url(
            &self.attractions_url,
            &format!("{destination} attractions"),
        );
        self.fetcher.fetch(&url, &self.headers).await
    }

    fn build_url(endpoint: &Url, query: &str) -> Url {
        let mut url = endpoint.clone();
        {
            let limit = UPSTREAM_LIMIT.to_string();
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            pairs.append_pair("limit", &limit);
            pairs.append_pair("offset", "0");
            pairs.append_pair("units", "km");
            pairs.append_pair("currency", "INR");
            pairs.append_pair("sort", "relevance");
            pairs.append_pair("lang", "en_US");
        }
        url
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, TravelError> {
    HeaderValue::from_str(value).map_err(|e| TravelError::InvalidHeader {
        name,
        reason: e.to_string(),
    })
}
