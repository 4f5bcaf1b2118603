//! Entry points for hotel and activity lookups.
//!
//! [`TravelService::get_hotels`] and [`TravelService::get_activities`] never
//! fail: a disabled integration, an exhausted fetch, or an empty filtered
//! result all resolve to the static fallback tables.

use serde::Serialize;
use tripwise_core::{Activity, AppConfig, Coordinate, Hotel};

use crate::activities::{find_activity_center, normalize_activities};
use crate::api::TravelApi;
use crate::error::TravelError;
use crate::fallback::{fallback_activities, fallback_hotels};
use crate::fetch::RetryingFetcher;
use crate::hotels::{normalize_hotels, result_items};
use crate::retry::{Sleeper, TokioSleeper};

/// Travel-data settings projected from [`AppConfig`].
#[derive(Clone)]
pub struct TravelSettings {
    /// `None` when the live integration is switched off or has no key.
    pub api_key: Option<String>,
    pub api_host: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl TravelSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config
                .rapidapi_key
                .clone()
                .filter(|_| config.live_travel_enabled()),
            api_host: config.rapidapi_host.clone(),
            base_url: config.rapidapi_base_url.clone(),
            request_timeout_secs: config.travel_request_timeout_secs,
        }
    }
}

impl std::fmt::Debug for TravelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravelSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Where a result list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

/// A result list tagged with its [`DataSource`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub items: Vec<T>,
}

impl<T> Sourced<T> {
    fn live(items: Vec<T>) -> Self {
        Self {
            source: DataSource::Live,
            items,
        }
    }

    fn fallback(items: Vec<T>) -> Self {
        Self {
            source: DataSource::Fallback,
            items,
        }
    }
}

pub struct TravelService<S = TokioSleeper> {
    api: Option<TravelApi<S>>,
}

impl TravelService<TokioSleeper> {
    /// # Errors
    ///
    /// Returns [`TravelError`] if the HTTP client, base URL or auth headers
    /// cannot be built. Never fails when the live integration is disabled.
    pub fn new(settings: &TravelSettings) -> Result<Self, TravelError> {
        Self::with_sleeper(settings, TokioSleeper)
    }

    /// A service that never touches the network.
    #[must_use]
    pub fn fallback_only() -> Self {
        Self { api: None }
    }
}

impl<S: Sleeper> TravelService<S> {
    /// # Errors
    ///
    /// See [`TravelService::new`].
    pub fn with_sleeper(settings: &TravelSettings, sleeper: S) -> Result<Self, TravelError> {
        let Some(api_key) = settings.api_key.as_deref() else {
            return Ok(Self { api: None });
        };
        let fetcher = RetryingFetcher::with_sleeper(settings.request_timeout_secs, sleeper)?;
        let api = TravelApi::new(fetcher, &settings.base_url, api_key, &settings.api_host)?;
        Ok(Self { api: Some(api) })
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.api.is_some()
    }

    /// Up to `limit` hotels for `destination`, live when possible.
    pub async fn get_hotels(&self, destination: &str, limit: usize) -> Vec<Hotel> {
        self.search_hotels(destination, limit).await.items
    }

    /// Up to `limit` activities for `destination`, live when possible.
    pub async fn get_activities(&self, destination: &str, limit: usize) -> Vec<Activity> {
        self.search_activities(destination, limit).await.items
    }

    /// Like [`TravelService::get_hotels`] but reports the [`DataSource`].
    pub async fn search_hotels(&self, destination: &str, limit: usize) -> Sourced<Hotel> {
        let Some(api) = &self.api else {
            tracing::info!(destination, "live travel API disabled, using fallback hotels");
            return Sourced::fallback(fallback_hotels(limit));
        };

        let payload = match api.search_locations(destination).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(destination, error = %err, "hotel search failed, using fallback hotels");
                return Sourced::fallback(fallback_hotels(limit));
            }
        };

        let hotels = normalize_hotels(result_items(&payload), limit);
        if hotels.is_empty() {
            tracing::warn!(destination, "no hotels survived filtering, using fallback hotels");
            return Sourced::fallback(fallback_hotels(limit));
        }
        tracing::info!(destination, count = hotels.len(), "normalized live hotels");
        Sourced::live(hotels)
    }

    /// Like [`TravelService::get_activities`] but reports the [`DataSource`].
    pub async fn search_activities(&self, destination: &str, limit: usize) -> Sourced<Activity> {
        let Some(api) = &self.api else {
            tracing::info!(destination, "live travel API disabled, using fallback activities");
            return Sourced::fallback(fallback_activities(limit));
        };

        let payload = match api.search_attractions(destination).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(destination, error = %err, "activity search failed, using fallback activities");
                return Sourced::fallback(fallback_activities(limit));
            }
        };

        let items = result_items(&payload);
        let center = match find_activity_center(items) {
            Some(center) => Some(center),
            None => self.borrow_hotel_center(destination).await,
        };

        let activities = normalize_activities(items, destination, center, limit);
        if activities.is_empty() {
            tracing::warn!(destination, "no activities survived filtering, using fallback activities");
            return Sourced::fallback(fallback_activities(limit));
        }
        tracing::info!(destination, count = activities.len(), "normalized live activities");
        Sourced::live(activities)
    }

    /// Coordinates of the first live hotel, used as the activity anchor when
    /// the attraction results carry none. Fallback hotels are never borrowed.
    async fn borrow_hotel_center(&self, destination: &str) -> Option<Coordinate> {
        let hotels = self.search_hotels(destination, 1).await;
        let center = match hotels.source {
            DataSource::Live => hotels.items.first().map(|hotel| hotel.coordinates),
            DataSource::Fallback => None,
        };
        tracing::debug!(destination, borrowed = center.is_some(), "activity center from hotels");
        center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> TravelSettings {
        TravelSettings {
            api_key: api_key.map(str::to_string),
            api_host: "travel.example".to_string(),
            base_url: "https://travel.example".to_string(),
            request_timeout_secs: 8,
        }
    }

    #[test]
    fn missing_key_builds_fallback_only_service() {
        let service = TravelService::new(&settings(None)).unwrap();
        assert!(!service.is_live());
    }

    #[test]
    fn key_builds_live_service() {
        let service = TravelService::new(&settings(Some("k"))).unwrap();
        assert!(service.is_live());
    }

    #[test]
    fn invalid_base_url_fails_construction() {
        let mut s = settings(Some("k"));
        s.base_url = "::not a url::".to_string();
        assert!(matches!(
            TravelService::new(&s),
            Err(TravelError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", settings(Some("secret-key")));
        assert!(!rendered.contains("secret-key"));
    }

    #[tokio::test]
    async fn disabled_service_returns_fallback_tables() {
        let service = TravelService::fallback_only();
        for limit in [0, 1, 3, 5, 30] {
            let hotels = service.search_hotels("Anywhere", limit).await;
            assert_eq!(hotels.source, DataSource::Fallback);
            assert_eq!(hotels.items, fallback_hotels(limit));
            assert_eq!(hotels.items.len(), limit.min(5));

            let activities = service.get_activities("Anywhere", limit).await;
            assert_eq!(activities, fallback_activities(limit));
        }
    }
}
