pub mod activities;
pub mod api;
pub mod classify;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod geo;
pub mod hotels;
pub mod retry;
pub mod service;

pub use api::TravelApi;
pub use error::{FetchError, TravelError};
pub use fetch::RetryingFetcher;
pub use retry::{Sleeper, TokioSleeper};
pub use service::{DataSource, Sourced, TravelService, TravelSettings};
