pub mod client;
pub mod error;
pub mod prompt;

pub use client::{SummaryClient, SummarySettings};
pub use error::SummaryError;
pub use prompt::default_summary;
