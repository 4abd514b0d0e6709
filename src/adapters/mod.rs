//! Adapters layer: Concrete implementations of ports.
//!
//! - `http`: reqwest client for the remote prediction service
//! - `sanitize`: health-data filtering for logs

pub mod http;
pub mod sanitize;

pub use http::HttpPredictionService;
