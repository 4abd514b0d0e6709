//! # Sleepwise
//!
//! Terminal sleep health assessment.
//!
//! This crate provides:
//! - A lifestyle/health survey with live field validation
//! - Submission to a remote sleep-disorder prediction service
//! - Result guidance and a sleep-duration comparison chart
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Survey record, validation, prediction labels, recommendations
//! - `ports`: Trait for the prediction service
//! - `adapters`: HTTP client and log sanitization
//! - `application`: Assessment controller (session state machine)
//! - `tui`: Terminal user interface
//! - `config`: Runtime settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::{AssessmentController, AssessmentPhase};
pub use config::Settings;
pub use domain::{validate, ErrorSet, Field, Prediction, SurveyRecord};
pub use ports::{PredictionError, PredictionService};

/// Result type for Sleepwise operations
pub type Result<T> = std::result::Result<T, SleepwiseError>;

/// Main error type for Sleepwise
#[derive(Debug, thiserror::Error)]
pub enum SleepwiseError {
    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictionError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
