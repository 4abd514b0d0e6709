//! Prediction service port: Trait for the remote sleep-disorder classifier.
//!
//! The model itself lives outside this crate; this trait is the only thing
//! the application knows about it.

use async_trait::async_trait;

use crate::domain::PredictionRequest;

/// Failure of a single prediction attempt.
///
/// Every variant is terminal for that attempt: the caller surfaces it and
/// never retries automatically.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Could not reach prediction service: {0}")]
    Transport(String),

    #[error("Prediction service responded with HTTP {0}")]
    Status(u16),

    #[error("Malformed prediction response: {0}")]
    Decode(String),

    #[error("Prediction request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Prediction task ended without a result")]
    Interrupted,
}

/// Trait for classifying a survey into a sleep-disorder label.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Submit one survey and return the raw label from the service.
    ///
    /// # Errors
    /// Returns `PredictionError` on transport failure, non-success status,
    /// or an undecodable reply.
    async fn predict(&self, request: &PredictionRequest) -> Result<String, PredictionError>;
}
