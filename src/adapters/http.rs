//! HTTP adapter for the prediction service.
//!
//! Posts the survey as JSON to a fixed endpoint and reads back
//! `{"prediction": "<label>"}`.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{PredictionRequest, PredictionResponse};
use crate::ports::{PredictionError, PredictionService};

/// Prediction service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    http: Client,
    endpoint: String,
}

impl HttpPredictionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<String, PredictionError> {
        tracing::info!(endpoint = %self.endpoint, "Submitting survey for prediction");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Prediction service rejected request");
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body: PredictionResponse = response.json().await.map_err(map_reqwest_error)?;
        tracing::info!(label = %body.prediction, "Prediction received");
        Ok(body.prediction)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> PredictionError {
    if let Some(status) = e.status() {
        PredictionError::Status(status.as_u16())
    } else if e.is_decode() {
        PredictionError::Decode(e.to_string())
    } else {
        PredictionError::Transport(e.to_string())
    }
}
