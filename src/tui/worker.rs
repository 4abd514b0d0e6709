//! Background prediction worker.
//!
//! Runs the prediction request on a tokio runtime so the TUI loop keeps
//! drawing and accepting edits while the service responds.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::domain::PredictionRequest;
use crate::ports::{PredictionError, PredictionService};

/// Handle to a running prediction task.
///
/// Dropping the handle aborts the task.
pub struct PredictionWorkerHandle {
    outcome_rx: oneshot::Receiver<Result<String, PredictionError>>,
    task: JoinHandle<()>,
}

impl PredictionWorkerHandle {
    /// Non-blocking check for the outcome.
    ///
    /// A task that ended without reporting (panic or abort) is reported as
    /// `PredictionError::Interrupted`, so every spawned request settles.
    #[must_use]
    pub fn try_recv(&mut self) -> Option<Result<String, PredictionError>> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(PredictionError::Interrupted)),
        }
    }

    /// Wait for the outcome.
    pub async fn outcome(mut self) -> Result<String, PredictionError> {
        (&mut self.outcome_rx)
            .await
            .unwrap_or(Err(PredictionError::Interrupted))
    }
}

impl Drop for PredictionWorkerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns prediction requests in the background.
pub struct PredictionWorker;

impl PredictionWorker {
    /// Spawn one bounded prediction request.
    pub fn spawn(
        runtime: &Handle,
        service: Arc<dyn PredictionService>,
        request: PredictionRequest,
        timeout: Duration,
    ) -> PredictionWorkerHandle {
        let (tx, rx) = oneshot::channel();

        let task = runtime.spawn(async move {
            let outcome = match tokio::time::timeout(timeout, service.predict(&request)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(?timeout, "Prediction request timed out");
                    Err(PredictionError::Timeout(timeout))
                }
            };
            let _ = tx.send(outcome);
        });

        PredictionWorkerHandle {
            outcome_rx: rx,
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedLabel(&'static str);

    #[async_trait]
    impl PredictionService for FixedLabel {
        async fn predict(&self, _request: &PredictionRequest) -> Result<String, PredictionError> {
            Ok(self.0.to_string())
        }
    }

    struct Stalled;

    #[async_trait]
    impl PredictionService for Stalled {
        async fn predict(&self, _request: &PredictionRequest) -> Result<String, PredictionError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("late".to_string())
        }
    }

    struct Panicking;

    #[async_trait]
    impl PredictionService for Panicking {
        async fn predict(&self, _request: &PredictionRequest) -> Result<String, PredictionError> {
            panic!("service blew up");
        }
    }

    fn sample_request() -> PredictionRequest {
        PredictionRequest::from_record(&crate::domain::SurveyRecord::sample()).expect("valid")
    }

    #[tokio::test]
    async fn test_worker_delivers_label() {
        let handle = PredictionWorker::spawn(
            &Handle::current(),
            Arc::new(FixedLabel("Insomnia")),
            sample_request(),
            Duration::from_secs(5),
        );
        assert_eq!(handle.outcome().await.expect("label"), "Insomnia");
    }

    #[tokio::test]
    async fn test_worker_times_out() {
        let handle = PredictionWorker::spawn(
            &Handle::current(),
            Arc::new(Stalled),
            sample_request(),
            Duration::from_millis(20),
        );
        assert!(matches!(handle.outcome().await, Err(PredictionError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_panicking_task_settles_as_interrupted() {
        let mut handle = PredictionWorker::spawn(
            &Handle::current(),
            Arc::new(Panicking),
            sample_request(),
            Duration::from_secs(5),
        );
        let outcome = loop {
            if let Some(outcome) = handle.try_recv() {
                break outcome;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        };
        assert!(matches!(outcome, Err(PredictionError::Interrupted)));
    }
}
