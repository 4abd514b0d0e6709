//! Assessment controller: Owns the survey session state.
//!
//! Reacts to field edits and submit events, keeps the error set current, and
//! tracks the single in-flight prediction. Network I/O is not done here; the
//! caller runs the request returned by [`AssessmentController::on_submit`] and
//! reports back through [`AssessmentController::on_settled`].

use crate::domain::{
    validate, ErrorSet, Field, Prediction, PredictionRequest, SleepComparison, SurveyRecord,
};
use crate::ports::PredictionError;

/// Notice shown when a prediction attempt fails.
pub const PREDICTION_FAILED_ALERT: &str = "Something went wrong while getting the prediction.";

/// Lifecycle of an assessment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    /// Fresh form, nothing touched yet
    Idle,
    /// User is editing fields
    Editing,
    /// A prediction request is in flight
    Submitting,
    /// Last attempt completed (with a result or a failure)
    Settled,
}

/// Session state for one assessment page.
#[derive(Debug)]
pub struct AssessmentController {
    record: SurveyRecord,
    errors: ErrorSet,
    phase: AssessmentPhase,
    result: Option<Prediction>,
    alert: Option<String>,
}

impl Default for AssessmentController {
    fn default() -> Self {
        Self::new(SurveyRecord::default())
    }
}

impl AssessmentController {
    /// Start a session from an initial record.
    ///
    /// Errors are not shown until the first edit or submit.
    #[must_use]
    pub fn new(record: SurveyRecord) -> Self {
        Self {
            record,
            errors: ErrorSet::default(),
            phase: AssessmentPhase::Idle,
            result: None,
            alert: None,
        }
    }

    #[must_use]
    pub fn record(&self) -> &SurveyRecord {
        &self.record
    }

    /// Errors as last recomputed.
    #[must_use]
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    #[must_use]
    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == AssessmentPhase::Submitting
    }

    /// Pending failure notice, if any.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Apply a field edit.
    ///
    /// Edits are accepted while a request is in flight; they only change the
    /// record, never the loading state.
    pub fn on_field_change(&mut self, field: Field, value: &str) {
        self.record.set(field, value);
        self.errors = validate(&self.record);

        if self.phase != AssessmentPhase::Submitting {
            self.phase = AssessmentPhase::Editing;
        }
    }

    /// Replace the whole record (e.g. sample data), as one edit.
    pub fn replace_record(&mut self, record: SurveyRecord) {
        self.record = record;
        self.errors = validate(&self.record);

        if self.phase != AssessmentPhase::Submitting {
            self.phase = AssessmentPhase::Editing;
        }
    }

    /// Submit is enabled when the record validates and nothing is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && validate(&self.record).is_empty()
    }

    /// Handle a submit event.
    ///
    /// Returns the payload to send, or `None` when the submit is discarded
    /// (validation errors or a request already in flight).
    pub fn on_submit(&mut self) -> Option<PredictionRequest> {
        self.errors = validate(&self.record);

        if self.is_loading() {
            tracing::debug!("Submit ignored: prediction already in flight");
            return None;
        }
        if !self.errors.is_empty() {
            tracing::debug!(invalid_fields = self.errors.len(), "Submit blocked by validation");
            self.phase = AssessmentPhase::Editing;
            return None;
        }

        let request = match PredictionRequest::from_record(&self.record) {
            Ok(request) => request,
            Err(errors) => {
                self.errors = errors;
                return None;
            }
        };

        self.phase = AssessmentPhase::Submitting;
        self.result = None;
        self.alert = None;
        Some(request)
    }

    /// Complete the in-flight request.
    ///
    /// Clears the loading state exactly once: a settle with no request in
    /// flight is ignored and returns `false`.
    pub fn on_settled(&mut self, outcome: Result<String, PredictionError>) -> bool {
        if self.phase != AssessmentPhase::Submitting {
            tracing::warn!("Dropping prediction outcome with no request in flight");
            return false;
        }
        self.phase = AssessmentPhase::Settled;

        match outcome {
            Ok(label) => {
                let prediction = Prediction::from_label(&label);
                tracing::info!(result = %prediction, "Assessment settled");
                self.result = Some(prediction);
            }
            Err(e) => {
                tracing::error!("Prediction failed: {}", e);
                self.result = None;
                self.alert = Some(PREDICTION_FAILED_ALERT.to_string());
            }
        }
        true
    }

    /// Result eligible for display: only until the next edit.
    #[must_use]
    pub fn displayed_result(&self) -> Option<&Prediction> {
        match self.phase {
            AssessmentPhase::Settled => self.result.as_ref(),
            _ => None,
        }
    }

    /// Sleep comparison chart, shown alongside a displayed result for a
    /// currently valid record.
    #[must_use]
    pub fn comparison(&self) -> Option<SleepComparison> {
        self.displayed_result()?;
        SleepComparison::for_record(&self.record)
    }

    /// Drive one complete submission against a service.
    ///
    /// Returns `None` if the submit was discarded.
    pub async fn submit_with<S>(&mut self, service: &S) -> Option<bool>
    where
        S: crate::ports::PredictionService + ?Sized,
    {
        let request = self.on_submit()?;
        let outcome = service.predict(&request).await;
        Some(self.on_settled(outcome))
    }
}
