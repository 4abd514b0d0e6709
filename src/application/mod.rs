//! Application layer: Use cases and services.
//!
//! Orchestrates domain logic with the prediction port.

mod assessment;

pub use assessment::{AssessmentController, AssessmentPhase, PREDICTION_FAILED_ALERT};
