//! Domain layer: Core types for the sleep assessment.
//!
//! Everything in here is pure and synchronous:
//! - `survey`: the survey record and its fields
//! - `validation`: field-level rules producing an `ErrorSet`
//! - `prediction`: service labels, guidance blocks, wire payload
//! - `recommendation`: age-based sleep bands and the comparison chart

mod prediction;
mod recommendation;
mod survey;
mod validation;

pub use prediction::{Guidance, GuidanceTone, Prediction, PredictionRequest, PredictionResponse};
pub use recommendation::{sleep_bar_percent, AgeBand, SleepComparison};
pub use survey::{parse_number, BmiCategory, Field, FieldKind, Gender, Occupation, SurveyRecord};
pub use validation::{validate, ErrorSet};
