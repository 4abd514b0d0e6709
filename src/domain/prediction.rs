//! Prediction result types and the service wire format.

use serde::{Deserialize, Serialize};

use super::survey::{parse_number, SurveyRecord};
use super::validation::{validate, ErrorSet};

/// Sleep disorder classification returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// Service reported no disorder (wire label "None")
    NoDisorder,
    Insomnia,
    SleepApnea,
    /// Any label outside the known set, kept verbatim
    Other(String),
}

impl Prediction {
    /// Interpret a raw service label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "None" | "No disorder" => Self::NoDisorder,
            "Insomnia" => Self::Insomnia,
            "Sleep Apnea" => Self::SleepApnea,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label as shown to the user.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::NoDisorder => "No disorder",
            Self::Insomnia => "Insomnia",
            Self::SleepApnea => "Sleep Apnea",
            Self::Other(label) => label,
        }
    }

    /// Fixed guidance block for known labels.
    #[must_use]
    pub fn guidance(&self) -> Option<Guidance> {
        match self {
            Self::NoDisorder => Some(Guidance {
                tone: GuidanceTone::Positive,
                heading: "No Sleep Disorder Detected",
                summary: Some(
                    "Great job maintaining healthy sleep habits. Keep up your good routine and continue prioritizing your sleep.",
                ),
                tips: &[],
            }),
            Self::Insomnia => Some(Guidance {
                tone: GuidanceTone::Caution,
                heading: "Insomnia - Difficulty falling or staying asleep.",
                summary: None,
                tips: &[
                    "Maintain a consistent sleep schedule.",
                    "Avoid screens before bedtime.",
                    "Try deep breathing or relaxation techniques.",
                ],
            }),
            Self::SleepApnea => Some(Guidance {
                tone: GuidanceTone::Alert,
                heading: "Sleep Apnea - Interrupted breathing during sleep.",
                summary: None,
                tips: &[
                    "Consider a medical consultation or sleep study.",
                    "Maintain a healthy weight.",
                    "Avoid alcohol and smoking before bedtime.",
                ],
            }),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a guidance block, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceTone {
    Positive,
    Caution,
    Alert,
}

/// Static advice attached to a known prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    pub tone: GuidanceTone,
    pub heading: &'static str,
    pub summary: Option<&'static str>,
    pub tips: &'static [&'static str],
}

/// JSON payload posted to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub gender: String,
    pub age: serde_json::Number,
    pub occupation: String,
    pub sleep_duration: serde_json::Number,
    pub quality_of_sleep: u16,
    pub activity_level: u16,
    pub stress_level: u16,
    pub bmi_category: String,
    pub blood_pressure: String,
    pub heart_rate: u16,
    pub daily_steps: serde_json::Number,
}

impl PredictionRequest {
    /// Build the payload from a submittable record.
    ///
    /// # Errors
    /// Returns the validation errors if the record is not submittable.
    pub fn from_record(record: &SurveyRecord) -> Result<Self, ErrorSet> {
        let errors = validate(record);
        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(gender), Some(occupation)) = (record.gender, record.occupation) else {
            return Err(errors);
        };
        let (Some(age), Some(sleep_duration), Some(daily_steps)) = (
            parse_number(&record.age).and_then(json_number),
            parse_number(&record.sleep_duration).and_then(json_number),
            parse_number(&record.daily_steps).and_then(json_number),
        ) else {
            return Err(errors);
        };

        Ok(Self {
            gender: gender.to_string(),
            age,
            occupation: occupation.to_string(),
            sleep_duration,
            quality_of_sleep: record.quality_of_sleep,
            activity_level: record.activity_level,
            stress_level: record.stress_level,
            bmi_category: record
                .bmi_category
                .map(|b| b.to_string())
                .unwrap_or_default(),
            blood_pressure: record.blood_pressure.clone(),
            heart_rate: record.heart_rate,
            daily_steps,
        })
    }
}

/// Integral values go over the wire as JSON integers, the rest as floats.
fn json_number(value: f64) -> Option<serde_json::Number> {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(serde_json::Number::from(value as i64))
    } else {
        serde_json::Number::from_f64(value)
    }
}

/// Successful reply from the prediction service.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_none_label_maps_to_no_disorder() {
        let prediction = Prediction::from_label("None");
        assert_eq!(prediction, Prediction::NoDisorder);
        assert_eq!(prediction.to_string(), "No disorder");
    }

    #[test]
    fn test_known_labels_select_guidance() {
        let insomnia = Prediction::from_label("Insomnia").guidance().expect("guidance");
        assert_eq!(insomnia.tone, GuidanceTone::Caution);
        assert_eq!(insomnia.tips.len(), 3);

        let apnea = Prediction::from_label("Sleep Apnea").guidance().expect("guidance");
        assert_eq!(apnea.tone, GuidanceTone::Alert);
        assert!(apnea.heading.starts_with("Sleep Apnea"));

        let healthy = Prediction::NoDisorder.guidance().expect("guidance");
        assert_eq!(healthy.tone, GuidanceTone::Positive);
        assert!(healthy.summary.is_some());
    }

    #[test]
    fn test_unknown_label_passes_through_without_guidance() {
        let prediction = Prediction::from_label("Narcolepsy");
        assert_eq!(prediction.label(), "Narcolepsy");
        assert!(prediction.guidance().is_none());

        // Labels are matched exactly.
        let prediction = Prediction::from_label("insomnia");
        assert_eq!(prediction, Prediction::Other("insomnia".to_string()));
        assert!(prediction.guidance().is_none());
    }

    #[test]
    fn test_request_uses_service_keys() {
        let request = PredictionRequest::from_record(&SurveyRecord::sample()).expect("valid");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "gender": "Male",
                "age": 25,
                "occupation": "Engineer",
                "sleepDuration": 7,
                "qualityOfSleep": 5,
                "activityLevel": 50,
                "stressLevel": 5,
                "bmiCategory": "Normal weight",
                "bloodPressure": "120/80",
                "heartRate": 70,
                "dailySteps": 5000,
            })
        );
    }

    #[test]
    fn test_request_keeps_fractional_sleep_and_empty_bmi() {
        let mut record = SurveyRecord::sample();
        record.set(Field::SleepDuration, "6.5");
        record.set(Field::BmiCategory, "");
        let request = PredictionRequest::from_record(&record).expect("valid");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["sleepDuration"], serde_json::json!(6.5));
        assert_eq!(json["bmiCategory"], serde_json::json!(""));
    }

    #[test]
    fn test_request_rejects_invalid_record() {
        let errors = PredictionRequest::from_record(&SurveyRecord::default())
            .expect_err("default record is incomplete");
        assert!(errors.contains(Field::Gender));
    }

    #[test]
    fn test_response_decodes() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"prediction":"Sleep Apnea","confidence":0.8}"#)
                .expect("decode");
        assert_eq!(response.prediction, "Sleep Apnea");
    }
}
