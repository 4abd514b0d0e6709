//! Field-level validation of survey records.
//!
//! `validate` is pure and total: every rule is evaluated independently and
//! malformed numeric input is reported, never raised.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::survey::{parse_number, Field, SurveyRecord};

static BLOOD_PRESSURE: OnceLock<Regex> = OnceLock::new();

fn blood_pressure_pattern() -> &'static Regex {
    BLOOD_PRESSURE.get_or_init(|| Regex::new(r"^[0-9]{2,3}/[0-9]{2,3}$").expect("Valid regex"))
}

pub const GENDER_MESSAGE: &str = "Please select gender.";
pub const AGE_MESSAGE: &str = "Please enter a valid age above 0.";
pub const OCCUPATION_MESSAGE: &str = "Please select occupation.";
pub const SLEEP_DURATION_MESSAGE: &str = "Please enter a sleep duration greater than 0.";
pub const BLOOD_PRESSURE_MESSAGE: &str =
    "Enter valid blood pressure in systolic/diastolic format (e.g., 120/80).";
pub const DAILY_STEPS_MESSAGE: &str = "Enter valid number of steps.";

/// Fields currently failing validation, with their messages.
///
/// Absence of a field means it passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(BTreeMap<Field, &'static str>);

impl ErrorSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Validate a survey record.
#[must_use]
pub fn validate(record: &SurveyRecord) -> ErrorSet {
    let mut errors = ErrorSet::default();

    if record.gender.is_none() {
        errors.insert(Field::Gender, GENDER_MESSAGE);
    }
    if !parse_number(&record.age).is_some_and(|age| age >= 1.0) {
        errors.insert(Field::Age, AGE_MESSAGE);
    }
    if record.occupation.is_none() {
        errors.insert(Field::Occupation, OCCUPATION_MESSAGE);
    }
    if !parse_number(&record.sleep_duration).is_some_and(|hours| hours > 0.0) {
        errors.insert(Field::SleepDuration, SLEEP_DURATION_MESSAGE);
    }
    if !blood_pressure_pattern().is_match(&record.blood_pressure) {
        errors.insert(Field::BloodPressure, BLOOD_PRESSURE_MESSAGE);
    }
    if !parse_number(&record.daily_steps).is_some_and(|steps| steps >= 0.0) {
        errors.insert(Field::DailySteps, DAILY_STEPS_MESSAGE);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [Field; 6] = [
        Field::Gender,
        Field::Age,
        Field::Occupation,
        Field::SleepDuration,
        Field::BloodPressure,
        Field::DailySteps,
    ];

    #[test]
    fn test_sample_record_is_valid() {
        let errors = validate(&SurveyRecord::sample());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_default_record_flags_every_required_field() {
        let errors = validate(&SurveyRecord::default());
        assert_eq!(errors.len(), REQUIRED.len());
        for field in REQUIRED {
            assert!(errors.contains(field), "{field} should be flagged");
        }
        assert_eq!(errors.get(Field::Gender), Some(GENDER_MESSAGE));
    }

    #[test]
    fn test_each_required_field_flagged_when_cleared() {
        for field in REQUIRED {
            let mut record = SurveyRecord::sample();
            record.set(field, "");
            let errors = validate(&record);
            assert!(errors.contains(field), "{field} should be flagged when empty");
            assert_eq!(errors.len(), 1, "rules must be independent");
        }
    }

    #[test]
    fn test_numeric_bounds() {
        let mut record = SurveyRecord::sample();
        record.set(Field::Age, "0");
        assert!(validate(&record).contains(Field::Age));
        record.set(Field::Age, "1");
        assert!(!validate(&record).contains(Field::Age));

        record.set(Field::SleepDuration, "0");
        assert!(validate(&record).contains(Field::SleepDuration));
        record.set(Field::SleepDuration, "0.1");
        assert!(!validate(&record).contains(Field::SleepDuration));

        record.set(Field::DailySteps, "-1");
        assert!(validate(&record).contains(Field::DailySteps));
        record.set(Field::DailySteps, "0");
        assert!(!validate(&record).contains(Field::DailySteps));
    }

    #[test]
    fn test_non_numeric_text_is_invalid() {
        let mut record = SurveyRecord::sample();
        record.set(Field::Age, "twenty");
        record.set(Field::SleepDuration, "7h");
        record.set(Field::DailySteps, "lots");
        let errors = validate(&record);
        assert!(errors.contains(Field::Age));
        assert!(errors.contains(Field::SleepDuration));
        assert!(errors.contains(Field::DailySteps));
    }

    #[test]
    fn test_blood_pressure_pattern() {
        let mut record = SurveyRecord::sample();
        for bad in [
            "12080", "1/80", "120/8", "1200/80", "120/80 ", "a20/80", "120-80", "١٢٠/٨٠",
        ] {
            record.set(Field::BloodPressure, bad);
            assert!(
                validate(&record).contains(Field::BloodPressure),
                "{bad:?} should be rejected"
            );
        }
        for good in ["120/80", "90/60", "999/10"] {
            record.set(Field::BloodPressure, good);
            assert!(
                !validate(&record).contains(Field::BloodPressure),
                "{good:?} should be accepted"
            );
        }
    }

    #[test]
    fn test_unvalidated_fields_never_error() {
        let mut record = SurveyRecord::sample();
        record.set(Field::BmiCategory, "");
        record.set(Field::HeartRate, "nope");
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut record = SurveyRecord::sample();
        record.set(Field::Age, "0");
        assert_eq!(validate(&record), validate(&record));
    }
}
