//! Recommended sleep duration by age, and the comparison chart model.

use super::survey::{parse_number, SurveyRecord};
use super::validation::validate;

/// Age bracket used for sleep recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Under18,
    Adult,
    Senior,
}

impl AgeBand {
    #[must_use]
    pub fn from_age(age: f64) -> Self {
        if age < 18.0 {
            Self::Under18
        } else if age <= 64.0 {
            Self::Adult
        } else {
            Self::Senior
        }
    }

    #[must_use]
    pub fn age_label(&self) -> &'static str {
        match self {
            Self::Under18 => "<18",
            Self::Adult => "18-64",
            Self::Senior => "65+",
        }
    }

    /// Recommended nightly sleep for this bracket.
    #[must_use]
    pub fn recommended_range(&self) -> &'static str {
        match self {
            Self::Under18 => "8-10 hrs",
            Self::Adult => "7-9 hrs",
            Self::Senior => "7-8 hrs",
        }
    }

    /// Width of the "recommended" bar, in percent.
    #[must_use]
    pub fn bar_percent(&self) -> u16 {
        match self {
            Self::Under18 => 90,
            Self::Adult => 80,
            Self::Senior => 75,
        }
    }
}

/// Width of the "your sleep" bar: 10% per hour, capped at 100%.
#[must_use]
pub fn sleep_bar_percent(hours: f64) -> u16 {
    (hours * 10.0).clamp(0.0, 100.0) as u16
}

/// Data behind the "your sleep vs. recommended" chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepComparison {
    pub band: AgeBand,
    pub sleep_hours: f64,
    pub sleep_percent: u16,
    pub recommended_percent: u16,
}

impl SleepComparison {
    /// Build the chart for a record.
    ///
    /// Only available while the record is valid and reports a positive sleep
    /// duration.
    #[must_use]
    pub fn for_record(record: &SurveyRecord) -> Option<Self> {
        if !validate(record).is_empty() {
            return None;
        }
        let age = parse_number(&record.age)?;
        let sleep_hours = parse_number(&record.sleep_duration).filter(|h| *h > 0.0)?;
        let band = AgeBand::from_age(age);

        Some(Self {
            band,
            sleep_hours,
            sleep_percent: sleep_bar_percent(sleep_hours),
            recommended_percent: band.bar_percent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_age_bands() {
        assert_eq!(AgeBand::from_age(17.0), AgeBand::Under18);
        assert_eq!(AgeBand::from_age(18.0), AgeBand::Adult);
        assert_eq!(AgeBand::from_age(64.0), AgeBand::Adult);
        assert_eq!(AgeBand::from_age(65.0), AgeBand::Senior);
        assert_eq!(AgeBand::Under18.recommended_range(), "8-10 hrs");
        assert_eq!(AgeBand::Senior.bar_percent(), 75);
    }

    #[test]
    fn test_sleep_bar_is_capped() {
        assert_eq!(sleep_bar_percent(7.0), 70);
        assert_eq!(sleep_bar_percent(6.5), 65);
        assert_eq!(sleep_bar_percent(12.0), 100);
    }

    #[test]
    fn test_comparison_for_teenager() {
        let mut record = SurveyRecord::sample();
        record.set(Field::Age, "17");
        let comparison = SleepComparison::for_record(&record).expect("chart");
        assert_eq!(comparison.band.recommended_range(), "8-10 hrs");
        assert_eq!(comparison.recommended_percent, 90);
        assert_eq!(comparison.sleep_percent, 70);
    }

    #[test]
    fn test_comparison_requires_valid_record() {
        let mut record = SurveyRecord::sample();
        record.set(Field::BloodPressure, "12080");
        assert!(SleepComparison::for_record(&record).is_none());

        let mut record = SurveyRecord::sample();
        record.set(Field::SleepDuration, "0");
        assert!(SleepComparison::for_record(&record).is_none());
    }
}
