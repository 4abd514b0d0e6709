//! Survey record types for sleep disorder prediction.
//!
//! Fields mirror the lifestyle/health dataset the prediction service was
//! trained on. Keys returned by [`Field::key`] are the exact payload keys
//! expected by the service.

use zeroize::Zeroize;

/// Kind of input control backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Closed list of options (empty selection allowed)
    Choice(&'static [&'static str]),
    /// Free-form numeric or patterned text
    Text,
    /// Bounded integer slider, always holds a value
    Scale { min: u16, max: u16 },
}

/// One field of the survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Gender,
    Age,
    Occupation,
    SleepDuration,
    QualityOfSleep,
    ActivityLevel,
    StressLevel,
    BmiCategory,
    BloodPressure,
    HeartRate,
    DailySteps,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 11] = [
        Field::Gender,
        Field::Age,
        Field::Occupation,
        Field::SleepDuration,
        Field::QualityOfSleep,
        Field::ActivityLevel,
        Field::StressLevel,
        Field::BmiCategory,
        Field::BloodPressure,
        Field::HeartRate,
        Field::DailySteps,
    ];

    /// Payload key understood by the prediction service.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Occupation => "occupation",
            Self::SleepDuration => "sleepDuration",
            Self::QualityOfSleep => "qualityOfSleep",
            Self::ActivityLevel => "activityLevel",
            Self::StressLevel => "stressLevel",
            Self::BmiCategory => "bmiCategory",
            Self::BloodPressure => "bloodPressure",
            Self::HeartRate => "heartRate",
            Self::DailySteps => "dailySteps",
        }
    }

    /// Human-readable label for the form.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::Occupation => "Occupation",
            Self::SleepDuration => "Sleep Duration",
            Self::QualityOfSleep => "Quality of Sleep",
            Self::ActivityLevel => "Physical Activity Level",
            Self::StressLevel => "Stress Level",
            Self::BmiCategory => "BMI Category",
            Self::BloodPressure => "Blood Pressure",
            Self::HeartRate => "Heart Rate",
            Self::DailySteps => "Daily Steps",
        }
    }

    /// Short input hint shown while the field is empty.
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Gender | Self::Occupation | Self::BmiCategory => "◂ ▸ to select",
            Self::Age => "years",
            Self::SleepDuration => "hours (e.g. 7.5)",
            Self::QualityOfSleep => "1 - Very Poor, 10 - Excellent",
            Self::ActivityLevel => "1 - Low, 100 - High",
            Self::StressLevel => "1 - Low, 10 - High",
            Self::BloodPressure => "systolic/diastolic (e.g. 120/80)",
            Self::HeartRate => "bpm",
            Self::DailySteps => "steps per day",
        }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Gender => FieldKind::Choice(Gender::OPTIONS),
            Self::Occupation => FieldKind::Choice(Occupation::OPTIONS),
            Self::BmiCategory => FieldKind::Choice(BmiCategory::OPTIONS),
            Self::Age | Self::SleepDuration | Self::BloodPressure | Self::DailySteps => {
                FieldKind::Text
            }
            Self::QualityOfSleep | Self::StressLevel => FieldKind::Scale { min: 1, max: 10 },
            Self::ActivityLevel => FieldKind::Scale { min: 1, max: 100 },
            Self::HeartRate => FieldKind::Scale { min: 40, max: 140 },
        }
    }

    /// Look up a field by its payload key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

macro_rules! closed_choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Display strings, in menu order.
            pub const OPTIONS: &'static [&'static str] = &[$($text),+];

            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Parse an exact display string. Anything else is "no selection".
            #[must_use]
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_choice!(
    /// Self-reported gender.
    Gender {
        Male => "Male",
        Female => "Female",
    }
);

closed_choice!(
    /// Occupation, from the fixed list the model knows.
    Occupation {
        SoftwareEngineer => "Software Engineer",
        Doctor => "Doctor",
        SalesRepresentative => "Sales Representative",
        Teacher => "Teacher",
        Nurse => "Nurse",
        Engineer => "Engineer",
        Accountant => "Accountant",
        Scientist => "Scientist",
        Lawyer => "Lawyer",
        Salesperson => "Salesperson",
    }
);

closed_choice!(
    /// BMI category (optional).
    BmiCategory {
        NormalWeight => "Normal weight",
        Overweight => "Overweight",
        Obese => "Obese",
    }
);

/// Lifestyle and health survey input, as entered by the user.
///
/// Text fields hold raw user input; they are only interpreted by the
/// validator and when building the prediction payload. Scales always hold
/// an in-range value.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    pub gender: Option<Gender>,
    pub age: String,
    pub occupation: Option<Occupation>,
    pub sleep_duration: String,
    pub quality_of_sleep: u16,
    pub activity_level: u16,
    pub stress_level: u16,
    pub bmi_category: Option<BmiCategory>,
    pub blood_pressure: String,
    pub heart_rate: u16,
    pub daily_steps: String,
}

impl Default for SurveyRecord {
    fn default() -> Self {
        Self {
            gender: None,
            age: String::new(),
            occupation: None,
            sleep_duration: String::new(),
            quality_of_sleep: 5,
            activity_level: 5,
            stress_level: 5,
            bmi_category: None,
            blood_pressure: String::new(),
            heart_rate: 60,
            daily_steps: String::new(),
        }
    }
}

impl SurveyRecord {
    /// Write raw input into a field.
    ///
    /// Choice fields take an exact option string (anything else clears the
    /// selection). Scale fields are clamped into range; non-numeric input
    /// leaves the current value untouched.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Gender => self.gender = Gender::parse(value),
            Field::Occupation => self.occupation = Occupation::parse(value),
            Field::BmiCategory => self.bmi_category = BmiCategory::parse(value),
            Field::Age => replace_text(&mut self.age, value),
            Field::SleepDuration => replace_text(&mut self.sleep_duration, value),
            Field::BloodPressure => replace_text(&mut self.blood_pressure, value),
            Field::DailySteps => replace_text(&mut self.daily_steps, value),
            Field::QualityOfSleep
            | Field::ActivityLevel
            | Field::StressLevel
            | Field::HeartRate => {
                let FieldKind::Scale { min, max } = field.kind() else {
                    return;
                };
                match value.trim().parse::<i64>() {
                    Ok(v) => {
                        let clamped = v.clamp(i64::from(min), i64::from(max)) as u16;
                        if let Some(slot) = self.scale_mut(field) {
                            *slot = clamped;
                        }
                    }
                    Err(_) => {
                        tracing::debug!(field = field.key(), "ignoring non-numeric scale input");
                    }
                }
            }
        }
    }

    /// Display text for a field (empty string for no selection).
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Gender => self.gender.map(|g| g.as_str()).unwrap_or_default().to_string(),
            Field::Occupation => self
                .occupation
                .map(|o| o.as_str())
                .unwrap_or_default()
                .to_string(),
            Field::BmiCategory => self
                .bmi_category
                .map(|b| b.as_str())
                .unwrap_or_default()
                .to_string(),
            Field::Age => self.age.clone(),
            Field::SleepDuration => self.sleep_duration.clone(),
            Field::BloodPressure => self.blood_pressure.clone(),
            Field::DailySteps => self.daily_steps.clone(),
            Field::QualityOfSleep => self.quality_of_sleep.to_string(),
            Field::ActivityLevel => self.activity_level.to_string(),
            Field::StressLevel => self.stress_level.to_string(),
            Field::HeartRate => self.heart_rate.to_string(),
        }
    }

    /// Sleep quality can't be rated while no sleep is reported: an empty
    /// duration, or one that reads as zero. Unparseable text does not lock it.
    #[must_use]
    pub fn sleep_quality_locked(&self) -> bool {
        let duration = self.sleep_duration.trim();
        duration.is_empty() || parse_number(duration) == Some(0.0)
    }

    fn scale_mut(&mut self, field: Field) -> Option<&mut u16> {
        match field {
            Field::QualityOfSleep => Some(&mut self.quality_of_sleep),
            Field::ActivityLevel => Some(&mut self.activity_level),
            Field::StressLevel => Some(&mut self.stress_level),
            Field::HeartRate => Some(&mut self.heart_rate),
            _ => None,
        }
    }

    /// A complete, submittable record (healthy adult office worker).
    #[must_use]
    pub fn sample() -> Self {
        Self {
            gender: Some(Gender::Male),
            age: "25".to_string(),
            occupation: Some(Occupation::Engineer),
            sleep_duration: "7".to_string(),
            quality_of_sleep: 5,
            activity_level: 50,
            stress_level: 5,
            bmi_category: Some(BmiCategory::NormalWeight),
            blood_pressure: "120/80".to_string(),
            heart_rate: 70,
            daily_steps: "5000".to_string(),
        }
    }
}

fn replace_text(slot: &mut String, value: &str) {
    slot.zeroize();
    slot.push_str(value);
}

impl Drop for SurveyRecord {
    fn drop(&mut self) {
        self.age.zeroize();
        self.sleep_duration.zeroize();
        self.blood_pressure.zeroize();
        self.daily_steps.zeroize();
    }
}

/// Parse numeric form text the way the validator and payload builder agree on.
///
/// Surrounding whitespace is ignored; empty, non-numeric, and non-finite
/// input yield `None`.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
