use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A blood pressure value in mmHg.
///
/// This is an immutable value object: two readings are equal exactly when
/// both the systolic and the diastolic values match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct BloodPressure {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 40, max = 300, message = "Systolic must be between 40 and 300"))]
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 20, max = 200, message = "Diastolic must be between 20 and 200"))]
    pub diastolic: u16,
}

impl BloodPressure {
    /// Create a new blood pressure value
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// The normal values recorded for a patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthBaseline {
    /// Normal body temperature in degrees Celsius
    pub normal_temperature: f64,

    /// Normal blood pressure
    pub normal_pressure: BloodPressure,
}

impl HealthBaseline {
    /// Create a new baseline
    pub fn new(normal_temperature: f64, normal_pressure: BloodPressure) -> Self {
        Self {
            normal_temperature,
            normal_pressure,
        }
    }
}

/// A patient record as held by the patient store.
///
/// Records are created and owned by the store; every record carries exactly
/// one baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Identifier the patient is looked up by
    pub id: String,

    /// Given name
    pub given_name: String,

    /// Family name
    pub family_name: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// The patient's recorded normal values
    pub baseline: HealthBaseline,
}
