use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

use crate::alert::{AlertServiceTrait, LoggingAlertService};
use crate::entities::{BloodPressure, PatientRecord};
use vital_guard_data::repository::{PatientRepository, PatientRepositoryTrait, RepositoryError};

/// Default tolerance, in degrees Celsius, within which an observed body
/// temperature still counts as normal.
pub const DEFAULT_TEMPERATURE_TOLERANCE: f64 = 1.5;

/// Lowest body temperature an observation can plausibly report, in degrees
/// Celsius.
pub const MIN_OBSERVABLE_TEMPERATURE: f64 = 30.0;

/// Highest body temperature an observation can plausibly report, in degrees
/// Celsius.
pub const MAX_OBSERVABLE_TEMPERATURE: f64 = 44.0;

/// Vital sign service errors
#[derive(Debug, Error)]
pub enum VitalSignServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Patient not found error
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Alert dispatch error
    #[error("Alert error: {0}")]
    AlertError(String),
}

/// Trait for vital sign check operations
#[async_trait]
pub trait VitalSignServiceTrait {
    /// Validate an observed blood pressure reading
    fn validate_pressure_reading(
        &self,
        reading: &BloodPressure,
    ) -> Result<(), VitalSignServiceError>;

    /// Validate an observed body temperature
    fn validate_temperature_reading(&self, temperature: f64) -> Result<(), VitalSignServiceError>;

    /// Check an observed blood pressure reading against the patient's baseline.
    /// Dispatches exactly one alert when the reading deviates from the
    /// baseline, none otherwise.
    async fn check_blood_pressure(
        &self,
        patient_id: &str,
        observed: BloodPressure,
    ) -> Result<(), VitalSignServiceError>;

    /// Check an observed body temperature against the patient's baseline.
    /// Dispatches exactly one alert when the reading is outside the
    /// temperature tolerance, none otherwise.
    async fn check_temperature(
        &self,
        patient_id: &str,
        observed: f64,
    ) -> Result<(), VitalSignServiceError>;
}

/// Vital sign service for domain logic
pub struct VitalSignService<R: PatientRepositoryTrait, A: AlertServiceTrait> {
    repository: R,
    alert_service: A,
    temperature_tolerance: f64,
}

impl<R: PatientRepositoryTrait, A: AlertServiceTrait> VitalSignService<R, A> {
    /// Create a new vital sign service with the default temperature tolerance
    pub fn new(repository: R, alert_service: A) -> Self {
        Self {
            repository,
            alert_service,
            temperature_tolerance: DEFAULT_TEMPERATURE_TOLERANCE,
        }
    }

    /// Override the tolerance used by temperature checks
    pub fn with_temperature_tolerance(mut self, tolerance: f64) -> Self {
        self.temperature_tolerance = tolerance;
        self
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> VitalSignServiceError {
        match err {
            RepositoryError::NotFound(msg) => VitalSignServiceError::PatientNotFound(msg),
            RepositoryError::Validation(msg) => VitalSignServiceError::ValidationError(msg),
            _ => VitalSignServiceError::RepositoryError(err.to_string()),
        }
    }

    /// Load the patient record an observed reading is checked against
    async fn load_patient(&self, patient_id: &str) -> Result<PatientRecord, VitalSignServiceError> {
        self.repository
            .get_by_id(patient_id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| {
                VitalSignServiceError::PatientNotFound(format!(
                    "Patient with id {} not found",
                    patient_id
                ))
            })
    }

    /// Dispatch the help warning for a patient
    async fn send_alert(&self, patient_id: &str) -> Result<(), VitalSignServiceError> {
        let message = help_message(patient_id);
        self.alert_service
            .send(&message)
            .await
            .map_err(|e| VitalSignServiceError::AlertError(e.to_string()))
    }
}

/// Format the warning message dispatched when a reading is abnormal
pub fn help_message(patient_id: &str) -> String {
    format!("Warning, patient with id: {}, need help", patient_id)
}

#[async_trait]
impl<R: PatientRepositoryTrait + Send + Sync, A: AlertServiceTrait> VitalSignServiceTrait
    for VitalSignService<R, A>
{
    /// Validate an observed blood pressure reading
    fn validate_pressure_reading(
        &self,
        reading: &BloodPressure,
    ) -> Result<(), VitalSignServiceError> {
        if let Err(validation_errors) = reading.validate() {
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let messages: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    messages.join(", ")
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(VitalSignServiceError::ValidationError(error_message));
        }

        // Additional validation: systolic must be greater than diastolic
        if reading.systolic <= reading.diastolic {
            return Err(VitalSignServiceError::ValidationError(
                "Systolic pressure must be greater than diastolic pressure".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate an observed body temperature
    fn validate_temperature_reading(&self, temperature: f64) -> Result<(), VitalSignServiceError> {
        if !(MIN_OBSERVABLE_TEMPERATURE..=MAX_OBSERVABLE_TEMPERATURE).contains(&temperature) {
            return Err(VitalSignServiceError::ValidationError(format!(
                "Temperature must be between {} and {} degrees Celsius",
                MIN_OBSERVABLE_TEMPERATURE, MAX_OBSERVABLE_TEMPERATURE
            )));
        }

        Ok(())
    }

    /// Check an observed blood pressure reading against the patient's baseline
    async fn check_blood_pressure(
        &self,
        patient_id: &str,
        observed: BloodPressure,
    ) -> Result<(), VitalSignServiceError> {
        self.validate_pressure_reading(&observed)?;

        let patient = self.load_patient(patient_id).await?;

        if observed != patient.baseline.normal_pressure {
            warn!(
                "Blood pressure {} for patient {} deviates from baseline {}",
                observed, patient_id, patient.baseline.normal_pressure
            );
            self.send_alert(patient_id).await?;
        } else {
            debug!(
                "Blood pressure {} for patient {} matches baseline",
                observed, patient_id
            );
        }

        Ok(())
    }

    /// Check an observed body temperature against the patient's baseline
    async fn check_temperature(
        &self,
        patient_id: &str,
        observed: f64,
    ) -> Result<(), VitalSignServiceError> {
        self.validate_temperature_reading(observed)?;

        let patient = self.load_patient(patient_id).await?;

        let deviation = (observed - patient.baseline.normal_temperature).abs();
        if deviation > self.temperature_tolerance {
            warn!(
                "Temperature {} for patient {} deviates from baseline {} by {:.1}",
                observed, patient_id, patient.baseline.normal_temperature, deviation
            );
            self.send_alert(patient_id).await?;
        } else {
            debug!(
                "Temperature {} for patient {} is within tolerance of baseline {}",
                observed, patient_id, patient.baseline.normal_temperature
            );
        }

        Ok(())
    }
}

/// Create a default vital sign service using the repository from the data layer
pub fn create_default_vital_sign_service() -> impl VitalSignServiceTrait + Send + Sync {
    let repository = PatientRepository::new();
    VitalSignService::new(repository, LoggingAlertService::new())
}
