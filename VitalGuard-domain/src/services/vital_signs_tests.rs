use chrono::NaiveDate;

use crate::alert::MockAlertServiceTrait;
use crate::entities::{BloodPressure, HealthBaseline, PatientRecord};
use crate::services::vital_signs::{help_message, VitalSignService, VitalSignServiceError};
use crate::services::VitalSignServiceTrait;
use crate::testing::{init_test_logging, MockPatientRepository, RecordingAlertService};

/// Create a patient record with the standard test baseline:
/// temperature 36.6, blood pressure 120/80
fn test_patient(id: &str) -> PatientRecord {
    PatientRecord {
        id: id.to_string(),
        given_name: "Ivan".to_string(),
        family_name: "Petrov".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        baseline: HealthBaseline::new(36.6, BloodPressure::new(120, 80)),
    }
}

/// Service over a single seeded patient and a recording alert sender,
/// returned together with the sender handle for captured-message assertions
fn recording_service(
    id: &str,
) -> (
    VitalSignService<MockPatientRepository, RecordingAlertService>,
    RecordingAlertService,
) {
    let repository = MockPatientRepository::with_patients(vec![test_patient(id)]);
    let alert_service = RecordingAlertService::new();
    let service = VitalSignService::new(repository, alert_service.clone());
    (service, alert_service)
}

#[tokio::test]
async fn check_blood_pressure_abnormal_sends_alert() {
    init_test_logging();
    let repository = MockPatientRepository::with_patients(vec![test_patient("1")]);

    let mut alert_service = MockAlertServiceTrait::new();
    alert_service
        .expect_send()
        .times(1)
        .withf(|message| message == "Warning, patient with id: 1, need help")
        .returning(|_| Ok(()));

    let service = VitalSignService::new(repository, alert_service);
    service
        .check_blood_pressure("1", BloodPressure::new(140, 90))
        .await
        .unwrap();
}

#[tokio::test]
async fn check_blood_pressure_normal_does_not_send_alert() {
    let repository = MockPatientRepository::with_patients(vec![test_patient("1")]);

    let mut alert_service = MockAlertServiceTrait::new();
    alert_service.expect_send().never();

    let service = VitalSignService::new(repository, alert_service);
    service
        .check_blood_pressure("1", BloodPressure::new(120, 80))
        .await
        .unwrap();
}

#[tokio::test]
async fn check_temperature_abnormal_sends_alert() {
    init_test_logging();
    let (service, alert_service) = recording_service("1");

    service.check_temperature("1", 35.0).await.unwrap();

    assert_eq!(
        alert_service.messages(),
        vec!["Warning, patient with id: 1, need help".to_string()]
    );
}

#[tokio::test]
async fn check_temperature_normal_does_not_send_alert() {
    let (service, alert_service) = recording_service("1");

    service.check_temperature("1", 37.0).await.unwrap();

    assert!(alert_service.messages().is_empty());
}

#[tokio::test]
async fn check_blood_pressure_systolic_deviation_alone_sends_alert() {
    let (service, alert_service) = recording_service("1");

    service
        .check_blood_pressure("1", BloodPressure::new(135, 80))
        .await
        .unwrap();

    assert_eq!(alert_service.messages().len(), 1);
}

#[tokio::test]
async fn check_blood_pressure_diastolic_deviation_alone_sends_alert() {
    let (service, alert_service) = recording_service("1");

    service
        .check_blood_pressure("1", BloodPressure::new(120, 85))
        .await
        .unwrap();

    assert_eq!(alert_service.messages().len(), 1);
}

#[tokio::test]
async fn alert_message_carries_the_patient_id() {
    let (service, alert_service) = recording_service("patient-17");

    service
        .check_blood_pressure("patient-17", BloodPressure::new(140, 90))
        .await
        .unwrap();

    assert_eq!(
        alert_service.messages(),
        vec![help_message("patient-17")]
    );
    assert_eq!(
        alert_service.messages()[0],
        "Warning, patient with id: patient-17, need help"
    );
}

#[tokio::test]
async fn check_temperature_within_default_tolerance_stays_quiet() {
    let (service, alert_service) = recording_service("1");

    // 1.3 below the 36.6 baseline, inside the default 1.5 tolerance
    service.check_temperature("1", 35.3).await.unwrap();

    assert!(alert_service.messages().is_empty());
}

#[tokio::test]
async fn check_temperature_honors_custom_tolerance() {
    let repository = MockPatientRepository::with_patients(vec![test_patient("1")]);
    let alert_service = RecordingAlertService::new();
    let service = VitalSignService::new(repository, alert_service.clone())
        .with_temperature_tolerance(0.2);

    // 0.4 above baseline: normal under the default tolerance, abnormal here
    service.check_temperature("1", 37.0).await.unwrap();

    assert_eq!(alert_service.messages().len(), 1);
}

#[tokio::test]
async fn check_blood_pressure_unknown_patient_returns_not_found() {
    let repository = MockPatientRepository::new();
    let alert_service = RecordingAlertService::new();
    let service = VitalSignService::new(repository, alert_service.clone());

    let result = service
        .check_blood_pressure("1", BloodPressure::new(140, 90))
        .await;

    assert!(matches!(
        result,
        Err(VitalSignServiceError::PatientNotFound(_))
    ));
    assert!(alert_service.messages().is_empty());
}

#[tokio::test]
async fn check_temperature_unknown_patient_returns_not_found() {
    let repository = MockPatientRepository::new();
    let alert_service = RecordingAlertService::new();
    let service = VitalSignService::new(repository, alert_service.clone());

    let result = service.check_temperature("1", 35.0).await;

    assert!(matches!(
        result,
        Err(VitalSignServiceError::PatientNotFound(_))
    ));
    assert!(alert_service.messages().is_empty());
}

#[tokio::test]
async fn check_blood_pressure_invalid_reading_is_rejected_without_alert() {
    let (service, alert_service) = recording_service("1");

    let result = service
        .check_blood_pressure("1", BloodPressure::new(350, 80))
        .await;

    assert!(matches!(
        result,
        Err(VitalSignServiceError::ValidationError(_))
    ));
    assert!(alert_service.messages().is_empty());
}

#[tokio::test]
async fn check_temperature_invalid_reading_is_rejected_without_alert() {
    let (service, alert_service) = recording_service("1");

    let result = service.check_temperature("1", 20.0).await;

    assert!(matches!(
        result,
        Err(VitalSignServiceError::ValidationError(_))
    ));
    assert!(alert_service.messages().is_empty());
}

#[tokio::test]
async fn alert_delivery_failure_is_propagated() {
    let repository = MockPatientRepository::with_patients(vec![test_patient("1")]);
    let alert_service = RecordingAlertService::new().with_send_failure();
    let service = VitalSignService::new(repository, alert_service);

    let result = service
        .check_blood_pressure("1", BloodPressure::new(140, 90))
        .await;

    assert!(matches!(result, Err(VitalSignServiceError::AlertError(_))));
}

#[tokio::test]
async fn recording_sender_captures_messages_in_dispatch_order() {
    let (service, alert_service) = recording_service("1");

    service.check_temperature("1", 35.0).await.unwrap();
    service
        .check_blood_pressure("1", BloodPressure::new(140, 90))
        .await
        .unwrap();

    let messages = alert_service.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| m == "Warning, patient with id: 1, need help"));
}
