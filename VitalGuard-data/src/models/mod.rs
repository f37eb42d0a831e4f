// Patient data models
pub mod patient;

// Re-export commonly used types
pub use patient::{BloodPressure, HealthBaseline, PatientRecord};
