// Domain entities and value objects
// The data layer owns the canonical patient models; re-export them here

pub use vital_guard_data::models::patient::{BloodPressure, HealthBaseline, PatientRecord};
