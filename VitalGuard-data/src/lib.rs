// VitalGuard Data
// This crate holds the patient data models and data access layer

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
