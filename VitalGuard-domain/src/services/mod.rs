pub mod vital_signs;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use vital_signs::{
    create_default_vital_sign_service, VitalSignService, VitalSignServiceTrait,
};

#[cfg(test)]
mod vital_signs_tests;
