// Testing utilities and mock implementations for the domain layer
// Available in unit tests and when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use vital_guard_data::repository::tests::MockPatientRepository;

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::alert::{AlertError, AlertServiceTrait};

/// Initialise tracing output for tests. Safe to call more than once.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Alert service that records every message it is asked to send.
///
/// Clones share the underlying buffer, so a test can hand one clone to the
/// service under test and inspect the captured messages through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlertService {
    messages: Arc<RwLock<Vec<String>>>,
    should_fail_send: bool,
}

impl RecordingAlertService {
    /// Create a new recording alert service
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            should_fail_send: false,
        }
    }

    /// Configure the service to fail on send
    pub fn with_send_failure(mut self) -> Self {
        self.should_fail_send = true;
        self
    }

    /// Messages recorded so far, in dispatch order
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().unwrap().clone()
    }
}

#[async_trait]
impl AlertServiceTrait for RecordingAlertService {
    async fn send(&self, message: &str) -> Result<(), AlertError> {
        if self.should_fail_send {
            return Err(AlertError::Delivery(
                "Delivery failed - service is configured to fail send".to_string(),
            ));
        }

        let mut messages = self.messages.write().unwrap();
        messages.push(message.to_string());
        Ok(())
    }
}
