//! Alert dispatch for abnormal vital-sign readings.
//! The checker hands a formatted warning to an [`AlertServiceTrait`]
//! implementation and does not wait for delivery confirmation.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[cfg(test)]
use mockall::automock;

/// Alert dispatch errors
#[derive(Debug, Error)]
pub enum AlertError {
    /// The message could not be handed to the delivery channel
    #[error("Alert delivery error: {0}")]
    Delivery(String),
}

/// Trait for sending alert notifications
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AlertServiceTrait: Send + Sync {
    /// Send a formatted warning message
    async fn send(&self, message: &str) -> Result<(), AlertError>;
}

/// Alert service that emits warnings through the tracing pipeline
#[derive(Debug, Clone, Default)]
pub struct LoggingAlertService;

impl LoggingAlertService {
    /// Create a new logging alert service
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertServiceTrait for LoggingAlertService {
    async fn send(&self, message: &str) -> Result<(), AlertError> {
        warn!("ALERT: {}", message);
        Ok(())
    }
}
