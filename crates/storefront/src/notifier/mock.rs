use super::{Notifier, NotifyError, OutgoingMessage};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory [`Notifier`] for tests.
///
/// Every completed attempt is recorded, successful or not. A configured delay is waited
/// out before recording, so an attempt dropped mid-flight leaves no trace.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<OutgoingMessage>>,
    failure: Mutex<Option<String>>,
    delay: Option<Duration>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that rejects every message with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let notifier = Self::default();
        notifier.set_failure(Some(reason.into()));
        notifier
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Switches failure on (`Some(reason)`) or off (`None`).
    pub fn set_failure(&self, reason: Option<String>) {
        *self.failure.lock().unwrap() = reason;
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &OutgoingMessage) -> Result<(), NotifyError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.sent.lock().unwrap().push(message.clone());
        match self.failure.lock().unwrap().clone() {
            Some(reason) => Err(NotifyError::Rejected(reason)),
            None => Ok(()),
        }
    }
}
