//! # Notifier
//!
//! Outbound messages to the shop owner. A [`Notification`] is rendered into an
//! [`OutgoingMessage`] and handed to a [`Notifier`]:
//!
//! - [`TelegramNotifier`] posts it to the Telegram Bot API,
//! - [`RecordingNotifier`] keeps it in memory for tests.
//!
//! Delivery is attempted exactly once. Failures are returned to the caller, who decides
//! whether anyone should hear about them.

mod error;
mod message;
mod mock;
mod telegram;

pub use error::NotifyError;
pub use message::{Notification, OutgoingMessage, ParseMode};
pub use mock::RecordingNotifier;
pub use telegram::{TelegramNotifier, DEFAULT_TELEGRAM_API};

use async_trait::async_trait;

/// Delivers rendered messages somewhere a human will read them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &OutgoingMessage) -> Result<(), NotifyError>;
}
