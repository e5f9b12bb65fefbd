use super::{Notifier, NotifyError, OutgoingMessage, ParseMode};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

/// Public Bot API host.
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// Sends every message to one chat through a bot's `sendMessage` method.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    endpoint: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: ParseMode,
}

impl TelegramNotifier {
    pub fn new(
        http: reqwest::Client,
        api_base: &str,
        bot_token: &str,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: format!(
                "{}/bot{}/sendMessage",
                api_base.trim_end_matches('/'),
                bot_token
            ),
            chat_id: chat_id.into(),
        }
    }
}

// The endpoint embeds the bot token, keep it out of logs.
impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip_all, fields(chat_id = %self.chat_id, parse_mode = message.parse_mode.as_str()))]
    async fn notify(&self, message: &OutgoingMessage) -> Result<(), NotifyError> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text: &message.text,
            parse_mode: message.parse_mode,
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status));
        }

        debug!(%status, "Delivered");
        Ok(())
    }
}
