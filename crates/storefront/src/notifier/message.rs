//! Message formatting for every notification the storefront sends.
//!
//! All messages are plain interpolated text with light markup. Order, delete and update
//! messages use Telegram Markdown (`*bold*`); the contact form uses HTML (`<b>bold</b>`).
//! Values are interpolated as typed, without escaping.

use crate::model::{ContactInfo, Product, ProductId};
use serde::Serialize;

/// Markup mode declared alongside the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
            ParseMode::Html => "HTML",
        }
    }
}

/// A rendered message, ready to hand to a [`Notifier`](super::Notifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub parse_mode: ParseMode,
}

/// Something worth telling the shop owner about.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A visitor pressed "Sotib olish" on a product.
    OrderPlaced(Product),
    ProductDeleted(ProductId),
    /// Carries the product as it is after the edit.
    ProductUpdated(Product),
    /// The header's "More info" form was submitted.
    ContactSubmitted(ContactInfo),
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::OrderPlaced(_) => "order_placed",
            Notification::ProductDeleted(_) => "product_deleted",
            Notification::ProductUpdated(_) => "product_updated",
            Notification::ContactSubmitted(_) => "contact_submitted",
        }
    }

    pub fn render(&self) -> OutgoingMessage {
        match self {
            Notification::OrderPlaced(product) => {
                let mut lines = vec![
                    "🛒 *Yangi Buyurtma*".to_string(),
                    format!("📦 Nomi: *{}*", product.title),
                    format!("💵 Narxi: *{}*", product.price_label()),
                    format!("📝 Tavsifi: {}", product.description),
                ];
                if let Some(image) = product.cover_image() {
                    lines.push(format!("🔗 Rasmi: {image}"));
                }
                markdown(lines.join("\n"))
            }
            Notification::ProductDeleted(id) => {
                markdown(format!("🗑 *Mahsulot o‘chirildi*\n🆔 ID: *{id}*"))
            }
            Notification::ProductUpdated(product) => markdown(format!(
                "✏️ *Mahsulot yangilandi*\n🆔 ID: *{}*\n📦 Yangi nomi: *{}*",
                product.id, product.title
            )),
            Notification::ContactSubmitted(info) => OutgoingMessage {
                text: format!(
                    "<b>Get Info</b>\n<b>Name:</b> {}\n<b>Phone number:</b> {}\n<b>Email:</b> {}",
                    info.name, info.phone, info.email
                ),
                parse_mode: ParseMode::Html,
            },
        }
    }
}

fn markdown(text: String) -> OutgoingMessage {
    OutgoingMessage {
        text,
        parse_mode: ParseMode::Markdown,
    }
}
