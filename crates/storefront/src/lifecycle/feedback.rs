//! Dialogs shown after the visitor presses "Sotib olish".

/// Title and body of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFeedback {
    /// The order reached the shop owner.
    Placed(Dialog),
    Failed(Dialog),
    /// The view went away first. Nobody is left to show a dialog to.
    Abandoned,
}

impl OrderFeedback {
    pub fn placed(product_title: &str) -> Self {
        OrderFeedback::Placed(Dialog {
            title: "✅ Buyurtma muvaffaqiyatli yuborildi!".to_string(),
            content: format!("{product_title} Telegramga jo‘natildi."),
        })
    }

    pub fn failed() -> Self {
        OrderFeedback::Failed(Dialog {
            title: "❌ Xatolik".to_string(),
            content: "Telegramga yuborishda muammo yuz berdi.".to_string(),
        })
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        match self {
            OrderFeedback::Placed(dialog) | OrderFeedback::Failed(dialog) => Some(dialog),
            OrderFeedback::Abandoned => None,
        }
    }
}
