//! Notification side effects.
//!
//! A notification always runs after the transition it describes has been applied, in its
//! own task, under the caller's [`Scope`]. The caller gets an [`EffectHandle`] back and may
//! await the outcome or simply drop the handle; the task keeps running either way.

use crate::notifier::{Notification, Notifier};
use crate::product_store::CatalogState;
use std::sync::Arc;
use store_framework::{Scope, Snapshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

/// How a notification task ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Delivered,
    /// Delivery was attempted and failed. Holds the error text.
    Failed(String),
    /// The scope was cancelled before delivery completed.
    Cancelled,
}

/// Completion signal of a spawned notification.
#[derive(Debug)]
pub struct EffectHandle {
    kind: &'static str,
    task: JoinHandle<NotifyOutcome>,
}

impl EffectHandle {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the notification task to end.
    pub async fn outcome(self) -> NotifyOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => NotifyOutcome::Cancelled,
            Err(e) => NotifyOutcome::Failed(e.to_string()),
        }
    }
}

/// Result of a command that changed the catalog and announced it.
#[derive(Debug)]
pub struct Applied {
    pub snapshot: Snapshot<CatalogState>,
    pub notification: EffectHandle,
}

/// Renders `notification` and delivers it in a new task bound to `scope`.
pub(crate) fn spawn_notification(
    notifier: Arc<dyn Notifier>,
    scope: &Scope,
    notification: Notification,
) -> EffectHandle {
    let kind = notification.kind();
    let scope = scope.clone();
    let span = info_span!("notification", kind, scope = %scope.label());

    let task = tokio::spawn(
        async move {
            let message = notification.render();
            match scope.run(notifier.notify(&message)).await {
                Ok(Ok(())) => {
                    info!("Notification delivered");
                    NotifyOutcome::Delivered
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "Notification failed");
                    NotifyOutcome::Failed(e.to_string())
                }
                Err(e) => {
                    debug!(error = %e, "Notification abandoned");
                    NotifyOutcome::Cancelled
                }
            }
        }
        .instrument(span),
    );

    EffectHandle { kind, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use crate::notifier::RecordingNotifier;
    use std::time::Duration;

    #[tokio::test]
    async fn test_delivered_outcome() {
        let notifier = Arc::new(RecordingNotifier::new());
        let scope = Scope::root("test");

        let handle = spawn_notification(
            notifier.clone(),
            &scope,
            Notification::ProductDeleted(ProductId::from(1u64)),
        );
        assert_eq!(handle.kind(), "product_deleted");
        assert_eq!(handle.outcome().await, NotifyOutcome::Delivered);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_outcome_carries_reason() {
        let notifier = Arc::new(RecordingNotifier::failing("bot blocked"));
        let scope = Scope::root("test");

        let handle = spawn_notification(
            notifier,
            &scope,
            Notification::ProductDeleted(ProductId::from(1u64)),
        );
        match handle.outcome().await {
            NotifyOutcome::Failed(reason) => assert!(reason.contains("bot blocked")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancelled_scope_abandons_delivery() {
        let notifier = Arc::new(RecordingNotifier::new().with_delay(Duration::from_secs(30)));
        let scope = Scope::root("view");

        let handle = spawn_notification(
            notifier.clone(),
            &scope,
            Notification::ProductDeleted(ProductId::from(1u64)),
        );
        scope.cancel();

        assert_eq!(handle.outcome().await, NotifyOutcome::Cancelled);
        assert!(notifier.sent().is_empty());
    }
}
