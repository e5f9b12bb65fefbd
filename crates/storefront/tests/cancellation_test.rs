use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use storefront::catalog::HttpCatalog;
use storefront::lifecycle::{NotifyOutcome, OrderFeedback, Storefront, StorefrontError};
use storefront::model::{ContactInfo, Product};
use storefront::notifier::RecordingNotifier;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn slow_catalog() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": [{"id": 1, "title": "Late", "price": 1}]}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;
    server
}

fn storefront_for(server: &MockServer, notifier: Arc<RecordingNotifier>) -> Storefront {
    Storefront::from_parts(
        Arc::new(HttpCatalog::new(reqwest::Client::new(), server.uri())),
        notifier,
    )
}

/// Leaving the view while the catalog is still loading leaves the list untouched.
#[tokio::test]
async fn test_cancelled_load_never_dispatches() {
    let server = slow_catalog().await;
    let storefront = storefront_for(&server, Arc::new(RecordingNotifier::new()));
    let view = storefront.scope("catalog-view");

    let canceller = view.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(5), storefront.load_catalog(&view))
        .await
        .expect("cancelled load should return promptly");
    assert!(matches!(result, Err(StorefrontError::Cancelled(_))));

    let snapshot = storefront.subscribe().borrow().clone();
    assert_eq!(snapshot.version, 0);
    assert!(snapshot.state.order_list.is_empty());

    storefront.shutdown().await;
}

/// Dropping the view's guard cancels its scope.
#[tokio::test]
async fn test_dropped_guard_cancels_load() {
    let server = slow_catalog().await;
    let storefront = storefront_for(&server, Arc::new(RecordingNotifier::new()));
    let view = storefront.scope("catalog-view");
    let guard = view.guard();

    drop(guard);

    let result = storefront.load_catalog(&view).await;
    assert!(matches!(result, Err(StorefrontError::Cancelled(_))));
    assert!(storefront.products().await.unwrap().is_empty());

    storefront.shutdown().await;
}

/// Cancelling one view leaves its siblings working.
#[tokio::test]
async fn test_sibling_scopes_are_independent() {
    let server = slow_catalog().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let storefront = storefront_for(&server, notifier.clone());

    let closed = storefront.scope("closed-view");
    let open = storefront.scope("open-view");
    closed.cancel();

    let info = ContactInfo::new("Aziz", "+998901234567", "aziz@example.com").unwrap();
    let dropped = storefront.submit_contact(&closed, info.clone()).outcome().await;
    let delivered = storefront.submit_contact(&open, info).outcome().await;

    assert_eq!(dropped, NotifyOutcome::Cancelled);
    assert_eq!(delivered, NotifyOutcome::Delivered);
    assert!(!open.is_cancelled());
    assert_eq!(notifier.sent().len(), 1);

    storefront.shutdown().await;
}

/// An order still in flight when the view closes produces no dialog.
#[tokio::test]
async fn test_buy_abandoned_when_view_closes() {
    let server = slow_catalog().await;
    let notifier = Arc::new(RecordingNotifier::new().with_delay(Duration::from_secs(30)));
    let storefront = storefront_for(&server, notifier.clone());
    let view = storefront.scope("card");

    let canceller = view.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let feedback = storefront.buy(&view, &Product::new(1u64, "Lamp", 20.0)).await;
    assert_eq!(feedback, OrderFeedback::Abandoned);
    assert!(notifier.sent().is_empty());

    storefront.shutdown().await;
}

/// Shutdown reaches notifications still pending under any view.
#[tokio::test]
async fn test_shutdown_abandons_pending_notifications() {
    let server = slow_catalog().await;
    let notifier = Arc::new(RecordingNotifier::new().with_delay(Duration::from_secs(30)));
    let storefront = storefront_for(&server, notifier.clone());
    let view = storefront.scope("header");

    let info = ContactInfo::new("Aziz", "+998901234567", "aziz@example.com").unwrap();
    let handle = storefront.submit_contact(&view, info);

    storefront.shutdown().await;
    assert_eq!(handle.outcome().await, NotifyOutcome::Cancelled);
    assert!(notifier.sent().is_empty());
}
