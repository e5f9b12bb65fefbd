use serde_json::json;
use std::sync::Arc;
use storefront::catalog::StaticCatalog;
use storefront::config::Config;
use storefront::lifecycle::{NotifyOutcome, OrderFeedback, Storefront, StorefrontError};
use storefront::model::{Product, ProductId};
use storefront::notifier::RecordingNotifier;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(catalog: &MockServer, telegram: &MockServer) -> Config {
    Config {
        api_url: format!("{}/products", catalog.uri()),
        bot_token: "123:abc".to_string(),
        chat_id: "-100200".to_string(),
        telegram_api: telegram.uri(),
        ..Config::default()
    }
}

/// Full flow over real HTTP: load, update, delete and buy.
#[tokio::test]
async fn test_storefront_over_http() {
    let catalog = MockServer::start().await;
    let telegram = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {"id": 1, "title": "A", "price": 5, "description": "first", "images": ["https://cdn.example/a.png"]},
                {"id": 2, "title": "B", "price": 10}
            ]
        })))
        .expect(1)
        .mount(&catalog)
        .await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_partial_json(json!({"chat_id": "-100200", "parse_mode": "Markdown"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(3)
        .mount(&telegram)
        .await;

    let storefront = Storefront::new(&config_for(&catalog, &telegram)).unwrap();
    let view = storefront.scope("catalog-view");

    // 1. Load
    let snapshot = storefront.load_catalog(&view).await.unwrap();
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.state.order_list.len(), 2);

    // 2. Update, matched across number and string ids
    let applied = storefront
        .update_product(&view, Product::new("2", "B2", 12.0))
        .await
        .unwrap();
    assert_eq!(applied.snapshot.state.order_list[1].title, "B2");
    assert_eq!(applied.notification.outcome().await, NotifyOutcome::Delivered);

    // 3. Delete
    let applied = storefront
        .delete_product(&view, ProductId::new("1"))
        .await
        .unwrap();
    assert_eq!(applied.snapshot.state.order_list.len(), 1);
    assert_eq!(applied.notification.outcome().await, NotifyOutcome::Delivered);

    // 4. Buy
    let remaining = storefront.products().await.unwrap();
    let feedback = storefront.buy(&view, &remaining[0]).await;
    assert_eq!(feedback, OrderFeedback::placed("B2"));

    storefront.shutdown().await;
}

#[tokio::test]
async fn test_catalog_failure_is_localized() {
    let catalog = MockServer::start().await;
    let telegram = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&catalog)
        .await;

    let storefront = Storefront::new(&config_for(&catalog, &telegram)).unwrap();
    let view = storefront.scope("catalog-view");

    let error = storefront.load_catalog(&view).await.unwrap_err();
    assert!(matches!(error, StorefrontError::Catalog(_)));
    assert_eq!(
        error.user_message(),
        Some("Maʼlumotlarni yuklashda xatolik yuz berdi.")
    );
    assert!(storefront.products().await.unwrap().is_empty());

    storefront.shutdown().await;
}

#[tokio::test]
async fn test_buy_failure_shows_error_dialog() {
    let catalog = MockServer::start().await;
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&telegram)
        .await;

    let storefront = Storefront::new(&config_for(&catalog, &telegram)).unwrap();
    let view = storefront.scope("card");

    let feedback = storefront
        .buy(&view, &Product::new(1u64, "Lamp", 20.0))
        .await;
    assert_eq!(feedback, OrderFeedback::failed());

    storefront.shutdown().await;
}

/// A failed notification does not roll back the change it describes.
#[tokio::test]
async fn test_failing_notifier_keeps_delete() {
    let notifier = Arc::new(RecordingNotifier::failing("telegram down"));
    let storefront = Storefront::from_parts(
        Arc::new(StaticCatalog::new(vec![
            Product::new(1u64, "A", 5.0),
            Product::new(2u64, "B", 10.0),
        ])),
        notifier.clone(),
    );
    let view = storefront.scope("admin");
    storefront.load_catalog(&view).await.unwrap();

    let applied = storefront
        .delete_product(&view, ProductId::from(1u64))
        .await
        .unwrap();
    assert!(matches!(
        applied.notification.outcome().await,
        NotifyOutcome::Failed(_)
    ));

    let remaining = storefront.products().await.unwrap();
    assert_eq!(remaining, vec![Product::new(2u64, "B", 10.0)]);
    assert_eq!(notifier.sent().len(), 1);

    storefront.shutdown().await;
}

/// Subscribers observe every transition in order.
#[tokio::test]
async fn test_subscribers_see_each_transition() {
    let storefront = Storefront::from_parts(
        Arc::new(StaticCatalog::new(vec![Product::new(1u64, "A", 5.0)])),
        Arc::new(RecordingNotifier::new()),
    );
    let mut updates = storefront.subscribe();
    assert_eq!(updates.borrow().version, 0);

    let view = storefront.scope("catalog-view");
    storefront.load_catalog(&view).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().version, 1);

    storefront
        .delete_product(&view, ProductId::from(1u64))
        .await
        .unwrap();
    updates.changed().await.unwrap();
    let latest = updates.borrow_and_update().clone();
    assert_eq!(latest.version, 2);
    assert!(latest.state.order_list.is_empty());

    storefront.shutdown().await;
}

/// Transport failures reach logs and outcomes without the bot token.
#[tokio::test]
async fn test_failed_notification_hides_token() {
    let config = Config {
        bot_token: "123:SECRETTOKEN".to_string(),
        chat_id: "1".to_string(),
        telegram_api: "http://127.0.0.1:9".to_string(),
        ..Config::default()
    };
    let storefront = Storefront::new(&config).unwrap();
    let view = storefront.scope("admin");

    let applied = storefront
        .delete_product(&view, ProductId::from(1u64))
        .await
        .unwrap();
    match applied.notification.outcome().await {
        NotifyOutcome::Failed(reason) => assert!(!reason.contains("SECRETTOKEN")),
        other => panic!("expected failure, got {other:?}"),
    }

    storefront.shutdown().await;
}
