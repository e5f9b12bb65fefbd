use super::effects::{spawn_notification, Applied, EffectHandle, NotifyOutcome};
use super::error::StorefrontError;
use super::feedback::OrderFeedback;
use crate::catalog::{CatalogSource, HttpCatalog};
use crate::clients::ProductStoreClient;
use crate::config::Config;
use crate::model::{ContactInfo, Product, ProductDraft, ProductId};
use crate::notifier::{Notification, Notifier, TelegramNotifier};
use crate::product_store::{self, CatalogState};
use std::sync::Arc;
use store_framework::{Cancelled, Scope, Snapshot};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

/// Produces the id of a product created from the add form.
pub type IdGenerator = Box<dyn Fn() -> ProductId + Send + Sync>;

/// Current Unix time in milliseconds, as an id.
pub fn timestamp_id() -> ProductId {
    ProductId::from(chrono::Utc::now().timestamp_millis())
}

/// The running storefront: one product store plus the services around it.
///
/// Commands change the catalog through the store first and notify second. A failing
/// notification never rolls back the change it describes.
///
/// # Shutdown
/// [`Storefront::shutdown`] cancels every scope handed out by [`Storefront::scope`] and
/// waits for the store actor. The actor stops once the last [`ProductStoreClient`] is
/// dropped, so clones obtained from [`Storefront::client`] must be dropped first.
pub struct Storefront {
    products: ProductStoreClient,
    notifier: Arc<dyn Notifier>,
    catalog: Arc<dyn CatalogSource>,
    next_id: IdGenerator,
    root: Scope,
    handle: JoinHandle<()>,
}

impl Storefront {
    /// Wires the HTTP catalog and the Telegram notifier from `config` and starts the store.
    pub fn new(config: &Config) -> Result<Self, StorefrontError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(StorefrontError::HttpClient)?;

        let catalog = HttpCatalog::new(http.clone(), config.api_url.clone());
        let notifier = TelegramNotifier::new(
            http,
            &config.telegram_api,
            &config.bot_token,
            config.chat_id.clone(),
        );
        Ok(Self::from_parts(Arc::new(catalog), Arc::new(notifier)))
    }

    /// Starts the store with the given collaborators. Must be called inside a Tokio runtime.
    pub fn from_parts(catalog: Arc<dyn CatalogSource>, notifier: Arc<dyn Notifier>) -> Self {
        let (actor, client) = product_store::new();
        let handle = tokio::spawn(actor.run());
        info!("Storefront started");

        Self {
            products: ProductStoreClient::new(client),
            notifier,
            catalog,
            next_id: Box::new(timestamp_id),
            root: Scope::root("storefront"),
            handle,
        }
    }

    pub fn with_id_generator<F>(mut self, next_id: F) -> Self
    where
        F: Fn() -> ProductId + Send + Sync + 'static,
    {
        self.next_id = Box::new(next_id);
        self
    }

    pub fn client(&self) -> &ProductStoreClient {
        &self.products
    }

    /// A fresh scope for one view, cancelled at the latest on shutdown.
    pub fn scope(&self, label: impl Into<String>) -> Scope {
        self.root.child(label)
    }

    /// Fetches the catalog and replaces the product list with it.
    ///
    /// A load whose scope is cancelled before it completes leaves the list untouched.
    #[instrument(skip(self, scope), fields(scope = %scope.label()))]
    pub async fn load_catalog(
        &self,
        scope: &Scope,
    ) -> Result<Snapshot<CatalogState>, StorefrontError> {
        let products = scope
            .run(self.catalog.fetch_products())
            .await?
            .inspect_err(|e| warn!(error = %e, "Catalog load failed"))?;

        if scope.is_cancelled() {
            return Err(Cancelled(scope.label().to_string()).into());
        }

        let snapshot = self.products.replace_all(products).await?;
        info!(
            count = snapshot.state.order_list.len(),
            version = snapshot.version,
            "Catalog loaded"
        );
        Ok(snapshot)
    }

    /// Appends a product built from the add form. Nobody is notified.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn add_product(
        &self,
        draft: ProductDraft,
    ) -> Result<(Product, Snapshot<CatalogState>), StorefrontError> {
        let product = draft.into_product((self.next_id)());
        let snapshot = self.products.add(product.clone()).await?;
        info!(product_id = %product.id, version = snapshot.version, "Product added");
        Ok((product, snapshot))
    }

    /// Replaces the product with the same id, then announces the edit.
    #[instrument(skip(self, scope, product), fields(product_id = %product.id))]
    pub async fn update_product(
        &self,
        scope: &Scope,
        product: Product,
    ) -> Result<Applied, StorefrontError> {
        let snapshot = self.products.update(product.clone()).await?;
        let notification = self.notify(scope, Notification::ProductUpdated(product));
        Ok(Applied {
            snapshot,
            notification,
        })
    }

    /// Removes every product with `id`, then announces the removal.
    #[instrument(skip(self, scope))]
    pub async fn delete_product(
        &self,
        scope: &Scope,
        id: ProductId,
    ) -> Result<Applied, StorefrontError> {
        let snapshot = self.products.delete(id.clone()).await?;
        let notification = self.notify(scope, Notification::ProductDeleted(id));
        Ok(Applied {
            snapshot,
            notification,
        })
    }

    /// Sends an order for `product` and waits for the result dialog.
    #[instrument(skip(self, scope, product), fields(product_id = %product.id))]
    pub async fn buy(&self, scope: &Scope, product: &Product) -> OrderFeedback {
        let handle = self.notify(scope, Notification::OrderPlaced(product.clone()));
        match handle.outcome().await {
            NotifyOutcome::Delivered => OrderFeedback::placed(&product.title),
            NotifyOutcome::Failed(_) => OrderFeedback::failed(),
            NotifyOutcome::Cancelled => OrderFeedback::Abandoned,
        }
    }

    /// Forwards the contact form. The form closes whatever the outcome.
    pub fn submit_contact(&self, scope: &Scope, info: ContactInfo) -> EffectHandle {
        self.notify(scope, Notification::ContactSubmitted(info))
    }

    pub async fn products(&self) -> Result<Vec<Product>, StorefrontError> {
        Ok(self.products.products().await?)
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<CatalogState>> {
        self.products.subscribe()
    }

    fn notify(&self, scope: &Scope, notification: Notification) -> EffectHandle {
        spawn_notification(self.notifier.clone(), scope, notification)
    }

    /// Cancels all outstanding work and waits for the store actor to stop.
    pub async fn shutdown(self) {
        let Self {
            products,
            root,
            handle,
            ..
        } = self;

        root.cancel();
        drop(products);
        if let Err(e) = handle.await {
            error!(error = %e, "Store task failed");
        }
        info!("Storefront stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::notifier::RecordingNotifier;

    fn storefront_with(products: Vec<Product>) -> (Storefront, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let storefront =
            Storefront::from_parts(Arc::new(StaticCatalog::new(products)), notifier.clone());
        (storefront, notifier)
    }

    #[tokio::test]
    async fn test_add_product_assigns_generated_id() {
        let (storefront, notifier) = storefront_with(vec![]);
        let storefront = storefront.with_id_generator(|| ProductId::new("1718000000000"));

        let draft = ProductDraft {
            title: "Mug".into(),
            price: 9.99,
            ..ProductDraft::default()
        };
        let (product, snapshot) = storefront.add_product(draft).await.unwrap();

        assert_eq!(product.id.as_str(), "1718000000000");
        assert_eq!(snapshot.state.order_list, vec![product]);
        assert!(notifier.sent().is_empty());
        storefront.shutdown().await;
    }

    #[tokio::test]
    async fn test_timestamp_ids_are_numeric() {
        let id = timestamp_id();
        assert!(id.as_str().parse::<i64>().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_update_then_notifies_with_new_title() {
        let (storefront, notifier) = storefront_with(vec![
            Product::new(1u64, "A", 5.0),
            Product::new(2u64, "B", 10.0),
        ]);
        let scope = storefront.scope("admin");
        storefront.load_catalog(&scope).await.unwrap();

        let applied = storefront
            .update_product(&scope, Product::new("2", "B2", 12.0))
            .await
            .unwrap();
        assert_eq!(applied.snapshot.state.order_list[1].title, "B2");
        assert_eq!(applied.notification.outcome().await, NotifyOutcome::Delivered);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.contains("*B2*"));
        storefront.shutdown().await;
    }

    #[tokio::test]
    async fn test_submit_contact_sends_html() {
        let (storefront, notifier) = storefront_with(vec![]);
        let scope = storefront.scope("header");

        let info = ContactInfo::new("Aziz", "+998901234567", "aziz@example.com").unwrap();
        let outcome = storefront.submit_contact(&scope, info).outcome().await;

        assert_eq!(outcome, NotifyOutcome::Delivered);
        assert!(notifier.sent()[0].text.starts_with("<b>Get Info</b>"));
        storefront.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_cancels_view_scopes() {
        let (storefront, _) = storefront_with(vec![]);
        let view = storefront.scope("catalog-view");

        storefront.shutdown().await;
        assert!(view.is_cancelled());
    }
}
