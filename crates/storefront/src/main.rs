//! # Storefront
//!
//! Loads the product catalog once and logs every product card.
//!
//! - **config**: `.env` and environment settings ([`Config`]).
//! - **lifecycle**: the [`Storefront`] root that owns the product store.
//! - **catalog** / **notifier**: the two outbound HTTP boundaries.
//!
//! ```bash
//! STOREFRONT_API_URL=https://dummyjson.com/products RUST_LOG=info cargo run
//! ```

use store_framework::tracing::setup_tracing;
use storefront::config::Config;
use storefront::lifecycle::{Storefront, StorefrontError};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    setup_tracing();

    let config = Config::load();
    info!(?config, "Starting storefront");

    let storefront = Storefront::new(&config)?;
    let view = storefront.scope("catalog-view");
    let guard = view.guard();

    let span = tracing::info_span!("catalog_view");
    let loaded = storefront.load_catalog(&view).instrument(span).await;

    match loaded {
        Ok(snapshot) => {
            for product in &snapshot.state.order_list {
                info!(
                    product_id = %product.id,
                    title = %product.title,
                    price = %product.price_label(),
                    image = product.cover_image().unwrap_or("-"),
                    "Card"
                );
            }
        }
        Err(e) => error!(
            error = %e,
            message = e.user_message().unwrap_or_default(),
            "Catalog unavailable"
        ),
    }

    drop(guard);
    storefront.shutdown().await;

    info!("Storefront completed");
    Ok(())
}
