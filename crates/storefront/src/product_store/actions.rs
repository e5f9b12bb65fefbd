//! Actions accepted by the catalog store.
//!
//! Each [`CatalogAction`] describes one requested change to the product list. They are
//! applied by [`CatalogState::transition`](crate::product_store::CatalogState) inside the
//! store actor.

use crate::model::{Product, ProductId};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// One requested change to the product list.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Replaces the whole list (initial catalog load).
    Get(Vec<Product>),
    /// Appends one product at the end.
    Add(Product),
    /// Removes every product with this id.
    Delete(ProductId),
    /// Replaces every product sharing the payload's id with the payload.
    Update(Product),
    /// Anything the store does not recognise. Applying it leaves the list unchanged.
    Unknown { kind: String },
}

/// JSON shape used by a UI bridge: `{ "type": "...", "payload": ... }`.
#[derive(Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
enum WireAction {
    Get(Vec<Product>),
    Add(Product),
    Delete(ProductId),
    Update(Product),
}

impl From<WireAction> for CatalogAction {
    fn from(wire: WireAction) -> Self {
        match wire {
            WireAction::Get(products) => Self::Get(products),
            WireAction::Add(product) => Self::Add(product),
            WireAction::Delete(id) => Self::Delete(id),
            WireAction::Update(product) => Self::Update(product),
        }
    }
}

impl CatalogAction {
    /// Short name of the action, as used in the wire form.
    pub fn kind(&self) -> &str {
        match self {
            Self::Get(_) => "get",
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::Update(_) => "update",
            Self::Unknown { kind } => kind,
        }
    }

    /// Reads an action from its JSON wire form.
    ///
    /// Never fails: an unrecognised `type`, a missing `type` or a payload of the wrong
    /// shape all become [`CatalogAction::Unknown`].
    pub fn from_wire(value: &Value) -> Self {
        match WireAction::deserialize(value) {
            Ok(wire) => wire.into(),
            Err(e) => {
                let kind = value
                    .get("type")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                debug!(%kind, error = %e, "Unrecognised action");
                Self::Unknown { kind }
            }
        }
    }
}
