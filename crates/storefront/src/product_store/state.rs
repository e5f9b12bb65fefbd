//! [`StoreState`] implementation for the product list.
//!
//! This is the whole of the storefront's state logic: four actions over one ordered
//! `Vec<Product>`, computed without side effects. Fetching the catalog and sending
//! Telegram notifications happen around it, in [`Storefront`](crate::lifecycle::Storefront).

use super::actions::CatalogAction;
use crate::model::Product;
use store_framework::StoreState;

/// The storefront's client-side state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub order_list: Vec<Product>,
}

impl CatalogState {
    pub fn new(order_list: Vec<Product>) -> Self {
        Self { order_list }
    }
}

impl StoreState for CatalogState {
    type Action = CatalogAction;

    /// Applies one action.
    ///
    /// # Actions
    /// - `Get`: the payload becomes the list
    /// - `Add`: payload appended, no duplicate-id check
    /// - `Delete`: every entry with the payload id removed
    /// - `Update`: every entry with the payload's id replaced by the payload
    /// - `Unknown`: list unchanged
    ///
    /// Ids are compared with one rule everywhere: [`ProductId`](crate::model::ProductId) equality.
    fn transition(&self, action: CatalogAction) -> Self {
        let order_list = match action {
            CatalogAction::Get(products) => products,
            CatalogAction::Add(product) => {
                let mut next = Vec::with_capacity(self.order_list.len() + 1);
                next.extend(self.order_list.iter().cloned());
                next.push(product);
                next
            }
            CatalogAction::Delete(id) => self
                .order_list
                .iter()
                .filter(|product| product.id != id)
                .cloned()
                .collect(),
            CatalogAction::Update(updated) => self
                .order_list
                .iter()
                .map(|product| {
                    if product.id == updated.id {
                        updated.clone()
                    } else {
                        product.clone()
                    }
                })
                .collect(),
            CatalogAction::Unknown { .. } => self.order_list.clone(),
        };
        Self { order_list }
    }
}

/// Free-function form of [`CatalogState::transition`].
pub fn transition(state: &CatalogState, action: CatalogAction) -> CatalogState {
    state.transition(action)
}
