use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::LocalStorage;
use crate::store::{Action, Store};

pub const CART_KEY: &str = "cart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Stored as a bare JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, i| count.saturating_add(i.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds to the quantity when the product is already in the cart.
    Add(CartItem),
    Remove(Uuid),
    /// Empties the cart and drops the stored key, as after checkout.
    Clear,
    Replace(Vec<CartItem>),
}

impl Action<CartState> for CartAction {
    fn reduce(self, state: &CartState) -> CartState {
        let mut items = state.items.clone();
        match self {
            CartAction::Add(item) => {
                match items.iter_mut().find(|i| i.product_id == item.product_id) {
                    Some(existing) => {
                        existing.quantity = existing.quantity.saturating_add(item.quantity)
                    }
                    None => items.push(item),
                }
            }
            CartAction::Remove(product_id) => items.retain(|i| i.product_id != product_id),
            CartAction::Clear => items.clear(),
            CartAction::Replace(replacement) => items = replacement,
        }
        CartState { items }
    }

    fn clears_storage(&self) -> bool {
        matches!(self, CartAction::Clear)
    }
}

pub type CartStore = Store<CartState, CartAction>;

impl CartStore {
    pub fn open(storage: Arc<dyn LocalStorage>) -> Self {
        Store::persisted(CART_KEY, storage)
    }
}
