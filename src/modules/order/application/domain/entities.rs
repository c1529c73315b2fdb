use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fulfilment state of an order, stored in kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    NotProcessed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::NotProcessed => "not-processed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Accepts the stored spelling and the labels older clients still send.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "not-processed" | "not process" | "not processed" => Some(OrderStatus::NotProcessed),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" | "deliverd" => Some(OrderStatus::Delivered),
            "cancelled" | "canceled" | "cancel" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    fn next(self) -> Option<Self> {
        match self {
            OrderStatus::NotProcessed => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// One step forward, or cancellation while still open. Staying put is always allowed.
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        if self == target {
            return true;
        }
        if target == OrderStatus::Cancelled {
            return !self.is_terminal();
        }
        self.next() == Some(target)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gateway outcome kept with the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentRecord {
    pub success: bool,
    #[schema(example = "fake-valid-nonce")]
    pub transaction_id: String,
    #[schema(value_type = String, example = "79.80")]
    pub amount: Decimal,
}

/// Product fields embedded in an order line.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderProduct {
    pub id: Uuid,
    #[schema(example = "Rust in Action")]
    pub name: String,
    #[schema(example = "rust-in-action")]
    pub slug: String,
    /// Current catalog price, which may differ from what was paid
    #[schema(value_type = String, example = "39.90")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderItem {
    pub product: OrderProduct,
    pub quantity: i32,
    #[schema(value_type = String, example = "39.90")]
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Buyer {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub buyer: Buyer,
    pub items: Vec<OrderItem>,
    pub payment: PaymentRecord,
    pub status: OrderStatus,
    #[schema(value_type = String, example = "79.80")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn total_of(items: &[OrderItem]) -> Decimal {
        items
            .iter()
            .map(|i| i.unit_price * Decimal::from(i.quantity))
            .sum()
    }
}

/// One cart entry as submitted at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Merges repeated products and keeps first-seen order. `None` when a merged
/// quantity does not fit in an `i32`.
pub fn merge_cart(lines: &[CartLine]) -> Option<Vec<CartLine>> {
    let mut merged: Vec<CartLine> = Vec::with_capacity(lines.len());
    let mut index: BTreeMap<Uuid, usize> = BTreeMap::new();

    for line in lines {
        match index.get(&line.product_id) {
            Some(&pos) => {
                merged[pos].quantity = merged[pos].quantity.checked_add(line.quantity)?;
            }
            None => {
                index.insert(line.product_id, merged.len());
                merged.push(*line);
            }
        }
    }

    Some(merged)
}

/// Cart line priced from the catalog at checkout time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedLine {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl PricedLine {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub lines: Vec<PricedLine>,
    pub payment: PaymentRecord,
}
