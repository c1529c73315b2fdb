use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::order::application::domain::entities::{
    Buyer, Order, OrderItem, OrderProduct, OrderStatus, PaymentRecord,
};

/// A freshly paid, unprocessed order: two copies of one book.
pub fn sample_order(id: Uuid) -> Order {
    let now = Utc::now();
    let unit_price = Decimal::new(3990, 2);
    let items = vec![OrderItem {
        product: OrderProduct {
            id: Uuid::new_v4(),
            name: "Rust in Action".to_string(),
            slug: "rust-in-action".to_string(),
            price: unit_price,
        },
        quantity: 2,
        unit_price,
    }];
    let total = Order::total_of(&items);

    Order {
        id,
        buyer: Buyer {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
        },
        items,
        payment: PaymentRecord {
            success: true,
            transaction_id: "fake-valid-nonce".to_string(),
            amount: total,
        },
        status: OrderStatus::NotProcessed,
        total,
        created_at: now,
        updated_at: now,
    }
}
