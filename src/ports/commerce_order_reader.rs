//! Commerce order reader port.
//!
//! Read access to the commerce platform's orders, used to derive
//! membership records when the metadata table is not the selected source.

use crate::domain::foundation::{DomainError, RecordId, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for commerce orders.
#[async_trait]
pub trait CommerceOrderReader: Send + Sync {
    /// List all orders that contain at least one of the given products.
    async fn list_orders_with_products(
        &self,
        product_ids: &[u32],
    ) -> Result<Vec<CommerceOrder>, DomainError>;

    /// Count every order that contains at least one of the given products.
    async fn count_orders_with_products(&self, product_ids: &[u32]) -> Result<u64, DomainError>;
}

/// An order as exposed by the commerce platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommerceOrder {
    pub id: RecordId,
    pub customer_id: Option<UserId>,

    /// Platform order status (`completed`, `processing`, `cancelled`, ...).
    pub status: String,

    /// `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,

    /// When payment completed, if it has.
    pub paid_at: Option<String>,

    /// Scheduled end of the subscription period, if the order has one.
    pub subscription_end: Option<String>,

    pub billing_postcode: Option<String>,

    pub items: Vec<OrderItem>,
}

/// One line item of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u32,
    pub quantity: u32,
}

impl CommerceOrder {
    /// Returns true if any line item is one of the given products.
    pub fn contains_any(&self, product_ids: &[u32]) -> bool {
        self.items
            .iter()
            .any(|item| product_ids.contains(&item.product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commerce_order_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn CommerceOrderReader) {}
    }

    #[test]
    fn contains_any_checks_line_items() {
        let order = CommerceOrder {
            id: RecordId::new(10),
            customer_id: None,
            status: "completed".to_string(),
            created_at: "2024-01-01 10:00:00".to_string(),
            paid_at: None,
            subscription_end: None,
            billing_postcode: None,
            items: vec![OrderItem {
                product_id: 9503,
                quantity: 1,
            }],
        };
        assert!(order.contains_any(&[1, 9503]));
        assert!(!order.contains_any(&[19221]));
    }
}
