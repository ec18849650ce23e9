//! In-memory commerce order book for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{CommerceOrder, CommerceOrderReader};

/// In-memory implementation of [`CommerceOrderReader`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderBook {
    orders: Arc<RwLock<Vec<CommerceOrder>>>,
}

impl InMemoryOrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<CommerceOrder>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders)),
        }
    }

    pub async fn insert(&self, order: CommerceOrder) {
        self.orders.write().await.push(order);
    }
}

#[async_trait]
impl CommerceOrderReader for InMemoryOrderBook {
    async fn list_orders_with_products(
        &self,
        product_ids: &[u32],
    ) -> Result<Vec<CommerceOrder>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.contains_any(product_ids))
            .cloned()
            .collect())
    }

    async fn count_orders_with_products(&self, product_ids: &[u32]) -> Result<u64, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().filter(|o| o.contains_any(product_ids)).count() as u64)
    }
}
