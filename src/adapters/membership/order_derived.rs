//! Membership records derived from commerce orders.
//!
//! Reconstructs the record shape on the fly from orders that contain a
//! membership product. Used when a deployment has no metadata table.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::membership::{CategoryCode, MembershipRecord, ProductCatalog, ACTIVE_STATUS};
use crate::ports::{CommerceOrder, CommerceOrderReader, MembershipRecordSource, RecordFilter};

/// Order status that represents a paid, running membership.
pub const COMPLETED_ORDER_STATUS: &str = "completed";

/// Record source backed by the commerce platform's orders.
pub struct OrderDerivedRecordSource {
    orders: Arc<dyn CommerceOrderReader>,
    catalog: Arc<ProductCatalog>,
}

impl OrderDerivedRecordSource {
    pub fn new(orders: Arc<dyn CommerceOrderReader>, catalog: Arc<ProductCatalog>) -> Self {
        Self { orders, catalog }
    }

    fn product_ids(&self) -> Vec<u32> {
        self.catalog.all_codes().iter().map(|c| c.as_u32()).collect()
    }

    /// Builds the record for one order.
    ///
    /// The last membership line item decides the category. Orders without
    /// a membership product yield `None`.
    fn derive(&self, order: &CommerceOrder) -> Option<MembershipRecord> {
        let code = order
            .items
            .iter()
            .map(|item| CategoryCode::new(item.product_id))
            .filter(|code| self.catalog.classify(*code).is_some())
            .last()?;

        let status = if order.status == COMPLETED_ORDER_STATUS {
            ACTIVE_STATUS.to_string()
        } else {
            order.status.clone()
        };

        Some(MembershipRecord {
            id: order.id,
            user_id: order.customer_id,
            category_code: code,
            status,
            start_date: order
                .paid_at
                .clone()
                .unwrap_or_else(|| order.created_at.clone()),
            end_date: order.subscription_end.clone(),
            created_at: order.created_at.clone(),
            postcode: order.billing_postcode.clone(),
        })
    }
}

#[async_trait]
impl MembershipRecordSource for OrderDerivedRecordSource {
    async fn fetch(&self, filter: &RecordFilter) -> Result<Vec<MembershipRecord>, DomainError> {
        let orders = self
            .orders
            .list_orders_with_products(&self.product_ids())
            .await?;

        Ok(orders
            .iter()
            .filter_map(|order| self.derive(order))
            .filter(|record| filter.matches(record))
            .collect())
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        self.orders
            .count_orders_with_products(&self.product_ids())
            .await
    }

    fn source_name(&self) -> &'static str {
        "commerce_orders"
    }
}
