use std::sync::Arc;

use crate::store::{Collection, StoreError};

use super::aggregate::Order;
use super::builder::OrderDraft;
use super::errors::OrderError;
use super::value_objects::OrderStatus;

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: draft → Order → document store, and status transitions as
// one atomic check-and-apply per order.
//
// ============================================================================

pub struct OrderService {
    orders: Arc<dyn Collection<Order>>,
    tax_rate_percent: u32,
}

impl OrderService {
    pub fn new(orders: Arc<dyn Collection<Order>>, tax_rate_percent: u32) -> Self {
        Self {
            orders,
            tax_rate_percent,
        }
    }

    pub async fn create(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        let order = draft.build(self.tax_rate_percent)?;
        self.orders.insert(order.clone()).await?;

        tracing::info!(
            order_id = %order.order_id,
            total = order.total,
            units = order.item_count(),
            "order created"
        );
        Ok(order)
    }

    pub async fn get(&self, order_id: &str) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    /// Administrative listing of every order.
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.orders.find_all().await?;
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }

    /// Orders placed by one customer, newest first.
    pub async fn list_for_email(&self, email: &str) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .orders
            .find_all()
            .await?
            .into_iter()
            .filter(|order| order.customer.email.eq_ignore_ascii_case(email))
            .collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }

    /// Apply a requested status transition. Validation and mutation run
    /// inside one atomic store update, so a rejected transition can never
    /// corrupt the stored status.
    pub async fn transition(
        &self,
        order_id: &str,
        next: OrderStatus,
    ) -> Result<Order, OrderError> {
        let updated = self
            .orders
            .update_with(
                order_id,
                Box::new(move |order: &mut Order| {
                    order
                        .transition(next)
                        .map_err(|e| StoreError::Conflict(e.to_string()))
                }),
            )
            .await?;

        tracing::info!(order_id = %updated.order_id, status = %updated.status, "order status changed");
        Ok(updated)
    }

    /// Customer-initiated cancellation.
    pub async fn cancel(&self, order_id: &str) -> Result<Order, OrderError> {
        self.transition(order_id, OrderStatus::Cancelled).await
    }
}
