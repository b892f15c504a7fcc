use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Document;

use super::errors::OrderError;
use super::value_objects::{CustomerInfo, LineItem, OrderStatus};

// ============================================================================
// Order Aggregate - Record of Sale and Status Machine
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated at creation, never reused.
    pub order_id: String,
    pub customer: CustomerInfo,
    pub items: Vec<LineItem>,
    /// Subtotal plus tax, integer currency units.
    pub total: i64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
}

impl Order {
    /// Apply a requested status transition. Status is the only field that
    /// ever changes after creation; an illegal request leaves it untouched
    /// and reports the violation.
    pub fn transition(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        if next == OrderStatus::Delivered {
            self.delivery_date = Some(Utc::now());
        }
        Ok(())
    }

    /// Customer-initiated cancellation. Permitted from `processing` and
    /// `shipped` only.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Cancelled)
    }

    /// Number of units across all line items.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

impl Document for Order {
    fn id(&self) -> &str {
        &self.order_id
    }
}
