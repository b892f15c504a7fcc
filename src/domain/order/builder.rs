use chrono::Utc;
use rand::Rng;

use crate::domain::cart::{CartLine, Totals};
use crate::domain::product::Product;

use super::aggregate::Order;
use super::errors::OrderError;
use super::value_objects::{CustomerInfo, LineItem, OrderStatus, PAYMENT_METHOD_COD};

// ============================================================================
// Order Builder
// ============================================================================
//
// Turns a confirmed cart (or a single buy-now selection) into an Order:
// validates the customer fields, snapshots product data into line items,
// computes the total, and stamps a fresh order id and the initial status.
//
// ============================================================================

#[derive(Clone, Debug)]
pub struct OrderDraft {
    pub items: Vec<LineItem>,
    pub customer: CustomerInfo,
}

impl OrderDraft {
    /// Draft from a grouped cart.
    pub fn from_lines(lines: &[CartLine], customer: CustomerInfo) -> Self {
        let items = lines
            .iter()
            .map(|line| LineItem {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                price: line.product.price,
                quantity: line.quantity,
                image: line.product.image.clone(),
            })
            .collect();

        Self { items, customer }
    }

    /// Draft for the buy-now path: one product, chosen quantity.
    pub fn single(product: &Product, quantity: u32, customer: CustomerInfo) -> Self {
        Self {
            items: vec![LineItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity,
                image: product.image.clone(),
            }],
            customer,
        }
    }

    /// Validate and assemble the order record. The snapshot taken here is
    /// what the order keeps forever, independent of later product mutation.
    pub fn build(self, tax_rate_percent: u32) -> Result<Order, OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        for item in &self.items {
            if item.quantity == 0 {
                return Err(OrderError::InvalidQuantity(item.quantity));
            }
        }
        validate_customer(&self.customer)?;

        let totals = Totals::compute(
            self.items.iter().map(|item| (item.price, item.quantity)),
            tax_rate_percent,
        );

        Ok(Order {
            order_id: generate_order_id(),
            customer: self.customer,
            items: self.items,
            total: totals.total,
            payment_method: PAYMENT_METHOD_COD.to_string(),
            status: OrderStatus::Processing,
            order_date: Utc::now(),
            delivery_date: None,
        })
    }
}

/// Millisecond timestamp plus a random suffix keeps ids unique within the
/// store without any coordination.
fn generate_order_id() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..10000);
    format!("ORD{}{}", Utc::now().timestamp_millis(), suffix)
}

fn validate_customer(customer: &CustomerInfo) -> Result<(), OrderError> {
    let mut fields = Vec::new();

    if customer.name.trim().is_empty() {
        fields.push("name".to_string());
    }
    if !valid_email(&customer.email) {
        fields.push("email".to_string());
    }
    if !all_digits(&customer.phone, 10) {
        fields.push("phone".to_string());
    }
    if customer.address.trim().is_empty() {
        fields.push("address".to_string());
    }
    if customer.city.trim().is_empty() {
        fields.push("city".to_string());
    }
    if customer.state.trim().is_empty() {
        fields.push("state".to_string());
    }
    if !all_digits(&customer.pincode, 6) {
        fields.push("pincode".to_string());
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(OrderError::Validation { fields })
    }
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TAX_RATE_PERCENT;
    use crate::domain::cart;
    use crate::domain::product::NewProduct;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
        }
    }

    fn product(id: &str, price: i64) -> Product {
        let mut product = Product::create(NewProduct {
            name: format!("Product {id}"),
            price,
            description: "test".to_string(),
            category: "misc".to_string(),
            image: None,
            discount: None,
            original_price: None,
            in_stock: Some(10),
        });
        product.id = id.to_string();
        product
    }

    #[test]
    fn test_build_from_cart_lines() {
        let selections = vec![product("a", 100), product("a", 100), product("b", 50)];
        let lines = cart::group(&selections);

        let order = OrderDraft::from_lines(&lines, customer())
            .build(DEFAULT_TAX_RATE_PERCENT)
            .unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total, 295); // 250 subtotal + 45 tax
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.payment_method, PAYMENT_METHOD_COD);
        assert!(order.order_id.starts_with("ORD"));
        assert!(order.delivery_date.is_none());
    }

    #[test]
    fn test_snapshot_is_independent_of_product_mutation() {
        let mut p = product("a", 100);
        let order = OrderDraft::single(&p, 1, customer())
            .build(DEFAULT_TAX_RATE_PERCENT)
            .unwrap();

        p.price = 999;
        p.name = "Renamed".to_string();

        assert_eq!(order.items[0].price, 100);
        assert_eq!(order.items[0].name, "Product a");
    }

    #[test]
    fn test_empty_draft_rejected() {
        let draft = OrderDraft {
            items: vec![],
            customer: customer(),
        };
        let err = draft.build(DEFAULT_TAX_RATE_PERCENT).unwrap_err();
        assert!(matches!(err, OrderError::EmptyItems));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let p = product("a", 100);
        let err = OrderDraft::single(&p, 0, customer())
            .build(DEFAULT_TAX_RATE_PERCENT)
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity(0)));
    }

    #[test]
    fn test_validation_collects_offending_fields() {
        let p = product("a", 100);
        let bad = CustomerInfo {
            name: String::new(),
            email: "not-an-email".to_string(),
            phone: "12345".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "56000".to_string(),
        };

        let err = OrderDraft::single(&p, 1, bad)
            .build(DEFAULT_TAX_RATE_PERCENT)
            .unwrap_err();
        match err {
            OrderError::Validation { fields } => {
                assert_eq!(fields, vec!["name", "email", "phone", "pincode"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(valid_email("a@b.co"));
        assert!(!valid_email("plain"));
        assert!(!valid_email("@b.co"));
        assert!(!valid_email("a@nodot"));
        assert!(!valid_email("a@.co"));
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_order_id();
        assert!(id.starts_with("ORD"));
        // Millisecond timestamp plus the 4-digit suffix.
        assert!(id.len() > "ORD".len() + 4);
        assert!(id["ORD".len()..].chars().all(|c| c.is_ascii_digit()));
    }
}
