// Private module declaration
mod storage;

use std::sync::Arc;

use crate::domain::cart::{self, CartError, CartLine, Totals};
use crate::domain::order::{CustomerInfo, OrderDraft};
use crate::domain::product::Product;

// Re-export for public API
pub use storage::{MemoryStorage, SessionStorage};

// ============================================================================
// Shopping Session
// ============================================================================
//
// One active browsing session: the flat cart selection sequence and the
// remembered customer profile. State lives behind the injected storage port
// and every mutation writes back immediately, so a session survives between
// visits exactly as far as its storage does.
//
// ============================================================================

const CART_KEY: &str = "cart";
const PROFILE_KEY: &str = "user";

pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl Session {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// The flat selection sequence, one entry per add.
    pub fn selections(&self) -> Vec<Product> {
        match self.storage.get(CART_KEY) {
            Some(blob) => serde_json::from_str(&blob).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored cart is unreadable, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    fn write_selections(&self, selections: &[Product]) {
        match serde_json::to_string(selections) {
            Ok(blob) => self.storage.set(CART_KEY, blob),
            Err(err) => tracing::error!(error = %err, "failed to encode cart"),
        }
    }

    pub fn add_to_cart(&self, product: Product) {
        let mut selections = self.selections();
        selections.push(product);
        self.write_selections(&selections);
    }

    /// Remove every copy of a product.
    pub fn remove_from_cart(&self, product_id: &str) {
        let mut selections = self.selections();
        selections.retain(|p| p.id != product_id);
        self.write_selections(&selections);
    }

    pub fn set_quantity(&self, product_id: &str, quantity: i32) -> Result<(), CartError> {
        let mut selections = self.selections();
        cart::set_quantity(&mut selections, product_id, quantity)?;
        self.write_selections(&selections);
        Ok(())
    }

    /// The grouped cart view.
    pub fn lines(&self) -> Vec<CartLine> {
        cart::group(&self.selections())
    }

    pub fn totals(&self, tax_rate_percent: u32) -> Totals {
        cart::compute_totals(&self.lines(), tax_rate_percent)
    }

    pub fn clear_cart(&self) {
        self.storage.clear(CART_KEY);
    }

    pub fn profile(&self) -> Option<CustomerInfo> {
        let blob = self.storage.get(PROFILE_KEY)?;
        match serde_json::from_str(&blob) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!(error = %err, "stored profile is unreadable");
                None
            }
        }
    }

    pub fn save_profile(&self, profile: &CustomerInfo) {
        match serde_json::to_string(profile) {
            Ok(blob) => self.storage.set(PROFILE_KEY, blob),
            Err(err) => tracing::error!(error = %err, "failed to encode profile"),
        }
    }

    pub fn clear_profile(&self) {
        self.storage.clear(PROFILE_KEY);
    }

    /// Assemble an order draft from the current cart. The caller clears the
    /// cart only after the order is accepted, so a failed checkout loses
    /// nothing.
    pub fn checkout_draft(&self, customer: CustomerInfo) -> Result<OrderDraft, CartError> {
        let lines = self.lines();
        if lines.is_empty() {
            return Err(CartError::Empty);
        }
        Ok(OrderDraft::from_lines(&lines, customer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TAX_RATE_PERCENT;
    use crate::domain::product::NewProduct;

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

    #[test]
    fn test_cart_round_trips_through_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());

        session.add_to_cart(product("a", 100));
        session.add_to_cart(product("a", 100));
        session.add_to_cart(product("b", 50));

        // A second session over the same storage sees the same cart.
        let later = Session::new(storage);
        let lines = later.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_totals_follow_cart_edits() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        session.add_to_cart(product("a", 100));
        session.add_to_cart(product("a", 100));
        session.add_to_cart(product("b", 50));

        let totals = session.totals(DEFAULT_TAX_RATE_PERCENT);
        assert_eq!(totals.subtotal, 250);
        assert_eq!(totals.tax, 45);
        assert_eq!(totals.total, 295);

        session.set_quantity("a", 0).unwrap();
        assert_eq!(session.totals(DEFAULT_TAX_RATE_PERCENT).subtotal, 50);
    }

    #[test]
    fn test_remove_drops_every_copy() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        session.add_to_cart(product("a", 100));
        session.add_to_cart(product("a", 100));

        session.remove_from_cart("a");
        assert!(session.lines().is_empty());
    }

    #[test]
    fn test_clear_cart_empties_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());
        session.add_to_cart(product("a", 100));

        session.clear_cart();
        assert!(session.lines().is_empty());
        assert!(storage.get(CART_KEY).is_none());
    }

    #[test]
    fn test_negative_quantity_rejected_and_cart_untouched() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        session.add_to_cart(product("a", 100));

        let err = session.set_quantity("a", -3).unwrap_err();
        assert!(matches!(err, CartError::NegativeQuantity(-3)));
        assert_eq!(session.lines()[0].quantity, 1);
    }

    #[test]
    fn test_corrupt_cart_blob_reads_as_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(CART_KEY, "not json".to_string());

        let session = Session::new(storage);
        assert!(session.selections().is_empty());
    }

    #[test]
    fn test_profile_round_trip() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        assert!(session.profile().is_none());

        session.save_profile(&customer());
        assert_eq!(session.profile().unwrap().email, "asha@example.com");

        session.clear_profile();
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_checkout_draft_from_cart() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        session.add_to_cart(product("a", 100));
        session.add_to_cart(product("a", 100));

        let draft = session.checkout_draft(customer()).unwrap();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 2);

        // Cart still intact until the order is accepted.
        assert_eq!(session.lines().len(), 1);
    }

    #[test]
    fn test_checkout_with_empty_cart_rejected() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        let err = session.checkout_draft(customer()).unwrap_err();
        assert!(matches!(err, CartError::Empty));
    }
}
