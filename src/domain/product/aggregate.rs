use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;

use super::value_objects::{NewProduct, ProductPatch, Review, DEFAULT_PRODUCT_IMAGE};

// ============================================================================
// Product Aggregate - Catalog Record
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    // Identity (immutable once created)
    pub id: String,

    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: String,
    pub category: String,

    // Aggregate review state. Invariant: `rating` is the mean of all review
    // ratings and `review_count` equals `reviews.len()`, recomputed on every
    // append.
    pub rating: f64,
    pub review_count: u32,
    pub reviews: Vec<Review>,

    pub discount: u8,
    pub original_price: i64,
    pub in_stock: u32,
}

impl Product {
    /// Build a new catalog record from validated input, applying the
    /// create-time defaults.
    pub fn create(input: NewProduct) -> Self {
        let original_price = input.original_price.unwrap_or(input.price);
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            price: input.price,
            description: input.description,
            image: input
                .image
                .unwrap_or_else(|| DEFAULT_PRODUCT_IMAGE.to_string()),
            category: input.category,
            rating: 0.0,
            review_count: 0,
            reviews: Vec::new(),
            discount: input.discount.unwrap_or(0),
            original_price,
            in_stock: input.in_stock.unwrap_or(0),
        }
    }

    /// Apply a partial update. Absent fields stay as they are; the id never
    /// changes.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(discount) = patch.discount {
            self.discount = discount;
        }
        if let Some(original_price) = patch.original_price {
            self.original_price = original_price;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }

    /// Append a review and recompute the aggregate rating and review count.
    /// Callers must run this inside a single store update so the pair is
    /// never observable out of sync.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);

        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        self.rating = f64::from(total) / self.reviews.len() as f64;
        self.review_count = self.reviews.len() as u32;
    }

    /// Reduce stock by `quantity`, clamping at zero. Requesting more than is
    /// available empties the stock without error.
    pub fn decrement_stock(&mut self, quantity: u32) {
        self.in_stock = self.in_stock.saturating_sub(quantity);
    }
}

impl Document for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    pub(crate) fn sample_product() -> Product {
        Product::create(NewProduct {
            name: "Wireless Bluetooth Headphones".to_string(),
            price: 2499,
            description: "Over-ear headphones with noise cancellation".to_string(),
            category: "electronics".to_string(),
            image: None,
            discount: None,
            original_price: None,
            in_stock: Some(3),
        })
    }

    fn review(rating: u8) -> Review {
        Review {
            user: "Ravi".to_string(),
            rating,
            comment: "ok".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let product = sample_product();
        assert_eq!(product.discount, 0);
        assert_eq!(product.original_price, product.price);
        assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.review_count, 0);
        assert!(product.reviews.is_empty());
    }

    #[test]
    fn test_patch_leaves_absent_fields_unchanged() {
        let mut product = sample_product();
        let id_before = product.id.clone();

        product.apply_patch(ProductPatch {
            price: Some(1999),
            in_stock: Some(10),
            ..Default::default()
        });

        assert_eq!(product.id, id_before);
        assert_eq!(product.price, 1999);
        assert_eq!(product.in_stock, 10);
        assert_eq!(product.name, "Wireless Bluetooth Headphones");
    }

    #[test]
    fn test_add_review_recomputes_rating_and_count() {
        let mut product = sample_product();
        // Two existing reviews summing to 9 (average 4.5).
        product.add_review(review(4));
        product.add_review(review(5));
        assert_eq!(product.review_count, 2);
        assert!((product.rating - 4.5).abs() < 1e-9);

        product.add_review(review(5));
        assert_eq!(product.review_count, 3);
        assert!((product.rating - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_decrement_stock_clamps_at_zero() {
        let mut product = sample_product();
        assert_eq!(product.in_stock, 3);

        product.decrement_stock(5);
        assert_eq!(product.in_stock, 0);

        product.decrement_stock(1);
        assert_eq!(product.in_stock, 0);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let product = sample_product();
        let json = serde_json::to_value(&product).unwrap();

        assert!(json.get("reviewCount").is_some());
        assert!(json.get("originalPrice").is_some());
        assert!(json.get("inStock").is_some());
        assert!(json.get("review_count").is_none());
    }
}
