use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Product Value Objects
// ============================================================================

/// Image used when a product is created without one.
pub const DEFAULT_PRODUCT_IMAGE: &str = "https://picsum.photos/500";

/// A customer review, embedded in its product. Append-only: reviews are
/// never edited or removed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Review {
    pub user: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Input for appending a review to a product.
#[derive(Deserialize, Clone, Debug)]
pub struct ReviewInput {
    pub user: String,
    pub rating: u8,
    pub comment: String,
}

/// Input for creating a product. Optional fields get the same defaults the
/// catalog has always applied: discount 0, original price = price, stock 0,
/// placeholder image.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub discount: Option<u8>,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub in_stock: Option<u32>,
}

/// Partial update for a product. Absent fields are left unchanged; the
/// product id is immutable and cannot appear here.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub discount: Option<u8>,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub in_stock: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_serialization() {
        let review = Review {
            user: "Asha".to_string(),
            rating: 5,
            comment: "Excellent".to_string(),
            date: Utc::now(),
        };

        let json = serde_json::to_string(&review).unwrap();
        let deserialized: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(review, deserialized);
    }

    #[test]
    fn test_new_product_optional_fields_default() {
        let input: NewProduct = serde_json::from_str(
            r#"{"name":"Widget","price":100,"description":"d","category":"tools"}"#,
        )
        .unwrap();

        assert!(input.image.is_none());
        assert!(input.discount.is_none());
        assert!(input.original_price.is_none());
        assert!(input.in_stock.is_none());
    }

    #[test]
    fn test_patch_uses_wire_field_names() {
        let patch: ProductPatch =
            serde_json::from_str(r#"{"originalPrice":500,"inStock":3}"#).unwrap();
        assert_eq!(patch.original_price, Some(500));
        assert_eq!(patch.in_stock, Some(3));
        assert!(patch.name.is_none());
    }
}
