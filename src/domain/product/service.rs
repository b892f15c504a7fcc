use std::sync::Arc;

use chrono::Utc;

use crate::store::Collection;

use super::aggregate::Product;
use super::errors::ProductError;
use super::value_objects::{NewProduct, ProductPatch, Review, ReviewInput};

// ============================================================================
// Product Service
// ============================================================================
//
// Orchestrates: validated input → Product mutation → document store.
// Every mutation is a single atomic store operation.
//
// ============================================================================

pub struct ProductService {
    products: Arc<dyn Collection<Product>>,
}

impl ProductService {
    pub fn new(products: Arc<dyn Collection<Product>>) -> Self {
        Self { products }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.products.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Product, ProductError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub async fn create(&self, input: NewProduct) -> Result<Product, ProductError> {
        validate_new_product(&input)?;

        let product = Product::create(input);
        self.products.insert(product.clone()).await?;

        tracing::info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    pub async fn update(&self, id: &str, patch: ProductPatch) -> Result<Product, ProductError> {
        validate_patch(&patch)?;

        let updated = self
            .products
            .update_with(
                id,
                Box::new(move |product: &mut Product| {
                    product.apply_patch(patch);
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(product_id = %updated.id, "product updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ProductError> {
        if !self.products.delete(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Append a review and recompute rating/review count in one atomic store
    /// update.
    pub async fn add_review(&self, id: &str, input: ReviewInput) -> Result<Product, ProductError> {
        if !(1..=5).contains(&input.rating) {
            return Err(ProductError::InvalidRating(input.rating));
        }
        let mut fields = Vec::new();
        if input.user.trim().is_empty() {
            fields.push("user".to_string());
        }
        if input.comment.trim().is_empty() {
            fields.push("comment".to_string());
        }
        if !fields.is_empty() {
            return Err(ProductError::Validation { fields });
        }

        let review = Review {
            user: input.user,
            rating: input.rating,
            comment: input.comment,
            date: Utc::now(),
        };

        let updated = self
            .products
            .update_with(
                id,
                Box::new(move |product: &mut Product| {
                    product.add_review(review);
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(
            product_id = %updated.id,
            rating = updated.rating,
            review_count = updated.review_count,
            "review added"
        );
        Ok(updated)
    }

    /// Clamped stock decrement, atomic per product.
    pub async fn decrement_stock(&self, id: &str, quantity: u32) -> Result<Product, ProductError> {
        let updated = self
            .products
            .update_with(
                id,
                Box::new(move |product: &mut Product| {
                    product.decrement_stock(quantity);
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(product_id = %updated.id, in_stock = updated.in_stock, "stock adjusted");
        Ok(updated)
    }
}

fn validate_new_product(input: &NewProduct) -> Result<(), ProductError> {
    let mut fields = Vec::new();

    if input.name.trim().is_empty() {
        fields.push("name".to_string());
    }
    if input.description.trim().is_empty() {
        fields.push("description".to_string());
    }
    if input.category.trim().is_empty() {
        fields.push("category".to_string());
    }
    if input.price < 0 {
        fields.push("price".to_string());
    }
    if input.discount.is_some_and(|d| d > 100) {
        fields.push("discount".to_string());
    }
    if input.original_price.is_some_and(|p| p < 0) {
        fields.push("originalPrice".to_string());
    }
    // A discounted product must carry an original price at least the selling
    // price.
    if input.discount.unwrap_or(0) > 0 {
        let original = input.original_price.unwrap_or(input.price);
        if original < input.price {
            fields.push("originalPrice".to_string());
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ProductError::Validation { fields })
    }
}

fn validate_patch(patch: &ProductPatch) -> Result<(), ProductError> {
    let mut fields = Vec::new();

    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        fields.push("name".to_string());
    }
    if patch
        .description
        .as_deref()
        .is_some_and(|d| d.trim().is_empty())
    {
        fields.push("description".to_string());
    }
    if patch
        .category
        .as_deref()
        .is_some_and(|c| c.trim().is_empty())
    {
        fields.push("category".to_string());
    }
    if patch.price.is_some_and(|p| p < 0) {
        fields.push("price".to_string());
    }
    if patch.discount.is_some_and(|d| d > 100) {
        fields.push("discount".to_string());
    }
    if patch.original_price.is_some_and(|p| p < 0) {
        fields.push("originalPrice".to_string());
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ProductError::Validation { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCollection;

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryCollection::new("products")))
    }

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: 100,
            description: "a product".to_string(),
            category: "misc".to_string(),
            image: None,
            discount: None,
            original_price: None,
            in_stock: Some(3),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();
        let created = service.create(new_product("Widget")).await.unwrap();

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = service();
        let err = service.get("nope").await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_reports_offending_fields() {
        let service = service();
        let mut input = new_product("");
        input.description = "  ".to_string();
        input.price = -1;

        let err = service.create(input).await.unwrap_err();
        match err {
            ProductError::Validation { fields } => {
                assert_eq!(fields, vec!["name", "description", "price"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_discount_requires_consistent_original_price() {
        let service = service();
        let mut input = new_product("Widget");
        input.discount = Some(20);
        input.original_price = Some(50); // below the selling price

        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service();
        let err = service
            .update("nope", ProductPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let created = service.create(new_product("Widget")).await.unwrap();

        service.delete(&created.id).await.unwrap();
        let err = service.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_review_updates_aggregate() {
        let service = service();
        let created = service.create(new_product("Widget")).await.unwrap();

        for (user, rating) in [("a", 4), ("b", 5)] {
            service
                .add_review(
                    &created.id,
                    ReviewInput {
                        user: user.to_string(),
                        rating,
                        comment: "nice".to_string(),
                    },
                )
                .await
                .unwrap();
        }

        let updated = service
            .add_review(
                &created.id,
                ReviewInput {
                    user: "c".to_string(),
                    rating: 5,
                    comment: "great".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.review_count, 3);
        assert!((updated.rating - 14.0 / 3.0).abs() < 1e-9);
        assert_eq!(updated.reviews.len(), 3);
    }

    #[tokio::test]
    async fn test_review_rating_out_of_range() {
        let service = service();
        let created = service.create(new_product("Widget")).await.unwrap();

        let err = service
            .add_review(
                &created.id,
                ReviewInput {
                    user: "a".to_string(),
                    rating: 6,
                    comment: "too good".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::InvalidRating(6)));
    }

    #[tokio::test]
    async fn test_decrement_stock_never_negative() {
        let service = service();
        let created = service.create(new_product("Widget")).await.unwrap();
        assert_eq!(created.in_stock, 3);

        let updated = service.decrement_stock(&created.id, 5).await.unwrap();
        assert_eq!(updated.in_stock, 0);
    }
}
