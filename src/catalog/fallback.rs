use crate::domain::product::Product;

// ============================================================================
// Fallback Catalog
// ============================================================================
//
// The fixed local product list served whenever the remote catalog is
// unreachable. Review documents are not carried here; the aggregate
// rating/review counts are display data that ships with the list.
//
// ============================================================================

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    category: &'static str,
    rating: f64,
    review_count: u32,
    discount: u8,
    original_price: i64,
    in_stock: u32,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "elec_001",
        name: "iPhone 17 Pro 256 GB",
        description: "Latest iPhone with advanced features and 256GB storage",
        price: 129_999,
        category: "electronics",
        rating: 5.0,
        review_count: 1250,
        discount: 15,
        original_price: 152_999,
        in_stock: 25,
    },
    Entry {
        id: "elec_002",
        name: "Amazon Echo (4th Gen)",
        description: "Smart speaker with Alexa voice control and premium sound",
        price: 9_999,
        category: "electronics",
        rating: 4.0,
        review_count: 890,
        discount: 20,
        original_price: 12_499,
        in_stock: 15,
    },
    Entry {
        id: "elec_003",
        name: "Sony Alpha ILCE-6700M Mirrorless Camera",
        description: "Professional mirrorless camera with 4K video recording",
        price: 189_999,
        category: "electronics",
        rating: 5.0,
        review_count: 456,
        discount: 10,
        original_price: 210_999,
        in_stock: 8,
    },
    Entry {
        id: "elec_004",
        name: "Eilik Energize Lab Robot Toy",
        description: "Interactive AI robot companion with emotional expressions",
        price: 24_999,
        category: "electronics",
        rating: 4.0,
        review_count: 234,
        discount: 25,
        original_price: 33_332,
        in_stock: 12,
    },
    Entry {
        id: "fash_001",
        name: "Fashion Frill Men's Geometric Locket Necklace",
        description: "Stylish geometric design locket necklace for men",
        price: 1_299,
        category: "fashion",
        rating: 4.0,
        review_count: 167,
        discount: 30,
        original_price: 1_856,
        in_stock: 45,
    },
    Entry {
        id: "fash_002",
        name: "OM SAI Women's Button Front Shirt Dress",
        description: "Elegant button front shirt dress for women",
        price: 2_499,
        category: "fashion",
        rating: 5.0,
        review_count: 289,
        discount: 40,
        original_price: 4_165,
        in_stock: 32,
    },
    Entry {
        id: "fash_003",
        name: "Women's Full Sleeves Ruched Lycra Top",
        description: "Comfortable full sleeves ruched lycra top for women",
        price: 899,
        category: "fashion",
        rating: 4.0,
        review_count: 145,
        discount: 35,
        original_price: 1_383,
        in_stock: 67,
    },
];

/// The fixed local product list.
pub fn products() -> Vec<Product> {
    ENTRIES
        .iter()
        .map(|entry| Product {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            price: entry.price,
            description: entry.description.to_string(),
            image: format!("https://picsum.photos/seed/{}/500", entry.id),
            category: entry.category.to_string(),
            rating: entry.rating,
            review_count: entry.review_count,
            reviews: Vec::new(),
            discount: entry.discount,
            original_price: entry.original_price,
            in_stock: entry.in_stock,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_nonempty_with_unique_ids() {
        let products = products();
        assert!(!products.is_empty());

        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_discounted_entries_are_consistent() {
        for product in products() {
            assert!(product.price >= 0);
            assert!(product.discount <= 100);
            if product.discount > 0 {
                assert!(
                    product.original_price >= product.price,
                    "{} discount without a higher original price",
                    product.id
                );
            }
        }
    }
}
