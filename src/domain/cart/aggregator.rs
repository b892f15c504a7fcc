use serde::Serialize;

use crate::domain::product::Product;

use super::errors::CartError;

// ============================================================================
// Cart Aggregator
// ============================================================================
//
// Converts the flat selection sequence into grouped lines and edits the
// underlying sequence when a line's quantity changes. The flat sequence is
// the single source of truth; `group` is how every view of the cart is
// produced.
//
// ============================================================================

/// One grouped cart line: a product snapshot plus how many times it was
/// selected. Derived, never persisted.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

/// Group selections by product id, preserving first-seen order of distinct
/// ids and summing duplicate occurrences into one line.
pub fn group(selections: &[Product]) -> Vec<CartLine> {
    let mut lines: Vec<CartLine> = Vec::new();

    for product in selections {
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    lines
}

/// Set the quantity of one product in the selection sequence.
///
/// - `0` removes every copy of the product;
/// - an increase appends further copies;
/// - a decrease removes that many copies (they are identical, so which ones
///   is immaterial);
/// - a negative quantity is rejected.
pub fn set_quantity(
    selections: &mut Vec<Product>,
    product_id: &str,
    quantity: i32,
) -> Result<(), CartError> {
    if quantity < 0 {
        return Err(CartError::NegativeQuantity(quantity));
    }
    let quantity = quantity as usize;

    let current = selections.iter().filter(|p| p.id == product_id).count();
    if current == 0 {
        // Removing an absent product is a harmless no-op; growing one is not,
        // because there is no snapshot to copy.
        if quantity == 0 {
            return Ok(());
        }
        return Err(CartError::NotInCart(product_id.to_string()));
    }

    if quantity == 0 {
        selections.retain(|p| p.id != product_id);
    } else if quantity > current {
        let template = selections
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or_else(|| CartError::NotInCart(product_id.to_string()))?;
        selections.extend(std::iter::repeat(template).take(quantity - current));
    } else {
        let mut to_remove = current - quantity;
        selections.retain(|p| {
            if p.id == product_id && to_remove > 0 {
                to_remove -= 1;
                return false;
            }
            true
        });
    }

    Ok(())
}
