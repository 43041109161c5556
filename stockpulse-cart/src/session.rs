//! Serialization boundary for handing cart lines to an external session
//! store and rebuilding a cart from them. Restored lines keep their add-time
//! adjusted price; stock is not re-read.

use crate::manager::{CartError, CartManager};
use crate::models::CartLine;

/// Serialize the cart's lines for the session store
pub fn to_session(cart: &CartManager) -> Result<String, CartError> {
    Ok(serde_json::to_string(cart.lines())?)
}

/// Rebuild a cart from stored lines. A line whose stored adjustment carries
/// a valid price has that price re-applied as its unit price; an invalid
/// stored price is discarded with a warning and the line survives at its
/// serialized unit price without the snapshot.
pub fn from_session(raw: &str) -> Result<CartManager, CartError> {
    let lines: Vec<CartLine> = serde_json::from_str(raw)?;
    let mut cart = CartManager::from_lines(lines);

    for line in cart.lines_mut() {
        match line.adjustment {
            Some(adjustment) if adjustment.adjusted_price.is_finite()
                && adjustment.adjusted_price >= 0.0 =>
            {
                line.unit_price = adjustment.adjusted_price;
            }
            Some(adjustment) => {
                tracing::warn!(
                    product_id = %line.product_id,
                    stored_price = adjustment.adjusted_price,
                    "discarding invalid stored price adjustment"
                );
                line.adjustment = None;
            }
            None => {}
        }
    }

    Ok(cart)
}
