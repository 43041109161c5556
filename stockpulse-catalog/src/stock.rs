use serde::{Deserialize, Serialize};

/// Stock-management view of a product as reported by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StockState {
    /// Is a numeric inventory count being tracked for this product?
    pub manages_stock: bool,

    /// Current quantity, when the catalog knows one
    pub quantity: Option<i32>,
}

impl StockState {
    pub fn tracked(quantity: i32) -> Self {
        Self {
            manages_stock: true,
            quantity: Some(quantity),
        }
    }

    pub fn untracked() -> Self {
        Self {
            manages_stock: false,
            quantity: None,
        }
    }

    /// Quantity usable for pricing. A product only counts as tracked when
    /// stock management is on and a non-negative quantity is known; anything
    /// else is exempt from adjustment.
    pub fn tracked_quantity(&self) -> Option<i32> {
        if !self.manages_stock {
            return None;
        }
        match self.quantity {
            Some(q) if q >= 0 => Some(q),
            _ => None,
        }
    }
}
