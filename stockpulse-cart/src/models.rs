use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Price snapshot attached to a cart line whose price was adjusted at add
/// time. The marker comes from the adjustment event, not from the price
/// value, so two lines adjusted to the same amount still stay distinct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceAdjustment {
    pub adjusted_price: f64,
    pub original_price: f64,
    pub marker: Uuid,
}

/// One product entry in a cart. The unit price is snapshotted when the line
/// is created and stays authoritative for the line's lifetime; it is never
/// recomputed from a later stock level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: f64,
    pub adjustment: Option<PriceAdjustment>,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn new(
        product_id: Uuid,
        quantity: u32,
        unit_price: f64,
        adjustment: Option<PriceAdjustment>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            unit_price,
            adjustment,
            added_at: Utc::now(),
        }
    }

    pub fn has_adjustment(&self) -> bool {
        self.adjustment.is_some()
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
