use uuid::Uuid;

/// Recorded whenever an add-to-cart lands on an adjusted price. The event id
/// doubles as the cart line's uniqueness marker, so two adds that price
/// differently can never be coalesced into one line.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct PriceAdjustedEvent {
    pub id: Uuid,
    pub product_id: Uuid,
    pub original_price: f64,
    pub adjusted_price: f64,
    pub adjustment_percentage: f64,
    pub occurred_at: i64,
}

impl PriceAdjustedEvent {
    pub fn new(
        product_id: Uuid,
        original_price: f64,
        adjusted_price: f64,
        adjustment_percentage: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            original_price,
            adjusted_price,
            adjustment_percentage,
            occurred_at: chrono::Utc::now().timestamp(),
        }
    }
}
