use serde::Serialize;
use uuid::Uuid;

use stockpulse_catalog::{Catalog, PricingEngine, StockState};

/// What a product page shows for a priced product
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayPrice {
    pub amount: f64,
    pub notice: Option<String>,
}

/// Display price for a product at its current stock level, with the
/// customer notice when one applies. None when the product is unknown.
pub fn product_display(
    catalog: &impl Catalog,
    engine: &PricingEngine,
    product_id: &Uuid,
) -> Option<DisplayPrice> {
    let stock = catalog.stock_state(product_id)?;
    let base = catalog.base_price(product_id)?;

    let amount = engine.adjust_price(base, stock.quantity, stock.manages_stock);
    let notice = adjustment_notice(engine, &stock);

    Some(DisplayPrice { amount, notice })
}

/// Configured customer message, shown whenever the quantity lands in any
/// tier and messaging is enabled. The per-tier wording lives on
/// `describe_adjustment`; this is the generic storefront notice.
pub fn adjustment_notice(engine: &PricingEngine, stock: &StockState) -> Option<String> {
    let summary = engine.describe_adjustment(stock.quantity, stock.manages_stock);
    let config = engine.config();

    if !summary.message.is_empty() && config.message_enabled {
        Some(config.message_text.clone())
    } else {
        None
    }
}
