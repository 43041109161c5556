use uuid::Uuid;

use stockpulse_catalog::{Catalog, PricingEngine};
use stockpulse_shared::PriceAdjustedEvent;

use crate::models::{CartLine, PriceAdjustment};

/// Manages cart lines and the add-time price snapshots attached to them
#[derive(Debug)]
pub struct CartManager {
    lines: Vec<CartLine>,
    events: Vec<PriceAdjustedEvent>,
}

impl CartManager {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Rebuild a cart from previously stored lines. Stored snapshots are
    /// taken as-is; the event log only covers adds made in this session.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines,
            events: Vec::new(),
        }
    }

    /// Add a product to the cart, pricing it at the current stock level.
    /// When the adjusted price differs from the original, the line carries a
    /// snapshot and a fresh uniqueness marker and is never merged with any
    /// other line. Unadjusted adds coalesce into an existing unadjusted line
    /// for the same product.
    pub fn add(
        &mut self,
        catalog: &impl Catalog,
        engine: &PricingEngine,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        let stock = catalog
            .stock_state(&product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;
        let original_price = catalog
            .base_price(&product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;

        let result = engine.adjust(original_price, &stock);

        let adjustment = if result.adjusted_price != original_price {
            let event = PriceAdjustedEvent::new(
                product_id,
                original_price,
                result.adjusted_price,
                result.adjustment_percentage,
            );
            let marker = event.id;
            tracing::info!(
                %product_id,
                original_price,
                adjusted_price = result.adjusted_price,
                %marker,
                "cart line priced with stock adjustment"
            );
            self.events.push(event);
            Some(PriceAdjustment {
                adjusted_price: result.adjusted_price,
                original_price,
                marker,
            })
        } else {
            None
        };

        if adjustment.is_none() {
            if let Some(line) = self
                .lines
                .iter_mut()
                .find(|line| line.product_id == product_id && line.adjustment.is_none())
            {
                line.quantity += quantity;
                return Ok(line.clone());
            }
        }

        let line = CartLine::new(product_id, quantity, result.adjusted_price, adjustment);
        self.lines.push(line.clone());
        Ok(line)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn events(&self) -> &[PriceAdjustedEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.events.clear();
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<CartLine> {
        &mut self.lines
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(Uuid),

    #[error("Stored cart could not be read: {0}")]
    CorruptSession(#[from] serde_json::Error),
}
