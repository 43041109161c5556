use serde::{Deserialize, Serialize};

use crate::stock::StockState;

/// Stock band a quantity falls into after first-match-wins evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockTier {
    Low,
    Medium,
    High,
    None,
}

/// Tier thresholds and percentages for stock-based price adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Master switch; disabled means every price passes through unchanged
    pub enabled: bool,

    /// Quantity at or below which the low-stock increase applies
    pub low_stock_threshold: i32,

    /// Percentage increase for the low tier (40 means +40%)
    pub low_stock_increase_pct: f64,

    /// Quantity at or below which the medium-stock increase applies
    pub medium_stock_threshold: i32,

    /// Percentage increase for the medium tier
    pub medium_stock_increase_pct: f64,

    /// Quantity at or above which the high-stock decrease applies
    pub high_stock_threshold: i32,

    /// Percentage decrease for the high tier (15 means -15%)
    pub high_stock_decrease_pct: f64,

    /// Show the customer-facing notice alongside adjusted prices?
    pub message_enabled: bool,

    /// Customer-facing notice text
    pub message_text: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            low_stock_threshold: 5,
            low_stock_increase_pct: 40.0,
            medium_stock_threshold: 20,
            medium_stock_increase_pct: 20.0,
            high_stock_threshold: 100,
            high_stock_decrease_pct: 15.0,
            message_enabled: true,
            message_text: "High demand – price adjusted based on availability".to_string(),
        }
    }
}

impl PricingConfig {
    /// Clamp negative thresholds and percentages to zero and coerce
    /// non-finite percentages to zero. Ordering between thresholds is
    /// deliberately not enforced; evaluation order in `tier` decides
    /// precedence when bands overlap.
    pub fn sanitized(&self) -> Self {
        Self {
            enabled: self.enabled,
            low_stock_threshold: self.low_stock_threshold.max(0),
            low_stock_increase_pct: sanitize_pct(self.low_stock_increase_pct),
            medium_stock_threshold: self.medium_stock_threshold.max(0),
            medium_stock_increase_pct: sanitize_pct(self.medium_stock_increase_pct),
            high_stock_threshold: self.high_stock_threshold.max(0),
            high_stock_decrease_pct: sanitize_pct(self.high_stock_decrease_pct),
            message_enabled: self.message_enabled,
            message_text: self.message_text.clone(),
        }
    }
}

fn sanitize_pct(pct: f64) -> f64 {
    if pct.is_finite() {
        pct.max(0.0)
    } else {
        0.0
    }
}

/// Full outcome of pricing one product at one stock level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustmentResult {
    pub adjusted_price: f64,

    /// Signed; positive = increase, negative = decrease, zero = none
    pub adjustment_percentage: f64,

    pub message: String,
}

/// Tier outcome without a price, for UI call sites
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustmentSummary {
    pub has_adjustment: bool,
    pub adjustment_percentage: f64,
    pub message: String,
}

impl AdjustmentSummary {
    fn none() -> Self {
        Self {
            has_adjustment: false,
            adjustment_percentage: 0.0,
            message: String::new(),
        }
    }
}

/// Stock-tier pricing engine. Stateless apart from its config; every call is
/// an independent calculation over the inputs it is handed.
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Tier for a quantity. Branches are checked low, then medium, then high;
    /// when bands overlap the earlier branch wins, so a quantity under both
    /// the low and medium thresholds lands in the low tier.
    pub fn tier(&self, quantity: i32) -> StockTier {
        let c = &self.config;
        if quantity <= c.low_stock_threshold {
            StockTier::Low
        } else if quantity <= c.medium_stock_threshold {
            StockTier::Medium
        } else if quantity >= c.high_stock_threshold {
            StockTier::High
        } else {
            StockTier::None
        }
    }

    /// Signed fractional multiplier delta for a quantity (0.4 means +40%)
    pub fn compute_adjustment_factor(&self, quantity: i32) -> f64 {
        match self.tier(quantity) {
            StockTier::Low => self.config.low_stock_increase_pct / 100.0,
            StockTier::Medium => self.config.medium_stock_increase_pct / 100.0,
            StockTier::High => -self.config.high_stock_decrease_pct / 100.0,
            StockTier::None => 0.0,
        }
    }

    /// Adjusted price for a product at a stock level. Returns the original
    /// price unchanged when pricing is disabled, the price is negative or
    /// not finite, stock is unmanaged, or the quantity is absent/negative.
    /// Never errors; the result is clamped at zero.
    pub fn adjust_price(
        &self,
        original_price: f64,
        quantity: Option<i32>,
        manages_stock: bool,
    ) -> f64 {
        if !self.config.enabled || !original_price.is_finite() || original_price < 0.0 {
            return original_price;
        }

        let stock = StockState {
            manages_stock,
            quantity,
        };
        let quantity = match stock.tracked_quantity() {
            Some(q) => q,
            None => return original_price,
        };

        let factor = self.compute_adjustment_factor(quantity);
        let adjusted = (original_price * (1.0 + factor)).max(0.0);

        if adjusted != original_price {
            tracing::debug!(
                quantity,
                factor,
                original_price,
                adjusted,
                "applied stock tier price adjustment"
            );
        }

        adjusted
    }

    /// Convenience over `adjust_price` + `describe_adjustment` for call sites
    /// that want the price and the messaging in one record
    pub fn adjust(&self, original_price: f64, stock: &StockState) -> AdjustmentResult {
        let adjusted = self.adjust_price(original_price, stock.quantity, stock.manages_stock);
        let summary = self.describe_adjustment(stock.quantity, stock.manages_stock);
        AdjustmentResult {
            adjusted_price: adjusted,
            adjustment_percentage: summary.adjustment_percentage,
            message: summary.message,
        }
    }

    /// Mirror of the tier logic without a price, for display call sites.
    /// The percentage is reported as an absolute value in the text and
    /// signed in the numeric field.
    pub fn describe_adjustment(
        &self,
        quantity: Option<i32>,
        manages_stock: bool,
    ) -> AdjustmentSummary {
        if !self.config.enabled {
            return AdjustmentSummary::none();
        }

        let stock = StockState {
            manages_stock,
            quantity,
        };
        let quantity = match stock.tracked_quantity() {
            Some(q) => q,
            None => return AdjustmentSummary::none(),
        };

        let (pct, message) = match self.tier(quantity) {
            StockTier::Low => {
                let pct = self.config.low_stock_increase_pct;
                (
                    pct,
                    format!("Price increased by {}% due to low stock", pct.trunc()),
                )
            }
            StockTier::Medium => {
                let pct = self.config.medium_stock_increase_pct;
                (
                    pct,
                    format!("Price increased by {}% due to limited stock", pct.trunc()),
                )
            }
            StockTier::High => {
                let pct = self.config.high_stock_decrease_pct;
                (
                    -pct,
                    format!("Price decreased by {}% due to high stock", pct.trunc()),
                )
            }
            StockTier::None => return AdjustmentSummary::none(),
        };

        AdjustmentSummary {
            has_adjustment: pct != 0.0,
            adjustment_percentage: pct,
            message,
        }
    }
}
