use serde::Serialize;
use uuid::Uuid;

use stockpulse_cart::{CartLine, CartManager};
use stockpulse_catalog::PricingConfig;

/// Label attached to cart and order lines whose price was adjusted
pub const DYNAMIC_PRICING_NOTICE: &str = "Dynamic Pricing Notice";

/// One display row of extra line metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineMeta {
    pub key: String,
    pub value: String,
}

/// Order line item derived from a cart line, price snapshot included
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: f64,
    pub original_unit_price: Option<f64>,
    pub meta: Vec<LineMeta>,
}

/// Extra display rows for a cart line: the dynamic pricing notice when the
/// line carries an adjustment and messaging is on
pub fn cart_line_meta(line: &CartLine, config: &PricingConfig) -> Vec<LineMeta> {
    if line.has_adjustment() && config.enabled && config.message_enabled {
        vec![LineMeta {
            key: DYNAMIC_PRICING_NOTICE.to_string(),
            value: config.message_text.clone(),
        }]
    } else {
        Vec::new()
    }
}

/// Order lines for checkout, carrying each cart line's snapshotted unit
/// price and its notice metadata
pub fn from_cart(cart: &CartManager, config: &PricingConfig) -> Vec<OrderLine> {
    cart.lines()
        .iter()
        .map(|line| OrderLine {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
            original_unit_price: line.adjustment.map(|a| a.original_price),
            meta: cart_line_meta(line, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpulse_cart::PriceAdjustment;

    fn adjusted_line() -> CartLine {
        CartLine::new(
            Uuid::new_v4(),
            1,
            140.0,
            Some(PriceAdjustment {
                adjusted_price: 140.0,
                original_price: 100.0,
                marker: Uuid::new_v4(),
            }),
        )
    }

    #[test]
    fn test_adjusted_line_carries_notice() {
        let config = PricingConfig::default();
        let meta = cart_line_meta(&adjusted_line(), &config);

        assert_eq!(meta.len(), 1);
        assert_eq!(meta[0].key, DYNAMIC_PRICING_NOTICE);
        assert_eq!(meta[0].value, config.message_text);
    }

    #[test]
    fn test_plain_line_has_no_notice() {
        let line = CartLine::new(Uuid::new_v4(), 2, 100.0, None);
        assert!(cart_line_meta(&line, &PricingConfig::default()).is_empty());
    }

    #[test]
    fn test_notice_suppressed_when_messaging_off() {
        let config = PricingConfig {
            message_enabled: false,
            ..PricingConfig::default()
        };
        assert!(cart_line_meta(&adjusted_line(), &config).is_empty());
    }

    #[test]
    fn test_order_lines_keep_snapshotted_prices() {
        let config = PricingConfig::default();
        let plain = CartLine::new(Uuid::new_v4(), 2, 100.0, None);
        let cart = CartManager::from_lines(vec![adjusted_line(), plain]);

        let lines = from_cart(&cart, &config);
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].unit_price, 140.0);
        assert_eq!(lines[0].original_unit_price, Some(100.0));
        assert_eq!(lines[0].meta.len(), 1);

        assert_eq!(lines[1].unit_price, 100.0);
        assert_eq!(lines[1].original_unit_price, None);
        assert!(lines[1].meta.is_empty());
    }
}
