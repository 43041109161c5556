//! Structured-data (schema.org offer markup) price rewriting, so crawlers
//! see the same adjusted price customers are shown and charged.

use serde::Serialize;
use uuid::Uuid;

use stockpulse_catalog::{Catalog, PricingEngine};

/// Adjusted prices formatted for schema markup
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchemaPrices {
    pub regular: String,
    pub sale: Option<String>,
}

/// Adjusted regular and sale prices for a product, formatted to two
/// decimals. None when the product is unknown.
pub fn schema_prices(
    catalog: &impl Catalog,
    engine: &PricingEngine,
    product_id: &Uuid,
) -> Option<SchemaPrices> {
    let stock = catalog.stock_state(product_id)?;
    let regular = catalog.regular_price(product_id)?;

    let adjusted_regular = engine
        .adjust_price(regular, stock.quantity, stock.manages_stock)
        .max(0.0);
    let adjusted_sale = catalog.sale_price(product_id).map(|sale| {
        format_decimal(
            engine
                .adjust_price(sale, stock.quantity, stock.manages_stock)
                .max(0.0),
        )
    });

    Some(SchemaPrices {
        regular: format_decimal(adjusted_regular),
        sale: adjusted_sale,
    })
}

/// Rewrite an offer markup block in place: `price` and
/// `priceSpecification.price` both carry the adjusted regular price.
/// Markup for unknown products, or with pricing disabled, passes through
/// untouched.
pub fn rewrite_offer_markup(
    mut markup: serde_json::Value,
    catalog: &impl Catalog,
    engine: &PricingEngine,
    product_id: &Uuid,
) -> serde_json::Value {
    if !engine.config().enabled {
        return markup;
    }

    let Some(prices) = schema_prices(catalog, engine, product_id) else {
        return markup;
    };

    if let Some(price) = markup.get_mut("price") {
        *price = serde_json::Value::String(prices.regular.clone());
    }
    if let Some(price) = markup.pointer_mut("/priceSpecification/price") {
        *price = serde_json::Value::String(prices.regular.clone());
    }

    markup
}

fn format_decimal(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stockpulse_catalog::{InMemoryCatalog, PricingConfig, Product};

    fn setup(quantity: i32) -> (InMemoryCatalog, Uuid) {
        let mut catalog = InMemoryCatalog::new();
        let id = catalog.insert(Product::new("SKU-1", "Widget", 100.0).with_tracked_stock(quantity));
        (catalog, id)
    }

    #[test]
    fn test_markup_prices_are_rewritten() {
        let (catalog, id) = setup(3);
        let engine = PricingEngine::new(PricingConfig::default());

        let markup = json!({
            "@type": "Offer",
            "price": "100.00",
            "priceCurrency": "USD",
            "priceSpecification": { "price": "100.00", "priceCurrency": "USD" }
        });
        let rewritten = rewrite_offer_markup(markup, &catalog, &engine, &id);

        assert_eq!(rewritten["price"], "140.00");
        assert_eq!(rewritten["priceSpecification"]["price"], "140.00");
        // Untouched fields survive
        assert_eq!(rewritten["priceCurrency"], "USD");
    }

    #[test]
    fn test_markup_without_price_fields_passes_through() {
        let (catalog, id) = setup(3);
        let engine = PricingEngine::new(PricingConfig::default());

        let markup = json!({ "@type": "Offer", "availability": "InStock" });
        let rewritten = rewrite_offer_markup(markup.clone(), &catalog, &engine, &id);
        assert_eq!(rewritten, markup);
    }

    #[test]
    fn test_disabled_engine_leaves_markup_alone() {
        let (catalog, id) = setup(3);
        let engine = PricingEngine::new(PricingConfig {
            enabled: false,
            ..PricingConfig::default()
        });

        let markup = json!({ "price": "100.00" });
        let rewritten = rewrite_offer_markup(markup.clone(), &catalog, &engine, &id);
        assert_eq!(rewritten, markup);
    }

    #[test]
    fn test_sale_price_is_adjusted_too() {
        let mut catalog = InMemoryCatalog::new();
        let mut product = Product::new("SKU-1", "Widget", 100.0).with_tracked_stock(3);
        product.sale_price = Some(80.0);
        let id = catalog.insert(product);
        let engine = PricingEngine::new(PricingConfig::default());

        let prices = schema_prices(&catalog, &engine, &id).unwrap();
        assert_eq!(prices.regular, "140.00");
        assert_eq!(prices.sale.as_deref(), Some("112.00"));
    }

    #[test]
    fn test_unknown_product_passes_through() {
        let (catalog, _) = setup(3);
        let engine = PricingEngine::new(PricingConfig::default());

        let markup = json!({ "price": "100.00" });
        let rewritten = rewrite_offer_markup(markup.clone(), &catalog, &engine, &Uuid::new_v4());
        assert_eq!(rewritten, markup);
    }
}
