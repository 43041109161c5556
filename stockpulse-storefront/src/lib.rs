pub mod display;
pub mod schema;
pub mod order_lines;

pub use display::{adjustment_notice, product_display, DisplayPrice};
pub use order_lines::{cart_line_meta, from_cart, LineMeta, OrderLine, DYNAMIC_PRICING_NOTICE};
pub use schema::{rewrite_offer_markup, schema_prices, SchemaPrices};
