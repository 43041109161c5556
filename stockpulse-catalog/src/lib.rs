pub mod product;
pub mod pricing;
pub mod stock;
pub mod settings;

pub use product::{Catalog, CatalogError, InMemoryCatalog, Product};
pub use pricing::{AdjustmentResult, AdjustmentSummary, PricingConfig, PricingEngine, StockTier};
pub use settings::PricingSettings;
pub use stock::StockState;
