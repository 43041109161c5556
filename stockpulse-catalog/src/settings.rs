use serde::Deserialize;
use std::env;

use crate::pricing::PricingConfig;

/// Raw persisted settings record, field for field what the settings store
/// keeps. Every field defaults, so an empty store yields the documented
/// default configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    #[serde(default = "default_enabled")]
    pub enable_pricing: bool,
    #[serde(default = "default_low_threshold")]
    pub low_stock_threshold: i32,
    #[serde(default = "default_low_increase")]
    pub low_stock_price_increase: f64,
    #[serde(default = "default_medium_threshold")]
    pub medium_stock_threshold: i32,
    #[serde(default = "default_medium_increase")]
    pub medium_stock_price_increase: f64,
    #[serde(default = "default_high_threshold")]
    pub high_stock_threshold: i32,
    #[serde(default = "default_high_decrease")]
    pub high_stock_price_decrease: f64,
    #[serde(default = "default_enabled")]
    pub customer_message_enabled: bool,
    #[serde(default = "default_message")]
    pub customer_message: String,
}

fn default_enabled() -> bool {
    true
}
fn default_low_threshold() -> i32 {
    5
}
fn default_low_increase() -> f64 {
    40.0
}
fn default_medium_threshold() -> i32 {
    20
}
fn default_medium_increase() -> f64 {
    20.0
}
fn default_high_threshold() -> i32 {
    100
}
fn default_high_decrease() -> f64 {
    15.0
}
fn default_message() -> String {
    "High demand – price adjusted based on availability".to_string()
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            enable_pricing: default_enabled(),
            low_stock_threshold: default_low_threshold(),
            low_stock_price_increase: default_low_increase(),
            medium_stock_threshold: default_medium_threshold(),
            medium_stock_price_increase: default_medium_increase(),
            high_stock_threshold: default_high_threshold(),
            high_stock_price_decrease: default_high_decrease(),
            customer_message_enabled: default_enabled(),
            customer_message: default_message(),
        }
    }
}

impl PricingSettings {
    /// Load settings from the layered sources: `config/pricing.*`, then an
    /// environment-specific file picked by RUN_MODE, then STOCKPULSE_*
    /// environment variables. Every layer is optional.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/pricing").required(false))
            .add_source(
                config::File::with_name(&format!("config/pricing.{}", run_mode)).required(false),
            )
            .add_source(config::Environment::with_prefix("STOCKPULSE"))
            .build()?;

        s.try_deserialize()
    }

    /// Typed config for the engine, normalized once at this boundary rather
    /// than re-derived on every calculation
    pub fn into_config(self) -> PricingConfig {
        PricingConfig {
            enabled: self.enable_pricing,
            low_stock_threshold: self.low_stock_threshold,
            low_stock_increase_pct: self.low_stock_price_increase,
            medium_stock_threshold: self.medium_stock_threshold,
            medium_stock_increase_pct: self.medium_stock_price_increase,
            high_stock_threshold: self.high_stock_threshold,
            high_stock_decrease_pct: self.high_stock_price_decrease,
            message_enabled: self.customer_message_enabled,
            message_text: self.customer_message,
        }
        .sanitized()
    }
}
