pub mod models;
pub mod manager;
pub mod session;

pub use manager::{CartError, CartManager};
pub use models::{CartLine, PriceAdjustment};
