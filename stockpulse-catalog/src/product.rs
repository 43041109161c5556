use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stock::StockState;

/// Core product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub regular_price: f64,
    pub sale_price: Option<f64>,
    pub manages_stock: bool,
    pub stock_quantity: Option<i32>,
    pub is_active: bool,
    pub metadata: serde_json::Value,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, regular_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku: sku.into(),
            name: name.into(),
            regular_price,
            sale_price: None,
            manages_stock: false,
            stock_quantity: None,
            is_active: true,
            metadata: serde_json::json!({}),
        }
    }

    pub fn with_tracked_stock(mut self, quantity: i32) -> Self {
        self.manages_stock = true;
        self.stock_quantity = Some(quantity);
        self
    }

    /// Effective selling price before any stock adjustment: the sale price
    /// when one is set, the regular price otherwise
    pub fn base_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.regular_price)
    }

    pub fn stock_state(&self) -> StockState {
        StockState {
            manages_stock: self.manages_stock,
            quantity: self.stock_quantity,
        }
    }
}

/// Synchronous catalog lookup surface the pricing call sites depend on.
/// Stock and prices are read fresh on every call; the engine holds nothing.
pub trait Catalog {
    fn stock_state(&self, product_id: &Uuid) -> Option<StockState>;

    /// Effective price before adjustment (sale price when set)
    fn base_price(&self, product_id: &Uuid) -> Option<f64>;

    fn regular_price(&self, product_id: &Uuid) -> Option<f64>;

    fn sale_price(&self, product_id: &Uuid) -> Option<f64>;
}

/// In-memory catalog for tests and embedding
pub struct InMemoryCatalog {
    products: HashMap<Uuid, Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    pub fn insert(&mut self, product: Product) -> Uuid {
        let id = product.id;
        self.products.insert(id, product);
        id
    }

    pub fn get(&self, product_id: &Uuid) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub fn require(&self, product_id: &Uuid) -> Result<&Product, CatalogError> {
        self.products
            .get(product_id)
            .ok_or_else(|| CatalogError::NotFound(product_id.to_string()))
    }

    /// Overwrite the tracked quantity, e.g. after a sale or restock
    pub fn set_stock(&mut self, product_id: &Uuid, quantity: i32) -> Result<(), CatalogError> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(|| CatalogError::NotFound(product_id.to_string()))?;
        product.manages_stock = true;
        product.stock_quantity = Some(quantity);
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for InMemoryCatalog {
    fn stock_state(&self, product_id: &Uuid) -> Option<StockState> {
        self.get(product_id).map(Product::stock_state)
    }

    fn base_price(&self, product_id: &Uuid) -> Option<f64> {
        self.get(product_id).map(Product::base_price)
    }

    fn regular_price(&self, product_id: &Uuid) -> Option<f64> {
        self.get(product_id).map(|p| p.regular_price)
    }

    fn sale_price(&self, product_id: &Uuid) -> Option<f64> {
        self.get(product_id).and_then(|p| p.sale_price)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),
}
