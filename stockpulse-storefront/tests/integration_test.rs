use stockpulse_cart::{session, CartManager};
use stockpulse_catalog::{InMemoryCatalog, PricingConfig, PricingEngine, Product};
use stockpulse_storefront::{from_cart, product_display, rewrite_offer_markup};

fn storefront(quantity: i32) -> (InMemoryCatalog, PricingEngine, uuid::Uuid) {
    let mut catalog = InMemoryCatalog::new();
    let id = catalog.insert(Product::new("SKU-100", "Widget", 100.0).with_tracked_stock(quantity));
    (catalog, PricingEngine::new(PricingConfig::default()), id)
}

#[test]
fn test_every_read_path_agrees_on_the_adjusted_price() {
    let (catalog, engine, id) = storefront(3);

    // Display path
    let display = product_display(&catalog, &engine, &id).unwrap();
    assert_eq!(display.amount, 140.0);

    // Cart path
    let mut cart = CartManager::new();
    let line = cart.add(&catalog, &engine, id, 1).unwrap();
    assert_eq!(line.unit_price, display.amount);

    // Structured-data path
    let markup = serde_json::json!({ "price": "100.00" });
    let markup = rewrite_offer_markup(markup, &catalog, &engine, &id);
    assert_eq!(markup["price"], "140.00");

    // Order-line path
    let orders = from_cart(&cart, engine.config());
    assert_eq!(orders[0].unit_price, display.amount);
}

#[test]
fn test_cart_survives_session_round_trip_with_stock_change() {
    let (mut catalog, engine, id) = storefront(3);

    let mut cart = CartManager::new();
    cart.add(&catalog, &engine, id, 1).unwrap();

    // Stock recovers after the add; the stored line must keep its add-time
    // price instead of repricing at the new level
    catalog.set_stock(&id, 500).unwrap();

    let stored = session::to_session(&cart).unwrap();
    let restored = session::from_session(&stored).unwrap();

    assert_eq!(restored.lines().len(), 1);
    assert_eq!(restored.lines()[0].unit_price, 140.0);

    // A fresh add at the new stock level prices independently
    let mut restored = restored;
    let line = restored.add(&catalog, &engine, id, 1).unwrap();
    assert_eq!(line.unit_price, 85.0);
    assert_eq!(restored.lines().len(), 2);
}

#[test]
fn test_tier_boundary_adds_produce_distinct_order_lines() {
    let (mut catalog, engine, id) = storefront(5);

    let mut cart = CartManager::new();
    cart.add(&catalog, &engine, id, 1).unwrap();

    catalog.set_stock(&id, 6).unwrap(); // low -> medium
    cart.add(&catalog, &engine, id, 1).unwrap();

    let orders = from_cart(&cart, engine.config());
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].unit_price, 140.0);
    assert_eq!(orders[1].unit_price, 120.0);

    // Both carry the notice label
    assert!(orders.iter().all(|line| !line.meta.is_empty()));
}

#[test]
fn test_disabled_pricing_is_invisible_end_to_end() {
    let (catalog, _, id) = storefront(3);
    let engine = PricingEngine::new(PricingConfig {
        enabled: false,
        ..PricingConfig::default()
    });

    let display = product_display(&catalog, &engine, &id).unwrap();
    assert_eq!(display.amount, 100.0);
    assert!(display.notice.is_none());

    let mut cart = CartManager::new();
    let line = cart.add(&catalog, &engine, id, 1).unwrap();
    assert_eq!(line.unit_price, 100.0);
    assert!(line.adjustment.is_none());

    let orders = from_cart(&cart, engine.config());
    assert!(orders[0].meta.is_empty());
}
