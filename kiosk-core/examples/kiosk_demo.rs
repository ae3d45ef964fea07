//! Kiosk Demo - full ordering flow against in-memory collaborators
//!
//! Walks the whole customer path (compose two dishes, submit) and the
//! staff path afterwards (panel listing, item removal, completion).
//!
//! Run: cargo run -p kiosk-core --example kiosk_demo

use kiosk_core::catalog::{CatalogService, MemoryCatalog, MemorySettings, SettingsProvider};
use kiosk_core::orders::{MemoryOrderStore, OrderLifecycleManager, OrderStats};
use kiosk_core::panel::PanelFeed;
use kiosk_core::session::{DraftStorage, KioskSession};
use kiosk_core::Config;
use shared::models::{
    AppSettings, CategoryConfig, CategoryRule, CustomerInfo, OrderStatus, OrderType,
    PaymentMethod, Product, RuleBook, StatusFilter,
};
use std::sync::Arc;
use std::time::Duration;

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Bife de Chorizo", "Carnes", 3000),
        Product::new(2, "Pollo al Horno", "Carnes", 2500),
        Product::new(10, "Papas Fritas", "Guarniciones", 800),
        Product::new(20, "Chimichurri", "Salsas", 0),
        Product::new(21, "Criolla", "Salsas", 0),
        Product::new(30, "Coca Cola 1.5L", "Bebidas", 5000),
        Product::new(90, "Sin bebida", "Bebidas", 0),
    ]
}

fn seed_settings() -> AppSettings {
    AppSettings {
        category_order: vec![
            "Carnes".into(),
            "Guarniciones".into(),
            "Salsas".into(),
            "Bebidas".into(),
        ],
        categories: vec![
            CategoryConfig::new("Carnes", CategoryRule::SingleSelect),
            CategoryConfig::new("Guarniciones", CategoryRule::MultiSelectFree),
            CategoryConfig::new("Salsas", CategoryRule::MultiSelectPriced { surcharge: 500 }),
            CategoryConfig::new("Bebidas", CategoryRule::MultiSelectStandard).with_sentinel(90),
        ],
        ..AppSettings::default()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    kiosk_core::init_logger_with_file(Some(&config.log_level), None);

    println!("=== Kiosk Demo ===\n");

    // === 1. Boot: catalog, settings, draft storage, order store ===
    println!("1. Loading catalog and settings...");
    let catalog = CatalogService::new(Arc::new(MemoryCatalog::new(seed_products())));
    let index = Arc::new(catalog.load().await);
    let settings = MemorySettings::new(seed_settings()).fetch_settings().await?;
    let rules = Arc::new(RuleBook::new(settings.categories.clone()));
    println!("   {} products in {} categories.\n", index.len(), index.categories().len());

    let temp_dir = std::env::temp_dir().join("kiosk-demo");
    std::fs::create_dir_all(&temp_dir)?;
    let storage = Arc::new(DraftStorage::open(temp_dir.join("drafts.redb"))?);
    let store = Arc::new(MemoryOrderStore::new());

    // === 2. Customer composes two dishes ===
    println!("2. Composing dishes...");
    let mut session = KioskSession::open("kiosk-1", index, rules, storage)?;

    session.toggle(1)?; // Bife de Chorizo
    session.toggle(10)?; // Papas Fritas (free side)
    session.toggle(20)?; // Chimichurri (first sauce free)
    session.toggle(20)?; // second sauce surcharged
    println!("   Plato 1 total: {}", kiosk_core::money::format_money(session.dish_total()));
    session.confirm_dish();

    session.toggle(2)?; // Pollo al Horno
    session.toggle(30)?; // Coca Cola
    println!("   Plato 2 total: {}", kiosk_core::money::format_money(session.dish_total()));
    session.confirm_dish();

    // === 3. Submit ===
    println!("\n3. Submitting order...");
    let customer = CustomerInfo {
        name: "Juan Perez".into(),
        address: "Av. Principal 123".into(),
        phone: "11 1234 5678".into(),
        email: None,
        payment_method: PaymentMethod::Efectivo,
    };
    let submission = session
        .submit(&customer, OrderType::Delivery, &settings, store.as_ref())
        .await?;

    println!("\n--- Outbound message ---\n{}\n------------------------", submission.summary);
    println!("Deep link: {}\n", submission.whatsapp_url);

    // === 4. Staff panel ===
    println!("4. Staff panel...");
    let feed = PanelFeed::spawn(
        store.clone(),
        StatusFilter::Pending,
        Duration::from_millis(100),
    );
    tokio::time::sleep(Duration::from_millis(200)).await;
    for order in feed.latest() {
        println!(
            "   Pending order #{} - {} - {}",
            order.id,
            order.customer.name,
            kiosk_core::money::format_money(order.total)
        );
    }
    feed.stop();

    let manager = OrderLifecycleManager::new(store.clone());
    let order_id = submission.persisted.map(|o| o.id).unwrap_or_default();

    let edited = manager.remove_item(order_id, 0).await?;
    println!(
        "   Removed Plato #1: new total {}, was_edited={}",
        kiosk_core::money::format_money(edited.total),
        edited.was_edited
    );

    let completed = manager.transition(order_id, OrderStatus::Completed).await?;
    println!("   Order #{} is now {:?}.", completed.id, completed.status);

    let stats = OrderStats::collect(store.as_ref()).await?;
    println!(
        "\n5. Metrics: {} orders, {} completed revenue.",
        stats.total_orders,
        kiosk_core::money::format_money(stats.completed_revenue)
    );

    Ok(())
}
