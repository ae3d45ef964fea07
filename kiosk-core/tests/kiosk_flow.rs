//! End-to-end kiosk flow against in-memory collaborators
//!
//! Covers the whole customer path (compose -> confirm -> submit) and the
//! staff path afterwards (panel listing, edits, lifecycle transitions).

use kiosk_core::catalog::{CatalogService, MemoryCatalog, MemorySettings, SettingsProvider};
use kiosk_core::orders::{MemoryOrderStore, OrderLifecycleManager, OrderStats, OrderStore};
use kiosk_core::session::{DraftStorage, KioskSession};
use shared::models::{
    AppSettings, CategoryConfig, CategoryRule, CustomerInfo, OrderStatus, OrderType,
    PaymentMethod, Product, RuleBook, StatusFilter,
};
use shared::KioskError;
use std::sync::Arc;

const SIN_BEBIDA: i64 = 90;

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Bife de Chorizo", "Carnes", 3000),
        Product::new(2, "Pollo al Horno", "Carnes", 2500),
        Product::new(10, "Papas Fritas", "Guarniciones", 800),
        Product::new(20, "Chimichurri", "Salsas", 0),
        Product::new(21, "Criolla", "Salsas", 0),
        Product::new(30, "Coca Cola 1.5L", "Bebidas", 5000),
        Product::new(SIN_BEBIDA, "Sin bebida", "Bebidas", 0),
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
            CategoryConfig::new("Bebidas", CategoryRule::MultiSelectStandard)
                .with_sentinel(SIN_BEBIDA),
        ],
        ..AppSettings::default()
    }
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Juan Perez".into(),
        address: "Av. Principal 123".into(),
        phone: "11 1234 5678".into(),
        email: Some("juan@email.com".into()),
        payment_method: PaymentMethod::Efectivo,
    }
}

struct Kiosk {
    settings: AppSettings,
    rules: Arc<RuleBook>,
    index: Arc<kiosk_core::CatalogIndex>,
    storage: Arc<DraftStorage>,
    store: Arc<MemoryOrderStore>,
    _dir: tempfile::TempDir,
}

async fn boot() -> Kiosk {
    let catalog = CatalogService::new(Arc::new(MemoryCatalog::new(seed_products())));
    let index = Arc::new(catalog.load().await);

    let settings_provider = MemorySettings::new(seed_settings());
    let settings = settings_provider.fetch_settings().await.unwrap();
    let rules = Arc::new(RuleBook::new(settings.categories.clone()));

    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(DraftStorage::open(dir.path().join("drafts.redb")).unwrap());

    Kiosk {
        settings,
        rules,
        index,
        storage,
        store: Arc::new(MemoryOrderStore::new()),
        _dir: dir,
    }
}

#[tokio::test]
async fn test_full_customer_flow() {
    let kiosk = boot().await;
    let mut session = KioskSession::open(
        "kiosk-1",
        kiosk.index.clone(),
        kiosk.rules.clone(),
        kiosk.storage.clone(),
    )
    .unwrap();

    // First dish: meat + free side + two sauces (second one surcharged).
    session.toggle(1).unwrap();
    session.toggle(10).unwrap();
    session.toggle(20).unwrap();
    session.toggle(20).unwrap();
    assert_eq!(session.dish_total(), 3500);
    session.confirm_dish().unwrap();

    // Second dish: just a drink.
    session.toggle(30).unwrap();
    assert_eq!(session.dish_total(), 5000);
    session.confirm_dish().unwrap();

    assert_eq!(session.order_total(), 8500);

    let submission = session
        .submit(
            &customer(),
            OrderType::Delivery,
            &kiosk.settings,
            kiosk.store.as_ref(),
        )
        .await
        .unwrap();

    // The summary names every ingredient with its quantity and the
    // printed grand total matches the order total.
    for name in ["Bife de Chorizo", "Papas Fritas", "Chimichurri", "Coca Cola 1.5L"] {
        assert!(submission.summary.contains(name), "missing {name}");
    }
    assert!(submission.summary.contains("(x2)"));
    assert!(submission.summary.ends_with("*TOTAL FINAL:* $8.500"));
    assert!(submission.whatsapp_url.starts_with("https://wa.me/5491126830760?text="));

    let persisted = submission.persisted.unwrap();
    assert_eq!(persisted.status, OrderStatus::Pending);
    assert_eq!(persisted.total, 8500);
    assert_eq!(persisted.items.len(), 2);
    assert_eq!(persisted.items[0].dish_name, "Plato #1");

    // Submission cleared the session scratch space.
    assert!(kiosk.storage.load_draft("kiosk-1").unwrap().is_none());
    assert!(kiosk.storage.load_dishes("kiosk-1").unwrap().is_empty());
}

#[tokio::test]
async fn test_draft_survives_kiosk_restart() {
    let kiosk = boot().await;

    {
        let mut session = KioskSession::open(
            "kiosk-1",
            kiosk.index.clone(),
            kiosk.rules.clone(),
            kiosk.storage.clone(),
        )
        .unwrap();
        session.toggle(1).unwrap();
        session.confirm_dish().unwrap();
        session.toggle(30).unwrap();
    }

    let mut session = KioskSession::open(
        "kiosk-1",
        kiosk.index.clone(),
        kiosk.rules.clone(),
        kiosk.storage.clone(),
    )
    .unwrap();
    assert_eq!(session.order().len(), 1);
    assert_eq!(session.composer().draft().quantity(30), 1);

    // Removing the restored drink re-instates the sentinel.
    session.decrement(30);
    assert_eq!(session.composer().draft().quantity(SIN_BEBIDA), 1);
    assert_eq!(session.dish_total(), 0);
}

#[tokio::test]
async fn test_staff_flow_after_submission() {
    let kiosk = boot().await;
    let mut session = KioskSession::open(
        "kiosk-1",
        kiosk.index.clone(),
        kiosk.rules.clone(),
        kiosk.storage.clone(),
    )
    .unwrap();

    session.toggle(1).unwrap();
    session.confirm_dish().unwrap();
    session.toggle(2).unwrap();
    session.confirm_dish().unwrap();

    let submission = session
        .submit(
            &customer(),
            OrderType::EatIn,
            &kiosk.settings,
            kiosk.store.as_ref(),
        )
        .await
        .unwrap();
    let order_id = submission.persisted.unwrap().id;

    let manager = OrderLifecycleManager::new(kiosk.store.clone());

    // Owner panel removes the first dish; the total shrinks and the
    // order is flagged as edited.
    let edited = manager.remove_item(order_id, 0).await.unwrap();
    assert!(edited.was_edited);
    assert_eq!(edited.total, 2500);

    // Complete, then try to cancel: terminal orders reject transitions.
    manager
        .transition(order_id, OrderStatus::Completed)
        .await
        .unwrap();
    let result = manager.transition(order_id, OrderStatus::Cancelled).await;
    assert!(matches!(
        result,
        Err(KioskError::InvalidTransition {
            status: OrderStatus::Completed,
            ..
        })
    ));

    // Terminal orders also reject item edits.
    let result = manager.remove_item(order_id, 0).await;
    assert!(matches!(result, Err(KioskError::InvalidTransition { .. })));

    // Metrics see one completed order.
    let stats = OrderStats::collect(kiosk.store.as_ref()).await.unwrap();
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.completed_revenue, 2500);

    assert!(manager.list(StatusFilter::Pending).await.unwrap().is_empty());
    assert_eq!(
        manager.list(StatusFilter::Completed).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_validation_failure_leaves_store_untouched() {
    let kiosk = boot().await;
    let mut session = KioskSession::open(
        "kiosk-1",
        kiosk.index.clone(),
        kiosk.rules.clone(),
        kiosk.storage.clone(),
    )
    .unwrap();
    session.toggle(1).unwrap();
    session.confirm_dish().unwrap();

    let mut incomplete = customer();
    incomplete.address = "".into();
    let result = session
        .submit(
            &incomplete,
            OrderType::Delivery,
            &kiosk.settings,
            kiosk.store.as_ref(),
        )
        .await;
    assert!(matches!(result, Err(KioskError::Validation(_))));
    assert!(kiosk
        .store
        .list(StatusFilter::All)
        .await
        .unwrap()
        .is_empty());

    // The order is still intact for a corrected retry.
    assert_eq!(session.order().len(), 1);
    let submission = session
        .submit(
            &customer(),
            OrderType::Delivery,
            &kiosk.settings,
            kiosk.store.as_ref(),
        )
        .await
        .unwrap();
    assert!(submission.persisted.is_some());
}
