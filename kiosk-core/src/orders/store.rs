//! Order store collaborator
//!
//! Durable append plus in-place update keyed by order id. The hosted
//! backend owns request timeouts and locking (there is none: updates are
//! last-writer-wins); the core only issues the calls.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{NewOrder, OrderPatch, PersistedOrder, StatusFilter};
use shared::{KioskError, KioskResult};
use std::sync::atomic::{AtomicI64, Ordering};

/// External order store
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a new order; the store assigns the id.
    async fn create(&self, order: NewOrder) -> KioskResult<PersistedOrder>;

    /// Fetch one order by id.
    async fn get(&self, id: i64) -> KioskResult<Option<PersistedOrder>>;

    /// Partially update an order (last-writer-wins).
    async fn update(&self, id: i64, patch: OrderPatch) -> KioskResult<PersistedOrder>;

    /// All orders matching the filter, in store order.
    async fn list(&self, filter: StatusFilter) -> KioskResult<Vec<PersistedOrder>>;
}

/// In-memory order store for tests and demos
#[derive(Debug)]
pub struct MemoryOrderStore {
    orders: DashMap<i64, PersistedOrder>,
    next_id: AtomicI64,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: NewOrder) -> KioskResult<PersistedOrder> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let persisted = PersistedOrder::from_new(id, order);
        self.orders.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn get(&self, id: i64) -> KioskResult<Option<PersistedOrder>> {
        Ok(self.orders.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> KioskResult<PersistedOrder> {
        let mut entry = self
            .orders
            .get_mut(&id)
            .ok_or_else(|| KioskError::validation(format!("order {id} not found")))?;
        patch.apply(entry.value_mut());
        Ok(entry.value().clone())
    }

    async fn list(&self, filter: StatusFilter) -> KioskResult<Vec<PersistedOrder>> {
        Ok(self
            .orders
            .iter()
            .filter(|entry| filter.matches(entry.value().status))
            .map(|entry| entry.value().clone())
            .collect())
    }
}
