//! Order Lifecycle Manager
//!
//! State machine over persisted orders: pending -> completed/cancelled,
//! both terminal. Mutations follow a command pattern: load, validate,
//! compute the new state, send it to the store, return the store's row.
//! Nothing is assumed until the store confirms; concurrent staff edits
//! remain last-writer-wins (known, accepted race).

use super::store::OrderStore;
use super::sort_newest_first;
use shared::models::{DishRecord, OrderPatch, OrderStatus, PersistedOrder, StatusFilter};
use shared::{KioskError, KioskResult};
use std::sync::Arc;

/// Staff-facing order state machine
#[derive(Clone)]
pub struct OrderLifecycleManager {
    store: Arc<dyn OrderStore>,
}

impl std::fmt::Debug for OrderLifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderLifecycleManager").finish()
    }
}

impl OrderLifecycleManager {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Move a pending order to a terminal status.
    ///
    /// Cancellation confirmation is a UI concern; the core only records
    /// the resulting state.
    pub async fn transition(
        &self,
        order_id: i64,
        new_status: OrderStatus,
    ) -> KioskResult<PersistedOrder> {
        if new_status == OrderStatus::Pending {
            return Err(KioskError::validation(
                "orders cannot transition back to pending",
            ));
        }
        let order = self.load(order_id).await?;
        if order.status.is_terminal() {
            return Err(KioskError::InvalidTransition {
                order_id,
                status: order.status,
            });
        }

        self.store
            .update(
                order_id,
                OrderPatch {
                    status: Some(new_status),
                    ..Default::default()
                },
            )
            .await
    }

    /// Replace the item list and total of a pending order.
    ///
    /// Always marks the order as edited, whatever the prior flag value.
    /// Terminal orders are immutable to item edits.
    pub async fn edit_items(
        &self,
        order_id: i64,
        items: Vec<DishRecord>,
        total: i64,
    ) -> KioskResult<PersistedOrder> {
        let order = self.load(order_id).await?;
        if order.status.is_terminal() {
            return Err(KioskError::InvalidTransition {
                order_id,
                status: order.status,
            });
        }

        self.store
            .update(
                order_id,
                OrderPatch {
                    items: Some(items),
                    total: Some(total),
                    was_edited: Some(true),
                    ..Default::default()
                },
            )
            .await
    }

    /// Remove one dish from a pending order and recompute the total
    /// from the remaining dish records.
    pub async fn remove_item(&self, order_id: i64, index: usize) -> KioskResult<PersistedOrder> {
        let order = self.load(order_id).await?;
        if order.status.is_terminal() {
            return Err(KioskError::InvalidTransition {
                order_id,
                status: order.status,
            });
        }
        if index >= order.items.len() {
            return Err(KioskError::validation(format!(
                "order {order_id} has no item at position {index}"
            )));
        }

        let mut items = order.items;
        items.remove(index);
        let total = items.iter().map(|d| d.dish_total).sum();
        self.edit_items(order_id, items, total).await
    }

    /// Orders matching the filter, newest first.
    pub async fn list(&self, filter: StatusFilter) -> KioskResult<Vec<PersistedOrder>> {
        let mut orders = self.store.list(filter).await?;
        sort_newest_first(&mut orders);
        Ok(orders)
    }

    async fn load(&self, order_id: i64) -> KioskResult<PersistedOrder> {
        self.store
            .get(order_id)
            .await?
            .ok_or_else(|| KioskError::validation(format!("order {order_id} not found")))
    }
}
