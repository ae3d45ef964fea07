//! Customer session
//!
//! One [`KioskSession`] per active customer, passed explicitly through
//! the flow instead of living in ambient global state. Scratch data is
//! loaded from [`DraftStorage`] on open and saved after every mutation,
//! so a session survives navigation away and kiosk restarts.

mod storage;

pub use storage::{DraftStorage, StorageError, StorageResult};

use crate::catalog::CatalogIndex;
use crate::composer::DishComposer;
use crate::orders::{OrderAssembler, OrderStore, Submission};
use shared::models::{AppSettings, CustomerInfo, OrderType, ProductId, RuleBook};
use shared::KioskResult;
use std::sync::Arc;
use uuid::Uuid;

/// Session-scoped kiosk state: the dish being composed plus the
/// confirmed dishes of the in-progress order
pub struct KioskSession {
    id: String,
    composer: DishComposer,
    order: OrderAssembler,
    storage: Arc<DraftStorage>,
}

impl std::fmt::Debug for KioskSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KioskSession")
            .field("id", &self.id)
            .field("draft_items", &self.composer.draft().quantities().len())
            .field("confirmed_dishes", &self.order.len())
            .finish()
    }
}

impl KioskSession {
    /// Open a session, restoring any scratch state persisted under its id.
    pub fn open(
        id: impl Into<String>,
        index: Arc<CatalogIndex>,
        rules: Arc<RuleBook>,
        storage: Arc<DraftStorage>,
    ) -> KioskResult<Self> {
        let id = id.into();
        let draft = storage.load_draft(&id)?.unwrap_or_default();
        let dishes = storage.load_dishes(&id)?;
        Ok(Self {
            id,
            composer: DishComposer::with_draft(index, rules, draft),
            order: OrderAssembler::from_dishes(dishes),
            storage,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn composer(&self) -> &DishComposer {
        &self.composer
    }

    pub fn order(&self) -> &OrderAssembler {
        &self.order
    }

    /// Select one unit of a product in the current dish.
    pub fn toggle(&mut self, product: ProductId) -> KioskResult<()> {
        self.composer.toggle(product)?;
        self.persist();
        Ok(())
    }

    /// Remove one unit of a product from the current dish.
    pub fn decrement(&mut self, product: ProductId) {
        self.composer.decrement(product);
        self.persist();
    }

    /// Price of the dish currently being composed
    pub fn dish_total(&self) -> i64 {
        self.composer.total()
    }

    /// Confirm the current dish into the order; `None` when the draft is
    /// empty.
    pub fn confirm_dish(&mut self) -> Option<Uuid> {
        let dish = self.composer.finalize()?;
        let dish_id = dish.id;
        self.order.add_dish(dish);
        self.persist();
        Some(dish_id)
    }

    /// Remove a confirmed dish before submission.
    pub fn remove_dish(&mut self, index: usize) -> KioskResult<()> {
        self.order.remove_dish(index)?;
        self.persist();
        Ok(())
    }

    /// Grand total of the in-progress order
    pub fn order_total(&self) -> i64 {
        self.order.order_total()
    }

    /// Submit the order and, on success, clear all session scratch state.
    pub async fn submit(
        &mut self,
        customer: &CustomerInfo,
        order_type: OrderType,
        settings: &AppSettings,
        store: &dyn OrderStore,
    ) -> KioskResult<Submission> {
        let submission = self
            .order
            .submit(customer, order_type, settings, self.composer.index(), store)
            .await?;
        self.reset();
        Ok(submission)
    }

    /// Abandon the session: purely local, nothing external to undo.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.composer.clear();
        self.order.clear();
        if let Err(e) = self.storage.clear_session(&self.id) {
            tracing::warn!(session_id = %self.id, error = %e, "Failed to clear session scratch state");
        }
    }

    /// Scratch persistence is best-effort: losing it costs a restart of
    /// the draft, never the flow.
    fn persist(&self) {
        if let Err(e) = self.storage.save_draft(&self.id, self.composer.draft()) {
            tracing::warn!(session_id = %self.id, error = %e, "Failed to persist dish draft");
        }
        if let Err(e) = self.storage.save_dishes(&self.id, self.order.dishes()) {
            tracing::warn!(session_id = %self.id, error = %e, "Failed to persist confirmed dishes");
        }
    }
}
