//! Dish Composer
//!
//! Applies per-category selection rules to the active [`DishDraft`] on
//! every toggle, and turns the draft into a [`ConfirmedDish`] when the
//! customer advances past the last category.

mod draft;

pub use draft::{ConfirmedDish, DishDraft};

use crate::catalog::CatalogIndex;
use crate::pricing;
use chrono::Utc;
use shared::models::{CategoryRule, ProductId, RuleBook};
use shared::{KioskError, KioskResult};
use std::sync::Arc;
use uuid::Uuid;

/// Builds one dish at a time against a catalog snapshot and rule book
#[derive(Debug, Clone)]
pub struct DishComposer {
    index: Arc<CatalogIndex>,
    rules: Arc<RuleBook>,
    draft: DishDraft,
}

impl DishComposer {
    pub fn new(index: Arc<CatalogIndex>, rules: Arc<RuleBook>) -> Self {
        Self::with_draft(index, rules, DishDraft::new())
    }

    /// Resume composition from a persisted draft.
    pub fn with_draft(index: Arc<CatalogIndex>, rules: Arc<RuleBook>, draft: DishDraft) -> Self {
        Self { index, rules, draft }
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Select one unit of a product, applying its category rule.
    ///
    /// Single-select categories evict any prior selection (sentinel
    /// included); multi-select categories accumulate. Choosing the
    /// category's sentinel explicitly clears the category down to the
    /// sentinel alone.
    pub fn toggle(&mut self, id: ProductId) -> KioskResult<()> {
        let product = self
            .index
            .get(id)
            .ok_or_else(|| KioskError::validation(format!("unknown product {id}")))?;
        if !product.available {
            return Err(KioskError::validation(format!(
                "{} is not available",
                product.name
            )));
        }
        let category = product.category.clone();

        if self.rules.is_sentinel(&category, id) {
            self.clear_category(&category);
            self.draft.set(id, 1);
            return Ok(());
        }

        // A real selection always evicts the category's sentinel.
        if let Some(sentinel) = self.rules.sentinel_for(&category) {
            self.draft.remove(sentinel);
        }

        match self.rules.rule_for(&category).clone() {
            CategoryRule::SingleSelect => {
                self.clear_category(&category);
                self.draft.set(id, 1);
            }
            CategoryRule::MultiSelectPriced { .. }
            | CategoryRule::MultiSelectFree
            | CategoryRule::MultiSelectStandard => {
                let qty = self.draft.quantity(id);
                self.draft.set(id, qty + 1);
            }
        }
        Ok(())
    }

    /// Reduce a product's quantity by one; silently ignores products
    /// with no current quantity. Removing the last real item of a
    /// sentinel category re-instates the sentinel at quantity 1.
    pub fn decrement(&mut self, id: ProductId) {
        let qty = self.draft.quantity(id);
        if qty == 0 {
            return;
        }
        self.draft.set(id, qty - 1);

        // Ids that fell out of the catalog carry no category information;
        // the stale entry is simply dropped.
        let Some(product) = self.index.get(id) else {
            return;
        };
        let category = product.category.clone();
        let Some(sentinel) = self.rules.sentinel_for(&category) else {
            return;
        };
        if sentinel == id {
            return;
        }

        let has_real_selection = self.draft.quantities().keys().any(|other| {
            *other != sentinel
                && self
                    .index
                    .get(*other)
                    .is_some_and(|p| p.category == category)
        });
        if !has_real_selection {
            self.draft.set(sentinel, 1);
        }
    }

    /// Price of the current draft
    pub fn total(&self) -> i64 {
        pricing::dish_total(&self.draft, &self.index, &self.rules)
    }

    /// Consume the draft into a [`ConfirmedDish`]; `None` when the draft
    /// is empty (an empty dish never reaches the order).
    pub fn finalize(&mut self) -> Option<ConfirmedDish> {
        if self.draft.is_empty() {
            return None;
        }
        let total = self.total();
        let draft = std::mem::take(&mut self.draft);
        Some(ConfirmedDish {
            id: Uuid::new_v4(),
            ingredients: draft.into_quantities(),
            total,
            confirmed_at: Utc::now(),
        })
    }

    /// Discard the draft without producing a dish.
    pub fn clear(&mut self) {
        self.draft = DishDraft::new();
    }

    fn clear_category(&mut self, category: &str) {
        let ids: Vec<ProductId> = self
            .draft
            .quantities()
            .keys()
            .copied()
            .filter(|id| {
                self.index
                    .get(*id)
                    .is_some_and(|p| p.category == category)
            })
            .collect();
        for id in ids {
            self.draft.remove(id);
        }
    }
}
