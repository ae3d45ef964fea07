//! Dish draft state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::ProductId;
use std::collections::BTreeMap;
use uuid::Uuid;

/// In-progress ingredient selection for one dish
///
/// Maps product id to a positive quantity. Entries never sit at zero:
/// a quantity reaching zero removes the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishDraft {
    quantities: BTreeMap<ProductId, u32>,
}

impl DishDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn quantity(&self, id: ProductId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    pub fn quantities(&self) -> &BTreeMap<ProductId, u32> {
        &self.quantities
    }

    pub fn entries(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.quantities.iter().map(|(id, qty)| (*id, *qty))
    }

    pub fn into_quantities(self) -> BTreeMap<ProductId, u32> {
        self.quantities
    }

    /// Set a quantity, upholding the no-zero-entries invariant.
    pub(crate) fn set(&mut self, id: ProductId, qty: u32) {
        if qty == 0 {
            self.quantities.remove(&id);
        } else {
            self.quantities.insert(id, qty);
        }
    }

    pub(crate) fn remove(&mut self, id: ProductId) {
        self.quantities.remove(&id);
    }
}

/// A finalized dish owned by the in-progress order until submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmedDish {
    pub id: Uuid,
    pub ingredients: BTreeMap<ProductId, u32>,
    /// Price computed at confirmation time
    pub total: i64,
    pub confirmed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quantity_removes_entry() {
        let mut draft = DishDraft::new();
        draft.set(1, 2);
        assert_eq!(draft.quantity(1), 2);

        draft.set(1, 0);
        assert!(draft.is_empty());
        assert_eq!(draft.quantity(1), 0);
    }

    #[test]
    fn test_entries_are_ordered_by_id() {
        let mut draft = DishDraft::new();
        draft.set(30, 1);
        draft.set(10, 1);
        draft.set(20, 1);
        let ids: Vec<_> = draft.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
