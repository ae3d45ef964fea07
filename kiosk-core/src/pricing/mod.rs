//! Pricing Engine
//!
//! Pure function from (draft, catalog, rules) to a total in the smallest
//! currency unit. Unknown product ids contribute zero: catalog lookups
//! may race with availability edits and must never fail a price.

use crate::composer::DishDraft;
use crate::catalog::CatalogIndex;
use shared::models::{CategoryRule, RuleBook};
use std::collections::BTreeMap;

/// Price a dish draft
///
/// Per category rule:
/// - free categories contribute 0,
/// - single-select contributes the catalog price once,
/// - standard categories contribute `price x quantity`,
/// - priced categories pool every unit of the category across the whole
///   dish: the first pooled unit is free, each further unit costs the
///   configured flat surcharge (never the item's own catalog price).
pub fn dish_total(draft: &DishDraft, index: &CatalogIndex, rules: &RuleBook) -> i64 {
    let mut total: i64 = 0;
    // category -> (surcharge, pooled units)
    let mut pooled: BTreeMap<&str, (i64, u64)> = BTreeMap::new();

    for (id, qty) in draft.entries() {
        let Some(product) = index.get(id) else {
            continue;
        };
        match rules.rule_for(&product.category) {
            CategoryRule::MultiSelectFree => {}
            CategoryRule::SingleSelect => total += product.price,
            CategoryRule::MultiSelectStandard => total += product.price * i64::from(qty),
            CategoryRule::MultiSelectPriced { surcharge } => {
                let entry = pooled
                    .entry(product.category.as_str())
                    .or_insert((*surcharge, 0));
                entry.1 += u64::from(qty);
            }
        }
    }

    for (surcharge, units) in pooled.into_values() {
        if units > 0 {
            total += surcharge * (units as i64 - 1);
        }
    }

    total
}
