//! Category selection rules
//!
//! Each category carries a selection policy resolved once from settings
//! into a [`RuleBook`]; all dispatch afterwards is a pattern match, never
//! repeated string comparison.

use super::product::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Selection policy for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryRule {
    /// Choosing a new item evicts any prior selection in the category;
    /// quantity is pinned to 1.
    SingleSelect,
    /// Quantity accumulates freely. Units are pooled per category across
    /// the whole dish: the first pooled unit is free, every further unit
    /// is charged `surcharge` (flat, not the item's catalog price).
    MultiSelectPriced { surcharge: i64 },
    /// Included at no charge, no cap.
    MultiSelectFree,
    /// Ordinary accumulation, `price x quantity`.
    MultiSelectStandard,
}

/// Per-category configuration entry as stored in settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    pub name: String,
    pub rule: CategoryRule,
    /// Optional "no selection" placeholder item for this category
    /// (zero-price, e.g. "Sin bebida")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<ProductId>,
}

impl CategoryConfig {
    pub fn new(name: impl Into<String>, rule: CategoryRule) -> Self {
        Self {
            name: name.into(),
            rule,
            sentinel: None,
        }
    }

    pub fn with_sentinel(mut self, sentinel: ProductId) -> Self {
        self.sentinel = Some(sentinel);
        self
    }
}

/// Resolved rule set, built once from settings
///
/// Categories without an entry fall back to
/// [`CategoryRule::MultiSelectStandard`] with no sentinel.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    policies: HashMap<String, CategoryConfig>,
}

impl RuleBook {
    pub fn new(configs: impl IntoIterator<Item = CategoryConfig>) -> Self {
        Self {
            policies: configs.into_iter().map(|c| (c.name.clone(), c)).collect(),
        }
    }

    pub fn rule_for(&self, category: &str) -> &CategoryRule {
        self.policies
            .get(category)
            .map(|c| &c.rule)
            .unwrap_or(&CategoryRule::MultiSelectStandard)
    }

    pub fn sentinel_for(&self, category: &str) -> Option<ProductId> {
        self.policies.get(category).and_then(|c| c.sentinel)
    }

    pub fn is_sentinel(&self, category: &str, id: ProductId) -> bool {
        self.sentinel_for(category) == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_falls_back_to_standard() {
        let rules = RuleBook::default();
        assert_eq!(rules.rule_for("Postres"), &CategoryRule::MultiSelectStandard);
        assert_eq!(rules.sentinel_for("Postres"), None);
    }

    #[test]
    fn test_rule_lookup_and_sentinel() {
        let rules = RuleBook::new([
            CategoryConfig::new("Carnes", CategoryRule::SingleSelect),
            CategoryConfig::new("Bebidas", CategoryRule::MultiSelectStandard).with_sentinel(99),
        ]);
        assert_eq!(rules.rule_for("Carnes"), &CategoryRule::SingleSelect);
        assert!(rules.is_sentinel("Bebidas", 99));
        assert!(!rules.is_sentinel("Carnes", 99));
    }

    #[test]
    fn test_rule_wire_format() {
        let json = serde_json::to_value(CategoryRule::MultiSelectPriced { surcharge: 500 }).unwrap();
        assert_eq!(json["type"], "multi-select-priced");
        assert_eq!(json["surcharge"], 500);

        let rule: CategoryRule = serde_json::from_str(r#"{"type":"single-select"}"#).unwrap();
        assert_eq!(rule, CategoryRule::SingleSelect);
    }
}
