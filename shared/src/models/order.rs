//! Order records
//!
//! Persisted order rows and their create/update payloads. Ingredient
//! names and prices are resolved at submission time so historical orders
//! stay stable when the catalog changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status (lowercase on the wire, matching the order store)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Terminal orders accept no further transitions or item edits.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Service mode chosen at the start of the kiosk flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    EatIn,
    #[default]
    Delivery,
}

/// Payment method declared by the customer (settled out of band)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Efectivo,
    Transferencia,
    #[serde(rename = "Mercado Pago")]
    MercadoPago,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentMethod::Efectivo => "Efectivo",
            PaymentMethod::Transferencia => "Transferencia",
            PaymentMethod::MercadoPago => "Mercado Pago",
        };
        f.write_str(label)
    }
}

/// Customer contact fields collected at checkout
///
/// All required except `email`; validation happens before submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// One resolved ingredient line inside a dish record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    /// Catalog price per unit at submission time
    pub price: i64,
    pub quantity: u32,
}

/// One dish inside a persisted order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishRecord {
    /// Display name ("Plato #1", ...)
    pub dish_name: String,
    /// Dish total as priced at confirmation time
    pub dish_total: i64,
    pub ingredients: Vec<IngredientLine>,
}

/// Create payload handed to the order store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: CustomerInfo,
    pub order_type: OrderType,
    pub items: Vec<DishRecord>,
    pub total: i64,
    pub status: OrderStatus,
    pub was_edited: bool,
    pub created_at: DateTime<Utc>,
}

/// Order row as returned by the order store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedOrder {
    /// Identifier assigned by the store at insertion time
    pub id: i64,
    pub customer: CustomerInfo,
    pub order_type: OrderType,
    pub items: Vec<DishRecord>,
    pub total: i64,
    pub status: OrderStatus,
    /// Set the first time any line item is edited post-creation, never
    /// cleared.
    pub was_edited: bool,
    pub created_at: DateTime<Utc>,
}

impl PersistedOrder {
    pub fn from_new(id: i64, order: NewOrder) -> Self {
        Self {
            id,
            customer: order.customer,
            order_type: order.order_type,
            items: order.items,
            total: order.total,
            status: order.status,
            was_edited: order.was_edited,
            created_at: order.created_at,
        }
    }
}

/// Partial update applied by the lifecycle manager (last-writer-wins)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DishRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_edited: Option<bool>,
}

impl OrderPatch {
    /// Apply the patch to an order row (last-writer-wins semantics).
    pub fn apply(&self, order: &mut PersistedOrder) {
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(items) = &self.items {
            order.items = items.clone();
        }
        if let Some(total) = self.total {
            order.total = total;
        }
        if let Some(was_edited) = self.was_edited {
            order.was_edited = was_edited;
        }
    }
}

/// Status filter for order listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Cancelled,
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == OrderStatus::Pending,
            StatusFilter::Completed => status == OrderStatus::Completed,
            StatusFilter::Cancelled => status == OrderStatus::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            r#""pending""#
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            r#""cancelled""#
        );
        assert_eq!(
            serde_json::to_string(&OrderType::EatIn).unwrap(),
            r#""eat-in""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::MercadoPago).unwrap(),
            r#""Mercado Pago""#
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.matches(OrderStatus::Cancelled));
        assert!(StatusFilter::Pending.matches(OrderStatus::Pending));
        assert!(!StatusFilter::Pending.matches(OrderStatus::Completed));
    }
}
