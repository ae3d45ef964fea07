//! Order Assembler
//!
//! Accumulates confirmed dishes, resolves ingredient names and prices at
//! submission time (so later catalog edits never rewrite history), and
//! hands the order to the store. Persistence is best-effort: a store
//! failure is logged for the operator but the customer still gets the
//! rendered message.

use crate::catalog::CatalogIndex;
use crate::composer::ConfirmedDish;
use crate::messaging::{whatsapp_link, SummaryRenderer};
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN,
    MAX_SHORT_TEXT_LEN,
};
use chrono::Utc;
use shared::models::{
    AppSettings, CustomerInfo, DishRecord, IngredientLine, NewOrder, OrderStatus, OrderType,
    PersistedOrder,
};
use shared::{KioskError, KioskResult};

use super::store::OrderStore;

/// Fallback name for ingredients whose catalog entry vanished between
/// composition and submission.
const UNKNOWN_INGREDIENT: &str = "Ingrediente Desconocido";

/// Result of a submission
#[derive(Debug, Clone)]
pub struct Submission {
    /// The stored row, or `None` when the store was unreachable
    pub persisted: Option<PersistedOrder>,
    /// Deterministic transcript for the outbound channel
    pub summary: String,
    /// wa.me deep link carrying the transcript
    pub whatsapp_url: String,
    pub total: i64,
}

/// In-progress order: confirmed dishes awaiting submission
#[derive(Debug, Clone, Default)]
pub struct OrderAssembler {
    dishes: Vec<ConfirmedDish>,
}

impl OrderAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from dishes loaded out of session storage.
    pub fn from_dishes(dishes: Vec<ConfirmedDish>) -> Self {
        Self { dishes }
    }

    pub fn dishes(&self) -> &[ConfirmedDish] {
        &self.dishes
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn add_dish(&mut self, dish: ConfirmedDish) {
        self.dishes.push(dish);
    }

    /// Remove the dish at `index`; out-of-range is a validation error.
    pub fn remove_dish(&mut self, index: usize) -> KioskResult<ConfirmedDish> {
        if index >= self.dishes.len() {
            return Err(KioskError::validation(format!(
                "no dish at position {index}"
            )));
        }
        Ok(self.dishes.remove(index))
    }

    pub fn clear(&mut self) {
        self.dishes.clear();
    }

    /// Grand total across all confirmed dishes
    pub fn order_total(&self) -> i64 {
        self.dishes.iter().map(|d| d.total).sum()
    }

    /// Resolve dish ingredient ids against the catalog into decoupled
    /// records ("Plato #1", "Plato #2", ...).
    pub fn build_records(&self, index: &CatalogIndex) -> Vec<DishRecord> {
        self.dishes
            .iter()
            .enumerate()
            .map(|(i, dish)| DishRecord {
                dish_name: format!("Plato #{}", i + 1),
                dish_total: dish.total,
                ingredients: dish
                    .ingredients
                    .iter()
                    .map(|(id, qty)| match index.get(*id) {
                        Some(product) => IngredientLine {
                            name: product.name.clone(),
                            price: product.price,
                            quantity: *qty,
                        },
                        None => IngredientLine {
                            name: UNKNOWN_INGREDIENT.to_string(),
                            price: 0,
                            quantity: *qty,
                        },
                    })
                    .collect(),
            })
            .collect()
    }

    /// Validate, persist and render the order.
    ///
    /// Validation failures leave external state untouched (the store is
    /// never called). A store failure after validation does not block
    /// the customer: it is logged and the submission still carries the
    /// summary and deep link.
    pub async fn submit(
        &self,
        customer: &CustomerInfo,
        order_type: OrderType,
        settings: &AppSettings,
        index: &CatalogIndex,
        store: &dyn OrderStore,
    ) -> KioskResult<Submission> {
        if self.dishes.is_empty() {
            return Err(KioskError::validation("order has no dishes"));
        }
        validate_customer(customer)?;
        validate_service_mode(order_type, settings)?;

        let items = self.build_records(index);
        let total = self.order_total();
        let order = NewOrder {
            customer: customer.clone(),
            order_type,
            items: items.clone(),
            total,
            status: OrderStatus::Pending,
            was_edited: false,
            created_at: Utc::now(),
        };

        let persisted = match store.create(order).await {
            Ok(row) => {
                tracing::info!(order_id = row.id, total, "Order persisted");
                Some(row)
            }
            Err(e) => {
                tracing::error!(error = %e, "Order store write failed, continuing to message composition");
                None
            }
        };

        let summary = SummaryRenderer::new(&settings.app_name).render(customer, &items, total);
        let whatsapp_url = whatsapp_link(&settings.whatsapp_number, &summary);

        Ok(Submission {
            persisted,
            summary,
            whatsapp_url,
            total,
        })
    }
}

fn validate_customer(customer: &CustomerInfo) -> KioskResult<()> {
    validate_required_text(&customer.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&customer.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&customer.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&customer.email, "email", MAX_EMAIL_LEN)?;
    Ok(())
}

fn validate_service_mode(order_type: OrderType, settings: &AppSettings) -> KioskResult<()> {
    match order_type {
        OrderType::Delivery if !settings.delivery_enabled => {
            Err(KioskError::validation("delivery is currently disabled"))
        }
        OrderType::EatIn if !settings.eat_in_enabled => {
            Err(KioskError::validation("eat-in is currently disabled"))
        }
        _ => Ok(()),
    }
}
