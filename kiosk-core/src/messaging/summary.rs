//! Order summary renderer
//!
//! Renders the order into the WhatsApp message handed to the restaurant.
//! Output is deterministic: identical order content yields identical
//! bytes.

use crate::money::format_money;
use shared::models::{CustomerInfo, DishRecord};

const SEPARATOR: &str = "--------------------------------\n";

/// Renders orders into the outbound message format
#[derive(Debug, Clone)]
pub struct SummaryRenderer {
    app_name: String,
}

impl SummaryRenderer {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Render the full transcript: header, customer block, one section
    /// per dish, grand total.
    pub fn render(&self, customer: &CustomerInfo, dishes: &[DishRecord], total: i64) -> String {
        let mut msg = String::new();

        msg.push_str(&format!("*Nuevo Pedido - {}*\n", self.app_name));
        msg.push_str(SEPARATOR);
        msg.push_str(&format!("*Cliente:* {}\n", customer.name));
        msg.push_str(&format!("*Dirección:* {}\n", customer.address));
        msg.push_str(&format!("*Teléfono:* {}\n", customer.phone));
        msg.push_str(&format!(
            "*Email:* {}\n",
            customer.email.as_deref().unwrap_or("No informado")
        ));
        msg.push_str(&format!("*Pago:* {}\n", customer.payment_method));
        msg.push_str(SEPARATOR);
        msg.push_str("*DETALLE DEL PEDIDO*\n\n");

        for (idx, dish) in dishes.iter().enumerate() {
            msg.push_str(&format!(
                "*Plato {}:* ({})\n",
                idx + 1,
                format_money(dish.dish_total)
            ));
            for line in &dish.ingredients {
                msg.push_str(&format!("- {} (x{})\n", line.name, line.quantity));
            }
            msg.push('\n');
        }

        msg.push_str(SEPARATOR);
        msg.push_str(&format!("*TOTAL FINAL:* {}", format_money(total)));
        msg
    }
}
