//! Order metrics for the operator panel

use super::store::OrderStore;
use shared::models::{OrderStatus, StatusFilter};
use shared::KioskResult;

/// Aggregates shown on the developer panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    /// All orders ever stored, whatever their status
    pub total_orders: usize,
    /// Revenue across completed orders only
    pub completed_revenue: i64,
}

impl OrderStats {
    pub async fn collect(store: &dyn OrderStore) -> KioskResult<Self> {
        let orders = store.list(StatusFilter::All).await?;
        let completed_revenue = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .map(|o| o.total)
            .sum();
        Ok(Self {
            total_orders: orders.len(),
            completed_revenue,
        })
    }
}
