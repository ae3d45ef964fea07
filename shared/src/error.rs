//! Error taxonomy for the kiosk core
//!
//! Three recoverable classes: bad input from the customer or operator,
//! attempted mutation of a terminal order, and unreachable collaborators.

use crate::models::order::OrderStatus;
use thiserror::Error;

/// Core errors surfaced to callers
#[derive(Debug, Error)]
pub enum KioskError {
    /// Invalid input. Nothing has been mutated; the caller may correct
    /// and retry.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Attempted mutation of an order in a terminal state. Rejected
    /// without partial effect.
    #[error("order {order_id} is {status:?} and can no longer be modified")]
    InvalidTransition { order_id: i64, status: OrderStatus },

    /// An external collaborator (catalog, settings or order store) failed.
    #[error("collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),
}

impl KioskError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::CollaboratorUnavailable(msg.into())
    }
}

pub type KioskResult<T> = Result<T, KioskError>;
