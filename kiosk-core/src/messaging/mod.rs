//! Outbound messaging
//!
//! The core's responsibility ends at producing the summary text and the
//! wa.me target; delivery happens in the customer's messaging app.

mod summary;
mod whatsapp;

pub use summary::SummaryRenderer;
pub use whatsapp::whatsapp_link;
