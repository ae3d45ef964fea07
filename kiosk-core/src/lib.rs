//! Kiosk ordering core
//!
//! Domain engine for a self-service restaurant kiosk: customers compose
//! dishes ingredient by ingredient, accumulate them into an order, and
//! submit it as a WhatsApp message; staff track the order afterwards.
//!
//! # Module structure
//!
//! ```text
//! kiosk-core/src/
//! ├── catalog/     # Catalog/settings collaborators, cache, index
//! ├── composer/    # Dish draft and per-category selection rules
//! ├── pricing/     # Pure dish pricing
//! ├── orders/      # Assembler, lifecycle manager, store, stats
//! ├── session/     # Session state + redb draft persistence
//! ├── messaging/   # Summary rendering and wa.me deep link
//! ├── panel/       # Staff panel polling feed
//! ├── config/      # Environment configuration
//! └── utils/       # Logging, validation
//! ```

pub mod catalog;
pub mod composer;
pub mod config;
pub mod messaging;
pub mod money;
pub mod orders;
pub mod panel;
pub mod pricing;
pub mod session;
pub mod utils;

// Re-export public types
pub use catalog::{CatalogIndex, CatalogProvider, CatalogService, SettingsProvider};
pub use composer::{ConfirmedDish, DishComposer, DishDraft};
pub use config::Config;
pub use orders::{
    MemoryOrderStore, OrderAssembler, OrderLifecycleManager, OrderStats, OrderStore, Submission,
};
pub use panel::PanelFeed;
pub use session::{DraftStorage, KioskSession};

// Re-export unified error types from shared
pub use shared::{KioskError, KioskResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
