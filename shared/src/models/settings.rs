//! App settings model
//!
//! Feature toggles, category configuration and the outbound message
//! target, owned by the external settings store.

use super::category::CategoryConfig;
use serde::{Deserialize, Serialize};

/// Store-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    pub app_name: String,
    /// International number without '+' (e.g. "5491126830760")
    pub whatsapp_number: String,
    pub delivery_enabled: bool,
    pub eat_in_enabled: bool,
    /// Display order of categories in the kiosk
    #[serde(default)]
    pub category_order: Vec<String>,
    /// Selection rule per category; unlisted categories use the standard
    /// multi-select rule
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "Restaurante Nicolasa".to_string(),
            whatsapp_number: "5491126830760".to_string(),
            delivery_enabled: true,
            eat_in_enabled: true,
            category_order: Vec::new(),
            categories: Vec::new(),
        }
    }
}
