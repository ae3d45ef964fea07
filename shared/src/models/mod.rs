//! Domain models

pub mod category;
pub mod order;
pub mod product;
pub mod settings;

pub use category::{CategoryConfig, CategoryRule, RuleBook};
pub use order::{
    CustomerInfo, DishRecord, IngredientLine, NewOrder, OrderPatch, OrderStatus, OrderType,
    PaymentMethod, PersistedOrder, StatusFilter,
};
pub use product::{Product, ProductId};
pub use settings::AppSettings;
