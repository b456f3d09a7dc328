use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Item entity - a single catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the store on creation
    pub id: i64,
    /// Item name (unique, case-insensitive)
    pub name: String,
    /// Item description
    pub description: String,
    /// Item price, strictly positive
    pub price: f64,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
}

/// DTO for replacing an item's mutable fields.
///
/// Updates take the same shape as creates: all three fields are
/// overwritten unconditionally.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
}

/// Query parameters for searching items by name
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct SearchQuery {
    /// Substring matched against item names, case-insensitive
    pub q: String,
}

/// Parameters for the bulk discount operation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkDiscount {
    /// Only items priced strictly above this threshold are discounted
    pub threshold_price: f64,
    /// Discount percentage, e.g. 10.0 means 10% off
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percent: f64,
}

/// Result of a bulk discount run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiscountApplied {
    /// Number of items whose price was reduced
    pub updated: u64,
}

impl Item {
    /// Apply a full-field update from an UpdateItem DTO
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
    }

    /// Price after a percentage discount, rounded to cents
    pub fn discounted_price(&self, percent: f64) -> f64 {
        round_to_cents(self.price * (1.0 - percent / 100.0))
    }
}

/// Round to two decimal places, ties away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
