//! Record types for the pizza catalog and the specials listing.

use serde::{Deserialize, Serialize};

/// A catalog pizza as stored in the `pizzas` table.
///
/// The two dietary flags are independent booleans; nothing cross-validates
/// them (a row may claim `vegan` without `vegetarian`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    /// Row identifier assigned by the store
    pub id: i64,
    /// Display name
    pub name: String,
    /// Menu description
    pub description: String,
    /// Price in the shop currency
    pub price: f64,
    /// Vegetarian flag
    pub vegetarian: bool,
    /// Vegan flag
    pub vegan: bool,
}

/// A special offer as stored in the `specials` table.
///
/// Serialized with camelCase field names, so the listing endpoint emits
/// `basePrice` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaSpecial {
    /// Row identifier assigned by the store
    pub id: i64,
    /// Display name
    pub name: String,
    /// Menu description
    pub description: String,
    /// Price used to order the specials listing
    pub base_price: f64,
    /// Vegetarian flag
    pub vegetarian: bool,
    /// Vegan flag
    pub vegan: bool,
}

/// Insert shape for a catalog pizza (id is assigned by the store).
#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub vegetarian: bool,
    pub vegan: bool,
}

/// Insert shape for a special offer (id is assigned by the store).
#[derive(Debug, Clone)]
pub struct NewSpecial {
    pub name: String,
    pub description: String,
    pub base_price: f64,
    pub vegetarian: bool,
    pub vegan: bool,
}
