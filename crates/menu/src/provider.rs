//! Placeholder in-memory menu provider.
//!
//! A stub data source kept for future expansion: it returns a fixed
//! single-element list and is not wired to the persistent store or the
//! API routes. Recreated on every process start, discarded on shutdown.

use crate::model::Pizza;

/// In-memory stand-in for a real menu backend.
#[derive(Debug, Default, Clone)]
pub struct PizzaService;

impl PizzaService {
    /// Create a new provider. Stateless.
    pub fn new() -> Self {
        Self
    }

    /// Return the fixed demo menu: exactly one Margherita at 12.6.
    pub async fn pizzas(&self) -> Vec<Pizza> {
        vec![Pizza {
            id: 1,
            name: "Margherita".to_string(),
            description: "Very delicious".to_string(),
            price: 12.6,
            vegetarian: false,
            vegan: false,
        }]
    }
}
