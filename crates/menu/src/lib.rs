//! Domain types for the pizzeria demo.
//!
//! This crate provides the record shapes shared by the persistent store and
//! the HTTP service, plus the in-memory placeholder menu provider.

pub mod model;
pub mod provider;

pub use model::{NewPizza, NewSpecial, Pizza, PizzaSpecial};
pub use provider::PizzaService;
