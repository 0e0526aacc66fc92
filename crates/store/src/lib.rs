//! SQLite persistence for the pizzeria demo.
//!
//! This crate provides:
//! - A `PizzaStore` wrapper over a SQLite database file with WAL mode
//! - Schema auto-creation on first open, with first-run detection
//! - Typed queries for the pizza catalog and the specials listing
//! - A one-shot seed loader for freshly created databases

pub mod seed;
pub mod store;

pub use store::{PizzaStore, Result, StoreError};
