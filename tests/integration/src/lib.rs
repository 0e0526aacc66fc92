//! Integration tests for the pizzeria workspace
//!
//! This test suite validates:
//! - Seed-once semantics across repeated opens of the same database file
//! - The specials ordering contract end to end through the store
//! - The placeholder provider's fixed-output property

pub mod test_utils;

#[cfg(test)]
mod lifecycle_tests;
