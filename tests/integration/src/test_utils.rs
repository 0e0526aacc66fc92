//! Test utilities for workspace integration tests

use std::fs;
use std::path::PathBuf;

use pizzeria_menu::NewSpecial;

/// Test fixture for a database file in the system temp directory.
///
/// Removes any stale file on creation and cleans up on drop, so repeated
/// test runs never observe a previously seeded database.
pub struct TestDb {
    pub path: PathBuf,
}

impl TestDb {
    /// Create a fixture for the named database file
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(name);
        let _ = fs::remove_file(&path);
        Self { path }
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Build an insert shape for a special with the given name and price
pub fn special(name: &str, base_price: f64) -> NewSpecial {
    NewSpecial {
        name: name.to_string(),
        description: format!("{} special", name),
        base_price,
        vegetarian: false,
        vegan: false,
    }
}
