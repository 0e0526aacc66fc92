//! Pizza store engine over SQLite.
//!
//! Each `PizzaStore` owns one connection to the database file. The schema
//! is created on first open; `was_created` records whether this open is the
//! one that created it, which is what gates the seed loader.
//!
//! # Guarantees
//!
//! - Row ids are assigned by SQLite in insert order
//! - The specials listing is totally ordered by base price descending,
//!   with ties resolved in original insert order
//! - Durability: WAL journal mode with NORMAL synchronous writes

use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use pizzeria_menu::{NewPizza, NewSpecial, Pizza, PizzaSpecial};

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// SQLite-backed store for the pizza catalog and the specials listing
pub struct PizzaStore {
    /// SQLite database connection
    conn: Connection,
    /// Whether this open created the schema (fresh database)
    was_created: bool,
}

impl PizzaStore {
    /// Create or open the store at the specified path.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(PizzaStore)` - Successfully opened store
    /// * `Err(StoreError)` - Failed to open or initialize database
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Enable WAL mode for better concurrency and durability
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        // A fresh database has no `specials` table yet; check before the
        // schema is created so the seed gate fires exactly once per file.
        let was_created = !Self::schema_exists(&conn)?;

        Self::init_schema(&conn)?;

        info!(
            path = %path.display(),
            created = was_created,
            "Opened pizza store"
        );

        Ok(Self { conn, was_created })
    }

    /// Whether this open created the schema. Seeding is gated on this.
    pub fn was_created(&self) -> bool {
        self.was_created
    }

    fn schema_exists(conn: &Connection) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'specials'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Initialize database schema
    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS pizzas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                vegetarian INTEGER NOT NULL DEFAULT 0,
                vegan INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS specials (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                base_price REAL NOT NULL,
                vegetarian INTEGER NOT NULL DEFAULT 0,
                vegan INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_specials_base_price ON specials(base_price);
            "#,
        )?;

        Ok(())
    }

    /// Insert a catalog pizza, returning the assigned row id.
    pub fn add_pizza(&self, pizza: &NewPizza) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO pizzas (name, description, price, vegetarian, vegan)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                pizza.name,
                pizza.description,
                pizza.price,
                pizza.vegetarian,
                pizza.vegan
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a special offer, returning the assigned row id.
    pub fn add_special(&self, special: &NewSpecial) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO specials (name, description, base_price, vegetarian, vegan)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                special.name,
                special.description,
                special.base_price,
                special.vegetarian,
                special.vegan
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All specials, ordered by base price descending.
    ///
    /// Ties are resolved by ascending id, which equals the original insert
    /// order, so equal-priced rows keep a stable relative order.
    pub fn specials_by_price_desc(&self) -> Result<Vec<PizzaSpecial>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, base_price, vegetarian, vegan
             FROM specials
             ORDER BY base_price DESC, id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PizzaSpecial {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                base_price: row.get(3)?,
                vegetarian: row.get(4)?,
                vegan: row.get(5)?,
            })
        })?;

        let mut specials = Vec::new();
        for row in rows {
            specials.push(row?);
        }
        Ok(specials)
    }

    /// Full pizza catalog in insert order.
    pub fn pizzas(&self) -> Result<Vec<Pizza>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, price, vegetarian, vegan
             FROM pizzas
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Pizza {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                price: row.get(3)?,
                vegetarian: row.get(4)?,
                vegan: row.get(5)?,
            })
        })?;

        let mut pizzas = Vec::new();
        for row in rows {
            pizzas.push(row?);
        }
        Ok(pizzas)
    }

    /// Number of rows in the pizzas table.
    pub fn pizza_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM pizzas", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of rows in the specials table.
    pub fn special_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM specials", [], |row| row.get(0))?;
        Ok(count)
    }

    pub(crate) fn connection(&mut self) -> &mut Connection {
        &mut self.conn
    }
}
