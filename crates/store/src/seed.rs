//! One-shot seed data for a freshly created database.
//!
//! Not idempotent: callers gate it on `PizzaStore::was_created()`, which the
//! server bootstrap checks before the listener starts accepting requests.

use rusqlite::params;
use tracing::info;

use crate::store::{PizzaStore, Result};

struct SeedPizza {
    name: &'static str,
    description: &'static str,
    price: f64,
    vegetarian: bool,
    vegan: bool,
}

struct SeedSpecial {
    name: &'static str,
    description: &'static str,
    base_price: f64,
    vegetarian: bool,
    vegan: bool,
}

const PIZZAS: &[SeedPizza] = &[
    SeedPizza {
        name: "Margherita",
        description: "Tomato, mozzarella, basil",
        price: 12.6,
        vegetarian: true,
        vegan: false,
    },
    SeedPizza {
        name: "Pepperoni",
        description: "Loaded with pepperoni and extra cheese",
        price: 10.5,
        vegetarian: false,
        vegan: false,
    },
    SeedPizza {
        name: "Vegan Garden",
        description: "Grilled vegetables, no dairy",
        price: 11.95,
        vegetarian: true,
        vegan: true,
    },
];

const SPECIALS: &[SeedSpecial] = &[
    SeedSpecial {
        name: "Basic Cheese Pizza",
        description: "It's cheesy and delicious. Why wouldn't you want one?",
        base_price: 9.99,
        vegetarian: true,
        vegan: false,
    },
    SeedSpecial {
        name: "Classic Pepperoni",
        description: "It's the pizza you grew up with, straight from the oven",
        base_price: 10.5,
        vegetarian: false,
        vegan: false,
    },
    SeedSpecial {
        name: "Buffalo Chicken",
        description: "Spicy chicken, hot sauce, and blue cheese",
        base_price: 12.75,
        vegetarian: false,
        vegan: false,
    },
    SeedSpecial {
        name: "Veggie Delight",
        description: "Peppers, onions, mushrooms, and olives",
        base_price: 11.5,
        vegetarian: true,
        vegan: false,
    },
    SeedSpecial {
        name: "Vegan Supreme",
        description: "Everything from the garden, nothing from the barn",
        base_price: 11.95,
        vegetarian: true,
        vegan: true,
    },
    SeedSpecial {
        name: "Margherita Royale",
        description: "San Marzano tomatoes and buffalo mozzarella",
        base_price: 14.5,
        vegetarian: true,
        vegan: false,
    },
];

/// Insert the baseline catalog and specials in a single transaction.
///
/// # Arguments
/// * `store` - A store whose schema was just created
pub fn initialize(store: &mut PizzaStore) -> Result<()> {
    let tx = store.connection().transaction()?;

    for pizza in PIZZAS {
        tx.execute(
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
    }

    for special in SPECIALS {
        tx.execute(
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
    }

    tx.commit()?;

    info!(
        pizzas = PIZZAS.len(),
        specials = SPECIALS.len(),
        "Seeded fresh database"
    );

    Ok(())
}
