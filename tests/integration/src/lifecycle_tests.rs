//! Seed/query lifecycle tests across process-restart boundaries

use pizzeria_menu::PizzaService;
use pizzeria_store::{seed, PizzaStore};

use crate::test_utils::{special, TestDb};

/// Simulates the server bootstrap: open, seed when freshly created.
fn boot(db: &TestDb) -> PizzaStore {
    let mut store = PizzaStore::open(&db.path).unwrap();
    if store.was_created() {
        seed::initialize(&mut store).unwrap();
    }
    store
}

#[test]
fn first_boot_seeds_both_tables() {
    let db = TestDb::new("it_first_boot_seeds.db");

    let store = boot(&db);
    assert!(store.was_created());
    assert!(store.pizza_count().unwrap() > 0);
    assert!(store.special_count().unwrap() > 0);
}

#[test]
fn second_boot_does_not_duplicate_rows() {
    let db = TestDb::new("it_second_boot_no_dupes.db");

    let (pizzas, specials) = {
        let store = boot(&db);
        (store.pizza_count().unwrap(), store.special_count().unwrap())
    };

    // Second "process start" against the same file
    let store = boot(&db);
    assert!(!store.was_created());
    assert_eq!(store.pizza_count().unwrap(), pizzas);
    assert_eq!(store.special_count().unwrap(), specials);
}

#[test]
fn specials_listing_is_price_descending_with_stable_ties() {
    let db = TestDb::new("it_specials_ordering.db");

    let store = PizzaStore::open(&db.path).unwrap();
    store.add_special(&special("Cheap", 8.99)).unwrap();
    store.add_special(&special("Dear", 14.50)).unwrap();
    store.add_special(&special("Tie A", 10.00)).unwrap();
    store.add_special(&special("Tie B", 10.00)).unwrap();

    let listing = store.specials_by_price_desc().unwrap();
    let names: Vec<&str> = listing.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Dear", "Tie A", "Tie B", "Cheap"]);

    for pair in listing.windows(2) {
        assert!(pair[0].base_price >= pair[1].base_price);
    }
}

#[test]
fn seeded_listing_survives_reopen() {
    let db = TestDb::new("it_listing_survives_reopen.db");

    let expected: Vec<String> = {
        let store = boot(&db);
        store
            .specials_by_price_desc()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect()
    };

    let store = boot(&db);
    let actual: Vec<String> = store
        .specials_by_price_desc()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn placeholder_provider_is_fixed_and_disconnected() {
    let db = TestDb::new("it_provider_disconnected.db");
    let store = boot(&db);

    let provider = PizzaService::new();
    let pizzas = provider.pizzas().await;

    // Fixed single-item output regardless of what the database holds
    assert_eq!(pizzas.len(), 1);
    assert_eq!(pizzas[0].name, "Margherita");
    assert_eq!(pizzas[0].price, 12.6);
    assert_ne!(store.pizza_count().unwrap(), 1);
}
