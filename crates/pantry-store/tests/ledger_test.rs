// Integration tests for the Ledger handle

use pantry_core::model::{InventoryItem, NewItem};
use pantry_core::policy::{PermissivePolicy, RejectNegativePolicy};
use pantry_core::sample_batch;
use pantry_store::Ledger;
use tempfile::TempDir;

fn setup_ledger() -> Ledger {
    let mut ledger = Ledger::open_in_memory().unwrap();
    ledger.initialize().unwrap();
    ledger
}

#[test]
fn test_initialize_twice_is_harmless() {
    let mut ledger = setup_ledger();
    ledger.add_item("Flour", 100, 20).unwrap();

    assert!(ledger.initialize().is_ok());

    let tables: i64 = ledger
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='inventory'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
    assert_eq!(ledger.load_all().unwrap().len(), 1);
}

#[test]
fn test_load_all_on_empty_table() {
    let ledger = setup_ledger();
    assert!(ledger.load_all().unwrap().is_empty());
}

#[test]
fn test_add_item_round_trip_with_increasing_ids() {
    let mut ledger = setup_ledger();
    let inputs = [("Flour", 100, 20), ("Sugar", 50, 10), ("Flour", 3, 20)];

    let ids: Vec<i64> = inputs
        .iter()
        .map(|(n, q, r)| ledger.add_item(n, *q, *r).unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must increase");

    let items = ledger.load_all().unwrap();
    let expected: Vec<InventoryItem> = inputs
        .iter()
        .zip(&ids)
        .map(|((n, q, r), id)| InventoryItem::new(*id, *n, *q, *r))
        .collect();
    assert_eq!(items, expected);
}

#[test]
fn test_add_item_rejects_invalid_input() {
    let mut ledger = setup_ledger();

    let err = ledger.add_item("Flour", -1, 0).unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_INPUT");
    assert_eq!(err.op(), Some("add_item"));

    assert!(ledger.add_item("Flour", 1, -1).is_err());
    assert!(ledger.load_all().unwrap().is_empty());
}

#[test]
fn test_blank_name_round_trips() {
    let mut ledger = setup_ledger();

    let id = ledger.add_item("", 0, 0).unwrap();
    assert_eq!(
        ledger.load_all().unwrap(),
        vec![InventoryItem::new(id, "", 0, 0)]
    );
}

#[test]
fn test_sample_batch_round_trip() {
    let mut ledger = setup_ledger();
    let batch = sample_batch();

    let ids = ledger.add_items(&batch).unwrap();
    assert_eq!(ids.len(), 6);

    let items = ledger.load_all().unwrap();
    let loaded: Vec<NewItem> = items
        .iter()
        .map(|i| NewItem::new(i.name.clone(), i.quantity, i.reorder_point))
        .collect();
    assert_eq!(loaded, batch);
    assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), ids);
}

#[test]
fn test_add_items_is_all_or_nothing() {
    let mut ledger = setup_ledger();
    let batch = vec![NewItem::new("Flour", 1, 1), NewItem::new("Bad", -5, 1)];

    assert!(ledger.add_items(&batch).is_err());
    assert!(ledger.load_all().unwrap().is_empty());

    assert!(ledger.add_items(&[]).unwrap().is_empty());
}

#[test]
fn test_sell_decrements_every_matching_row() {
    let mut ledger = setup_ledger();
    ledger.add_item("Rice", 300, 60).unwrap();
    ledger.add_item("Sugar", 50, 10).unwrap();
    ledger.add_item("Rice", 40, 60).unwrap();

    let affected = ledger.sell("Rice", 25, &RejectNegativePolicy).unwrap();
    assert_eq!(affected, 2);

    let quantities: Vec<(String, i64)> = ledger
        .load_all()
        .unwrap()
        .into_iter()
        .map(|i| (i.name, i.quantity))
        .collect();
    assert_eq!(
        quantities,
        vec![
            ("Rice".to_string(), 275),
            ("Sugar".to_string(), 50),
            ("Rice".to_string(), 15),
        ]
    );
}

#[test]
fn test_sell_unknown_name_is_noop() {
    let mut ledger = setup_ledger();
    ledger.add_items(&sample_batch()).unwrap();
    let before = ledger.load_all().unwrap();

    let affected = ledger.sell("Saffron", 5, &RejectNegativePolicy).unwrap();

    assert_eq!(affected, 0);
    assert_eq!(ledger.load_all().unwrap(), before);
}

#[test]
fn test_sell_by_id_touches_one_row() {
    let mut ledger = setup_ledger();
    let first = ledger.add_item("Rice", 300, 60).unwrap();
    let second = ledger.add_item("Rice", 40, 60).unwrap();

    assert_eq!(ledger.sell_by_id(second, 10, &RejectNegativePolicy).unwrap(), 1);
    assert_eq!(ledger.sell_by_id(9_999, 10, &RejectNegativePolicy).unwrap(), 0);

    assert_eq!(ledger.find_item(first).unwrap().unwrap().quantity, 300);
    assert_eq!(ledger.find_item(second).unwrap().unwrap().quantity, 30);
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pantry_inventory.db");

    {
        let mut ledger = Ledger::open(&path).unwrap();
        ledger.initialize().unwrap();
        ledger.add_item("Spaghetti", 200, 50).unwrap();
        ledger.close().unwrap();
    }

    let mut ledger = Ledger::open(&path).unwrap();
    ledger.initialize().unwrap();
    let items = ledger.load_all().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Spaghetti");
}

#[test]
fn test_load_before_initialize_is_storage_error() {
    let ledger = Ledger::open_in_memory().unwrap();
    let err = ledger.load_all().unwrap_err();
    assert_eq!(err.code(), "ERR_PERSISTENCE");
}

#[test]
fn test_from_connection_wraps_existing_database() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let mut ledger = Ledger::from_connection(conn);
    ledger.initialize().unwrap();

    let id = ledger.add_item("Honey", 4, 2).unwrap();
    assert_eq!(
        ledger.find_item(id).unwrap(),
        Some(InventoryItem::new(id, "Honey", 4, 2))
    );
}

#[test]
fn test_negative_row_does_not_block_other_sales() {
    let mut ledger = setup_ledger();
    let oil = ledger.add_item("Oil", 1, 0).unwrap();
    ledger.sell_by_id(oil, 3, &PermissivePolicy).unwrap();

    assert_eq!(ledger.sell("Oil", 0, &RejectNegativePolicy).unwrap(), 1);
    assert_eq!(ledger.find_item(oil).unwrap().unwrap().quantity, -2);

    let err = ledger.sell("Oil", 1, &RejectNegativePolicy).unwrap_err();
    assert_eq!(err.code(), "ERR_INSUFFICIENT_STOCK");
    assert_eq!(ledger.find_item(oil).unwrap().unwrap().quantity, -2);
}

#[test]
fn test_null_quantity_survives_sales() {
    let mut ledger = setup_ledger();
    ledger
        .connection()
        .execute(
            "INSERT INTO inventory (item_name, quantity, reorder_point) VALUES ('Salt', NULL, 5)",
            [],
        )
        .unwrap();
    let salt = ledger.load_all().unwrap()[0].id;

    assert_eq!(ledger.sell("Salt", 2, &PermissivePolicy).unwrap(), 0);
    assert_eq!(ledger.sell_by_id(salt, 2, &RejectNegativePolicy).unwrap(), 0);

    let is_null: bool = ledger
        .connection()
        .query_row(
            "SELECT quantity IS NULL FROM inventory WHERE id = ?1",
            [salt],
            |row| row.get(0),
        )
        .unwrap();
    assert!(is_null);
    assert_eq!(ledger.load_all().unwrap()[0].quantity, 0);
}
