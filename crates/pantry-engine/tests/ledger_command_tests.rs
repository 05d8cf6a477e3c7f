#![allow(clippy::unwrap_used, clippy::expect_used)]

use pantry_core::model::NewItem;
use pantry_core::policy::{ClampAtZeroPolicy, RejectNegativePolicy};
use pantry_engine::commands::ledger_command::{
    apply_ledger_command, LedgerCommand, LedgerCommandResult,
};
use pantry_engine::commands::ledger_query::{apply_ledger_query, LedgerQuery, LedgerQueryResult};
use pantry_store::Ledger;

fn setup_ledger() -> Ledger {
    let mut ledger = Ledger::open_in_memory().unwrap();
    ledger.initialize().unwrap();
    ledger
}

fn snapshot(ledger: &Ledger) -> Vec<pantry_core::InventoryItem> {
    match apply_ledger_query(LedgerQuery::Snapshot, ledger).unwrap() {
        LedgerQueryResult::Snapshot(items) => items,
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_add_item_returns_only_the_id() {
    let mut ledger = setup_ledger();

    let result = apply_ledger_command(
        LedgerCommand::AddItem {
            name: "Flour".to_string(),
            quantity: 100,
            reorder_point: 20,
        },
        &mut ledger,
        &RejectNegativePolicy,
    )
    .unwrap();

    let id = match result {
        LedgerCommandResult::ItemAdded { id } => id,
        other => panic!("expected ItemAdded, got {:?}", other),
    };
    let items = snapshot(&ledger);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, id);
}

#[test]
fn test_load_sample_adds_six_rows() {
    let mut ledger = setup_ledger();

    let result =
        apply_ledger_command(LedgerCommand::LoadSample, &mut ledger, &RejectNegativePolicy)
            .unwrap();

    match result {
        LedgerCommandResult::ItemsAdded { ids } => assert_eq!(ids.len(), 6),
        other => panic!("expected ItemsAdded, got {:?}", other),
    }
    let names: Vec<String> = snapshot(&ledger).into_iter().map(|i| i.name).collect();
    assert_eq!(
        names,
        vec![
            "Flour",
            "Sugar",
            "Olive Oil",
            "Canned Tomatoes",
            "Spaghetti",
            "Rice"
        ]
    );
}

#[test]
fn test_add_items_command() {
    let mut ledger = setup_ledger();
    let items = vec![NewItem::new("Oats", 4, 2), NewItem::new("Honey", 1, 1)];

    let result = apply_ledger_command(
        LedgerCommand::AddItems { items },
        &mut ledger,
        &RejectNegativePolicy,
    )
    .unwrap();

    assert!(matches!(result, LedgerCommandResult::ItemsAdded { ref ids } if ids.len() == 2));
}

#[test]
fn test_sell_then_requery_sees_new_quantity() {
    let mut ledger = setup_ledger();
    apply_ledger_command(LedgerCommand::LoadSample, &mut ledger, &RejectNegativePolicy).unwrap();

    let result = apply_ledger_command(
        LedgerCommand::Sell {
            name: "Sugar".to_string(),
            quantity_sold: 45,
        },
        &mut ledger,
        &RejectNegativePolicy,
    )
    .unwrap();
    assert_eq!(result, LedgerCommandResult::Sold { rows_affected: 1 });

    let sugar = snapshot(&ledger)
        .into_iter()
        .find(|i| i.name == "Sugar")
        .unwrap();
    assert_eq!(sugar.quantity, 5);
}

#[test]
fn test_sell_by_id_with_clamp_policy() {
    let mut ledger = setup_ledger();
    let id = ledger.add_item("Olive Oil", 25, 5).unwrap();

    apply_ledger_command(
        LedgerCommand::SellById {
            id,
            quantity_sold: 40,
        },
        &mut ledger,
        &ClampAtZeroPolicy,
    )
    .unwrap();

    assert_eq!(snapshot(&ledger)[0].quantity, 0);
}

#[test]
fn test_rejected_sale_surfaces_error() {
    let mut ledger = setup_ledger();
    ledger.add_item("Rice", 3, 60).unwrap();

    let err = apply_ledger_command(
        LedgerCommand::Sell {
            name: "Rice".to_string(),
            quantity_sold: 4,
        },
        &mut ledger,
        &RejectNegativePolicy,
    )
    .unwrap_err();

    assert_eq!(err.code(), "ERR_INSUFFICIENT_STOCK");
    assert_eq!(snapshot(&ledger)[0].quantity, 3);
}

#[test]
fn test_op_names() {
    assert_eq!(LedgerCommand::LoadSample.op_name(), "load_sample");
    assert_eq!(
        LedgerCommand::SellById {
            id: 1,
            quantity_sold: 1
        }
        .op_name(),
        "sell_by_id"
    );
}
