//! Operator-style scenarios: mixed immediate and deferred work against
//! one controller.

use stockroom::{
    Controller, ControllerConfig, ItemId, LogReporter, TaskPriority,
};
use tempfile::TempDir;

fn fresh(dir: &TempDir) -> Controller {
    let mut ctl = Controller::new(ControllerConfig::new(dir.path().join("inventory.csv")));
    ctl.initialize().unwrap();
    ctl
}

#[test]
fn test_receiving_day() {
    let dir = TempDir::new().unwrap();
    let mut ctl = fresh(&dir);

    // A truck arrives: queue the manifest, urgent lines first.
    ctl.enqueue_raw("ADD 101 Pallet-Jack 2 Dock1", TaskPriority::High);
    ctl.enqueue_raw(r#"ADD 102 "Shrink Wrap" 480 "Aisle 12""#, TaskPriority::Normal);
    ctl.enqueue_raw("ADD 103 Labels 10000 Office", TaskPriority::Normal);
    ctl.enqueue_raw("LIST 0 50", TaskPriority::Low);

    let report = ctl.process_tasks(0);
    assert_eq!(report.dispatched, 4);
    assert_eq!(report.failed, 0);
    assert_eq!(ctl.inventory().len(), 3);
    assert_eq!(ctl.inventory().total_quantity(), 2 + 480 + 10_000);
}

#[test]
fn test_case_insensitive_commands() {
    let dir = TempDir::new().unwrap();
    let mut ctl = fresh(&dir);

    ctl.enqueue_raw("add 1 Widget 5 A1", TaskPriority::Normal);
    ctl.enqueue_raw("Search 1", TaskPriority::Normal);
    ctl.enqueue_raw("ReMoVe 1", TaskPriority::Low);

    let report = ctl.process_tasks(0);
    assert_eq!(report.succeeded, 3);
    assert!(ctl.inventory().is_empty());
}

#[test]
fn test_batch_survives_bad_lines() {
    let dir = TempDir::new().unwrap();
    let mut ctl = fresh(&dir);

    ctl.enqueue_raw("ADD 1 Widget 5 A1", TaskPriority::Normal);
    ctl.enqueue_raw("SHIP 1", TaskPriority::Normal); // unregistered
    ctl.enqueue_raw("REMOVE 404", TaskPriority::Normal); // missing id
    ctl.enqueue_raw("ADD 2 Bolt 9 B2", TaskPriority::Normal);

    let report = ctl.process_tasks(0);
    assert_eq!(report.dispatched, 4);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 2);
    assert_eq!(ctl.inventory().len(), 2);
}

#[test]
fn test_reporter_injection_does_not_change_semantics() {
    let dir = TempDir::new().unwrap();
    let mut ctl = Controller::with_reporter(
        ControllerConfig::new(dir.path().join("inventory.csv")),
        Box::new(LogReporter),
    );
    ctl.initialize().unwrap();

    ctl.enqueue_raw("ADD 1 Widget 5 A1", TaskPriority::Normal);
    ctl.enqueue_raw("LIST", TaskPriority::Normal);
    let report = ctl.process_tasks(0);

    assert_eq!(report.succeeded, 2);
    assert_eq!(ctl.get_item(ItemId(1)).unwrap().quantity, 5);
}

#[test]
fn test_inventory_queries_via_facade() {
    let dir = TempDir::new().unwrap();
    let mut ctl = fresh(&dir);

    ctl.add_item(ItemId(1), "Widget", 5, "A1").unwrap();
    ctl.add_item(ItemId(2), "Bolt", 50, "A1").unwrap();
    ctl.add_item(ItemId(3), "Widget Pro", 2, "B2").unwrap();

    assert_eq!(ctl.inventory().filter_by_location("A1").len(), 2);
    assert_eq!(ctl.inventory().search_by_name("widget").len(), 2);
    assert_eq!(ctl.inventory().filter_by_quantity(5, 50).len(), 2);

    let page = ctl.list_items(0, 2);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, ItemId(1));
    let page = ctl.list_items(1, 2);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, ItemId(3));
}
