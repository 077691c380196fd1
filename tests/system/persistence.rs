//! Durability behavior observed through the facade: snapshots, backups,
//! reloads across controller lifetimes.

use stockroom::{
    Controller, ControllerConfig, FileStore, ItemId, SnapshotFormat, TaskPriority,
};
use tempfile::TempDir;

#[test]
fn test_full_lifecycle_enqueue_drain_save_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");

    {
        let mut ctl = Controller::new(ControllerConfig::new(&path));
        ctl.initialize().unwrap();
        ctl.enqueue_raw("ADD 7 Widget 10 A1", TaskPriority::Normal);
        let report = ctl.process_tasks(0);
        assert_eq!(report.succeeded, 1);
        ctl.save_all().unwrap();
    }

    let mut ctl = Controller::new(ControllerConfig::new(&path));
    ctl.initialize().unwrap();
    let item = ctl.get_item(ItemId(7)).unwrap();
    assert_eq!(item.name, "Widget");
    assert_eq!(item.quantity, 10);
    assert_eq!(item.location, "A1");
}

#[test]
fn test_save_leaves_backup_of_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");

    let mut ctl = Controller::new(ControllerConfig::new(&path));
    ctl.initialize().unwrap();
    ctl.add_item(ItemId(1), "First", 1, "A1").unwrap();
    ctl.save_all().unwrap();

    ctl.add_item(ItemId(2), "Second", 2, "B2").unwrap();
    ctl.save_all().unwrap();

    let backup = std::fs::read_to_string(dir.path().join("inventory.csv.bak")).unwrap();
    assert!(backup.contains("First"));
    assert!(!backup.contains("Second"));

    let live = std::fs::read_to_string(&path).unwrap();
    assert!(live.contains("First"));
    assert!(live.contains("Second"));
}

#[test]
fn test_no_temp_file_survives_a_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");

    let mut ctl = Controller::new(ControllerConfig::new(&path));
    ctl.initialize().unwrap();
    ctl.add_item(ItemId(1), "Widget", 1, "A1").unwrap();
    ctl.save_all().unwrap();

    assert!(path.exists());
    assert!(!dir.path().join("inventory.csv.tmp").exists());
}

#[test]
fn test_corrupt_snapshot_fails_initialize() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    std::fs::write(&path, "id,name,quantity,location\nnot-a-number,X,1,A1\n").unwrap();

    let mut ctl = Controller::new(ControllerConfig::new(&path));
    assert!(ctl.initialize().is_err());
    assert!(ctl.inventory().is_empty());
}

#[test]
fn test_format_mismatch_is_an_error_not_silence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.dat");

    let mut ctl = Controller::new(ControllerConfig::new(&path).format(SnapshotFormat::Json));
    ctl.initialize().unwrap();
    ctl.add_item(ItemId(1), "Widget", 1, "A1").unwrap();
    ctl.save_all().unwrap();

    let mut wrong = Controller::new(ControllerConfig::new(&path).format(SnapshotFormat::Csv));
    assert!(wrong.initialize().is_err());
}

#[test]
fn test_store_checksum_is_stable_across_reads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");

    let mut ctl = Controller::new(ControllerConfig::new(&path));
    ctl.initialize().unwrap();
    ctl.add_item(ItemId(1), "Widget", 1, "A1").unwrap();
    ctl.save_all().unwrap();

    let store = FileStore::new(&path);
    let first = FileStore::compute_checksum(&store.read_all().unwrap());
    let second = FileStore::compute_checksum(&store.read_all().unwrap());
    assert_eq!(first, second);
    assert_eq!(first.len(), 64);
}

#[test]
fn test_many_save_load_cycles_preserve_every_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");

    for round in 1u32..=5 {
        let mut ctl = Controller::new(ControllerConfig::new(&path));
        ctl.initialize().unwrap();
        assert_eq!(ctl.inventory().len(), (round - 1) as usize);

        ctl.add_item(ItemId(round), format!("Item{}", round), round, "A1")
            .unwrap();
        ctl.save_all().unwrap();
    }

    let mut ctl = Controller::new(ControllerConfig::new(&path));
    ctl.initialize().unwrap();
    assert_eq!(ctl.inventory().len(), 5);
    assert_eq!(ctl.inventory().total_quantity(), 1 + 2 + 3 + 4 + 5);
}
