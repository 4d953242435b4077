use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use inventory_core::{ActivityLog, Inventory, InventoryError};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.json", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_save_load_round_trip() {
    let temp = TempFile::new("inventory_round_trip");
    let mut log = ActivityLog::new();
    let mut inventory = Inventory::new();
    inventory.add("pear", 2, Some(&mut log)).expect("add should succeed");
    inventory.add("apple", 10, Some(&mut log)).expect("add should succeed");
    inventory.remove("apple", 3).expect("remove should succeed");

    inventory.save(&temp.path).expect("save should succeed");

    let mut reloaded = Inventory::new();
    reloaded.add("stale", 1, None).expect("add should succeed");
    let count = reloaded.load(&temp.path).expect("load should succeed");

    assert_eq!(count, 2);
    assert_eq!(reloaded, inventory);
    assert_eq!(reloaded.report_lines(), vec!["pear -> 2", "apple -> 7"]);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_saved_file_is_pretty_printed() {
    let temp = TempFile::new("inventory_pretty");
    let mut inventory = Inventory::new();
    inventory.add("apple", 7, None).expect("add should succeed");

    inventory.save(&temp.path).expect("save should succeed");

    let on_disk = fs::read_to_string(&temp.path).expect("read should succeed");
    assert_eq!(on_disk, "{\n    \"apple\": 7\n}");
}

#[test]
fn test_load_missing_file_resets() {
    let temp = TempFile::new("inventory_missing");
    let mut inventory = Inventory::new();
    inventory.add("apple", 7, None).expect("add should succeed");

    let result = inventory.load(&temp.path);

    assert!(matches!(result, Err(InventoryError::NotFound(_))));
    assert!(inventory.is_empty());
}

#[test]
fn test_load_malformed_file_resets() {
    let temp = TempFile::new("inventory_malformed");
    fs::write(&temp.path, "{ this is not json").expect("write should succeed");
    let mut inventory = Inventory::new();
    inventory.add("apple", 7, None).expect("add should succeed");

    let result = inventory.load(&temp.path);

    assert!(matches!(result, Err(InventoryError::Parse(_))));
    assert!(inventory.is_empty());
}

#[test]
fn test_load_wrong_value_types_resets() {
    let temp = TempFile::new("inventory_bad_values");
    fs::write(&temp.path, r#"{"apple": 3, "banana": "ten"}"#).expect("write should succeed");
    let mut inventory = Inventory::new();
    inventory.add("apple", 7, None).expect("add should succeed");

    let result = inventory.load(&temp.path);

    assert!(matches!(result, Err(InventoryError::Validation(_))));
    assert!(inventory.is_empty());
}

#[test]
fn test_load_replaces_rather_than_merges() {
    let temp = TempFile::new("inventory_replace");
    fs::write(&temp.path, r#"{"banana": 10, "apple": 3}"#).expect("write should succeed");
    let mut inventory = Inventory::new();
    inventory.add("kiwi", 4, None).expect("add should succeed");

    inventory.load(&temp.path).expect("load should succeed");

    assert!(inventory.get_qty("kiwi").is_none());
    assert_eq!(inventory.low_stock(5), vec!["apple"]);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir should succeed");
    let path = dir.path().join("nope").join("inventory.json");
    let inventory = Inventory::new();

    let result = inventory.save(&path);

    assert!(matches!(result, Err(InventoryError::Storage(_))));
}

#[test]
fn test_large_file_load_then_readd() {
    let temp = TempFile::new("inventory_large");
    let count = 20_000;
    let body: Vec<String> = (0..count)
        .map(|i| format!("\"sku-{}\": {}", i, i + 1))
        .collect();
    fs::write(&temp.path, format!("{{{}}}", body.join(", "))).expect("write should succeed");

    let mut inventory = Inventory::new();
    let loaded = inventory.load(&temp.path).expect("load should succeed");
    assert_eq!(loaded, count);

    for i in 0..count {
        inventory
            .add(&format!("sku-{}", i), 1, None)
            .expect("add should succeed");
    }

    assert_eq!(inventory.len(), count);
    assert_eq!(inventory.get_qty("sku-0"), Some(2));
    assert_eq!(inventory.get_qty("sku-19999"), Some(20_001));
    assert_eq!(inventory.iter().next().map(|(name, _)| name), Some("sku-0"));
}
