use std::io::Write;

use coffee_orders::{
    models::default_supplies,
    services::{InventoryService, InventoryServiceError},
    utils::ShopConfig,
};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_config_from_file() {
    let file = write_temp(
        "STORE_NAME=\"Harbor Roasters\"\nCURRENCY_SYMBOL=€\nLOW_STOCK_THRESHOLD=3\n",
    );

    let config = ShopConfig::from_file(file.path()).unwrap();
    assert_eq!(config.store_name, "Harbor Roasters");
    assert_eq!(config.currency_symbol, "€");
    assert_eq!(config.low_stock_threshold, 3);
    assert_eq!(config.default_customer, "Guest");
}

#[test]
fn test_config_from_file_with_bad_value() {
    let file = write_temp("LOW_STOCK_THRESHOLD=-2\n");
    assert!(ShopConfig::from_file(file.path()).is_err());
}

#[test]
fn test_config_missing_file() {
    assert!(ShopConfig::from_file("/definitely/not/here.env").is_err());
}

#[test]
fn test_default_supply_report() {
    let service = InventoryService::new(10);
    let report = service.report(&default_supplies()).unwrap();

    assert_eq!(report.items.len(), 5);
    assert_eq!(report.total_units, 395);
    assert_eq!(
        report.low_stock,
        vec!["Oat milk".to_string(), "Vanilla syrup".to_string()]
    );
}

#[test]
fn test_supply_file_round_trip_through_service() {
    let file = write_temp(
        r#"[
            {"name": "Decaf beans", "quantity": 1, "unit": "kg", "unit_cost": 21.0},
            {"name": "Lids", "quantity": 500, "unit": "lids", "unit_cost": 0.02}
        ]"#,
    );
    let contents = std::fs::read_to_string(file.path()).unwrap();

    let service = InventoryService::new(5);
    let items = service.parse_supplies(&contents).unwrap();
    let report = service.report(&items).unwrap();

    assert!((report.total_value - 31.0).abs() < 1e-9);
    assert_eq!(report.low_stock, vec!["Decaf beans".to_string()]);
}

#[test]
fn test_supply_file_with_invalid_unit() {
    let service = InventoryService::new(5);
    let items = service
        .parse_supplies(r#"[{"name": "Milk", "quantity": 1, "unit": "L", "unit_cost": 1.0}]"#)
        .unwrap();

    assert!(matches!(
        service.report(&items),
        Err(InventoryServiceError::ValidationError { .. })
    ));
}
