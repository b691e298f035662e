use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

use crate::models::supply::{SupplyItem, SupplyReport};

#[derive(Error, Debug)]
pub enum InventoryServiceError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Failed to read supply list: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub struct InventoryService {
    low_stock_threshold: u32,
}

impl InventoryService {
    pub fn new(low_stock_threshold: u32) -> Self {
        Self { low_stock_threshold }
    }

    /// Parse a JSON array of supply items.
    pub fn parse_supplies(&self, json: &str) -> Result<Vec<SupplyItem>, InventoryServiceError> {
        let items: Vec<SupplyItem> = serde_json::from_str(json)?;
        Ok(items)
    }

    /// Validate the stock list and total it up.
    pub fn report(&self, items: &[SupplyItem]) -> Result<SupplyReport, InventoryServiceError> {
        for item in items {
            item.validate()
                .map_err(|e| InventoryServiceError::ValidationError {
                    message: format!("Supply '{}' is invalid: {}", item.name, e),
                })?;
        }

        let total_units = items.iter().map(|item| u64::from(item.quantity)).sum();
        let total_value = items.iter().map(SupplyItem::stock_value).sum();
        let low_stock: Vec<String> = items
            .iter()
            .filter(|item| item.is_low(self.low_stock_threshold))
            .map(|item| item.name.clone())
            .collect();

        for name in &low_stock {
            warn!("Low stock: {}", name);
        }
        info!(
            "Supply report: {} items, {} units, value {:.2}",
            items.len(),
            total_units,
            total_value
        );

        Ok(SupplyReport {
            items: items.to_vec(),
            total_units,
            total_value,
            low_stock,
            low_stock_threshold: self.low_stock_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals_and_low_stock() {
        let service = InventoryService::new(5);
        let items = vec![
            SupplyItem::new("Beans", 4, "kg", 10.0),
            SupplyItem::new("Cups", 100, "cups", 0.1),
        ];

        let report = service.report(&items).unwrap();
        assert_eq!(report.total_units, 104);
        assert!((report.total_value - 50.0).abs() < 1e-9);
        assert_eq!(report.low_stock, vec!["Beans".to_string()]);
    }

    #[test]
    fn test_report_rejects_invalid_item() {
        let service = InventoryService::new(5);
        let items = vec![SupplyItem::new("", 1, "kg", 1.0)];

        let result = service.report(&items);
        assert!(matches!(
            result,
            Err(InventoryServiceError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_parse_supplies_json() {
        let service = InventoryService::new(5);
        let items = service
            .parse_supplies(r#"[{"name": "Oat milk", "quantity": 2, "unit": "l", "unit_cost": 2.4}]"#)
            .unwrap();
        assert_eq!(items, vec![SupplyItem::new("Oat milk", 2, "l", 2.4)]);
    }

    #[test]
    fn test_parse_supplies_bad_json() {
        let service = InventoryService::new(5);
        assert!(matches!(
            service.parse_supplies("not json"),
            Err(InventoryServiceError::ParseError(_))
        ));
    }
}
