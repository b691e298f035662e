use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SupplyItem {
    #[validate(length(min = 1, max = 50, message = "Supply name must be 1-50 characters"))]
    #[validate(custom = "validate_supply_name")]
    pub name: String,

    pub quantity: u32,

    #[validate(regex(
        path = "UNIT_REGEX",
        message = "Unit must be a short lowercase word such as 'kg' or 'cups'"
    ))]
    pub unit: String,

    #[validate(range(min = 0.0, message = "Unit cost cannot be negative"))]
    pub unit_cost: f64,
}

lazy_static::lazy_static! {
    static ref UNIT_REGEX: Regex = Regex::new(r"^[a-z]{1,12}$").unwrap();
}

fn validate_supply_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("supply_name_blank"));
    }
    Ok(())
}

impl SupplyItem {
    pub fn new(name: &str, quantity: u32, unit: &str, unit_cost: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            unit_cost,
        }
    }

    pub fn stock_value(&self) -> f64 {
        self.unit_cost * f64::from(self.quantity)
    }

    pub fn is_low(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }
}

/// The stock the shop opens with when no supply file is given.
pub fn default_supplies() -> Vec<SupplyItem> {
    vec![
        SupplyItem::new("Espresso beans", 12, "kg", 18.5),
        SupplyItem::new("Whole milk", 24, "l", 1.2),
        SupplyItem::new("Oat milk", 6, "l", 2.4),
        SupplyItem::new("Paper cups", 350, "cups", 0.08),
        SupplyItem::new("Vanilla syrup", 3, "bottles", 7.0),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplyReport {
    pub items: Vec<SupplyItem>,
    pub total_units: u64,
    pub total_value: f64,
    pub low_stock: Vec<String>,
    pub low_stock_threshold: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_supply_item() {
        let item = SupplyItem::new("Espresso beans", 10, "kg", 18.5);
        assert!(item.validate().is_ok());
        assert_eq!(item.stock_value(), 185.0);
    }

    #[test]
    fn test_invalid_unit_rejected() {
        let item = SupplyItem::new("Milk", 10, "Litres!", 1.0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let item = SupplyItem::new("Milk", 10, "l", -1.0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let item = SupplyItem::new("   ", 10, "l", 1.0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_default_supplies_are_valid() {
        assert!(default_supplies().iter().all(|item| item.validate().is_ok()));
    }
}
