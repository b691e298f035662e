use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::value::AnyValue;

/// One classified element of a variadic order list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LineItem {
    Name(String),
    Quantity(i64),
    PriceAdjustment(f64),
    Options(BTreeMap<String, String>),
    Unrecognized(AnyValue),
}

impl LineItem {
    /// Classify a raw value. Total over `AnyValue`: every input lands in
    /// exactly one variant.
    pub fn classify(value: &AnyValue) -> Self {
        match value {
            AnyValue::Text(text) => LineItem::Name(text.clone()),
            AnyValue::Integer(n) => LineItem::Quantity(*n),
            AnyValue::Decimal(n) => LineItem::PriceAdjustment(*n),
            AnyValue::Map(map) => LineItem::Options(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_string()))
                    .collect(),
            ),
            other => LineItem::Unrecognized(other.clone()),
        }
    }

    /// Amount this item contributes to the order total.
    pub fn price_adjustment(&self) -> f64 {
        match self {
            LineItem::PriceAdjustment(amount) => *amount,
            _ => 0.0,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineItem::Name(text) => write!(f, "- Item: {}", text),
            LineItem::Quantity(n) => write!(f, "- Quantity: {}", n),
            LineItem::PriceAdjustment(amount) => write!(f, "- Price adjustment: ${:.2}", amount),
            LineItem::Options(options) => {
                write!(f, "- Options: {{")?;
                for (i, (key, value)) in options.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            LineItem::Unrecognized(value) => write!(f, "- Unknown item type: {}", value),
        }
    }
}

/// A customer's order: the classified items and their total.
///
/// The total is computed once in [`Order::new`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    customer: String,
    items: Vec<LineItem>,
    total: f64,
}

impl Order {
    pub fn new(customer: impl Into<String>, items: Vec<LineItem>) -> Self {
        let total = items.iter().map(LineItem::price_adjustment).sum();
        Self {
            customer: customer.into(),
            items,
            total,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Product of all quantity tags, 1 when none are present.
    ///
    /// Informational only, the total never uses it.
    pub fn unit_count(&self) -> i64 {
        self.items
            .iter()
            .filter_map(|item| match item {
                LineItem::Quantity(n) => Some(*n),
                _ => None,
            })
            .fold(1i64, i64::saturating_mul)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
