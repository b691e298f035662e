use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    models::{
        order::{LineItem, Order},
        value::AnyValue,
    },
    utils::config::ShopConfig,
};

/// Classify every item and build the order.
///
/// Returns the per-item breakdown lines in input order together with the
/// order. Never fails; the input is only borrowed.
pub fn aggregate_order(customer: &str, items: &[AnyValue]) -> (Vec<String>, Order) {
    let line_items: Vec<LineItem> = items.iter().map(LineItem::classify).collect();
    let lines = line_items.iter().map(ToString::to_string).collect();
    let order = Order::new(customer, line_items);

    debug!(
        "Aggregated {} items for '{}' with total {:.2}",
        order.items().len(),
        customer,
        order.total()
    );
    (lines, order)
}

/// Printable summary of an order, stamped with the shop details.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub store_name: String,
    pub currency_symbol: String,
    pub customer: String,
    pub lines: Vec<String>,
    pub unit_count: i64,
    pub total: f64,
    pub unrecognized_items: usize,
    pub issued_at: DateTime<Utc>,
}

pub struct OrderService {
    config: ShopConfig,
}

impl OrderService {
    pub fn new(config: ShopConfig) -> Self {
        Self { config }
    }

    pub fn aggregate(&self, customer: &str, items: &[AnyValue]) -> (Vec<String>, Order) {
        info!("Aggregating order for '{}' with {} items", customer, items.len());
        aggregate_order(customer, items)
    }

    /// Aggregate the items and wrap the result in a receipt.
    pub fn place_order(&self, customer: &str, items: &[AnyValue]) -> Receipt {
        let (lines, order) = self.aggregate(customer, items);
        self.receipt_for(lines, &order)
    }

    pub fn receipt_for(&self, lines: Vec<String>, order: &Order) -> Receipt {
        let unrecognized_items = order
            .items()
            .iter()
            .filter(|item| matches!(item, LineItem::Unrecognized(_)))
            .count();
        if unrecognized_items > 0 {
            info!(
                "Order for '{}' carries {} unrecognized items",
                order.customer(),
                unrecognized_items
            );
        }

        Receipt {
            store_name: self.config.store_name.clone(),
            currency_symbol: self.config.currency_symbol.clone(),
            customer: self.config.customer_or_default(order.customer()).to_string(),
            lines,
            unit_count: order.unit_count(),
            total: order.total(),
            unrecognized_items,
            issued_at: Utc::now(),
        }
    }
}
