pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

pub use anyhow::{Error, Result};
pub use models::{AnyValue, LineItem, Order};
pub use services::{aggregate_order, max_numeric, sum_numeric, NumericError};

/// Build an order from a variadic argument list.
///
/// ```
/// let (lines, order) = coffee_orders::order!("Marcus", "Latte", 2, 5.50);
/// assert_eq!(lines[2], "- Price adjustment: $5.50");
/// assert_eq!(order.total(), 5.50);
/// ```
#[macro_export]
macro_rules! order {
    ($customer:expr $(, $item:expr)* $(,)?) => {
        $crate::services::order_service::aggregate_order(
            $customer,
            &[$($crate::models::value::AnyValue::from($item)),*],
        )
    };
}

/// Sum a variadic list of numbers, failing on the first non-number.
///
/// ```
/// assert_eq!(coffee_orders::sum!(10, 20.5, 30), Ok(60.5));
/// ```
#[macro_export]
macro_rules! sum {
    ($($value:expr),* $(,)?) => {
        $crate::services::pricing_service::sum_numeric(
            &[$($crate::models::value::AnyValue::from($value)),*],
        )
    };
}
