use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::{
    models::supply::SupplyReport,
    services::order_service::Receipt,
};

#[derive(Tabled)]
struct SupplyTableRow {
    #[tabled(rename = "Supply")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Unit Cost")]
    unit_cost: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Stock")]
    stock: String,
}

pub fn format_money(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// The plain breakdown, one line per item.
pub fn format_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn format_receipt(receipt: &Receipt) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", style(&receipt.store_name).bold().cyan()));
    output.push_str(&format!(
        "{}: {}\n",
        style("Customer").bold(),
        style(&receipt.customer).green()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Date").bold(),
        style(format_date(&receipt.issued_at)).dim()
    ));

    if receipt.lines.is_empty() {
        output.push_str(&format!("{}\n", style("(no items)").dim()));
    } else {
        for line in &receipt.lines {
            if line.starts_with("- Unknown") {
                output.push_str(&format!("{}\n", style(line).yellow()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
    }

    output.push_str(&format!("{}: {}\n", style("Units").bold(), receipt.unit_count));
    output.push_str(&format!(
        "{}: {}\n",
        style("Total").bold(),
        style(format_money(&receipt.currency_symbol, receipt.total)).green().bold()
    ));

    output
}

pub fn format_supply_table(report: &SupplyReport, currency_symbol: &str) -> String {
    if report.items.is_empty() {
        return String::new();
    }

    let rows: Vec<SupplyTableRow> = report
        .items
        .iter()
        .map(|item| SupplyTableRow {
            name: if item.name.len() > 30 {
                format!("{}...", item.name.chars().take(27).collect::<String>())
            } else {
                item.name.clone()
            },
            quantity: format!("{} {}", item.quantity, item.unit),
            unit_cost: format_money(currency_symbol, item.unit_cost),
            value: format_money(currency_symbol, item.stock_value()),
            stock: if item.is_low(report.low_stock_threshold) {
                style("Low").red().to_string()
            } else {
                style("OK").green().to_string()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left())
        .modify(Columns::new(2..4), Alignment::right());

    table.to_string()
}

pub fn format_supply_summary(report: &SupplyReport, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}: {}\n",
        style("Total units").bold(),
        report.total_units
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Stock value").bold(),
        style(format_money(currency_symbol, report.total_value)).green()
    ));
    if !report.low_stock.is_empty() {
        output.push_str(&format!(
            "{}: {}\n",
            style("Reorder").bold(),
            style(report.low_stock.join(", ")).red()
        ));
    }
    output
}
