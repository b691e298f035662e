use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::{error, info, warn};

use crate::{
    cli::args::*,
    models::{supply::default_supplies, value::AnyValue},
    services::{max_numeric, sum_numeric, InventoryService, OrderService},
    utils::{
        config::ShopConfig,
        formatting::{format_lines, format_money, format_receipt, format_supply_summary, format_supply_table},
        parsing::{parse_value, parse_values},
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static COFFEE: Emoji<'_, '_> = Emoji("☕ ", "");

pub struct CliApp {
    config: ShopConfig,
    order_service: OrderService,
    inventory_service: InventoryService,
}

impl CliApp {
    pub fn new(config: ShopConfig) -> Self {
        let inventory_service = InventoryService::new(config.low_stock_threshold);
        let order_service = OrderService::new(config.clone());

        Self {
            config,
            order_service,
            inventory_service,
        }
    }

    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Order { customer, json, items } => self.handle_order(&customer, &items, json),
            Commands::Sum { values } => self.handle_sum(&values),
            Commands::Max { values } => self.handle_max(&values),
            Commands::Supplies { file, json } => self.handle_supplies(file, json),
            Commands::Interactive => self.handle_interactive(),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_order(&self, customer: &str, raw_items: &[String], json: bool) -> Result<()> {
        let items = parse_values(raw_items);
        self.print_order(customer, &items, json)
    }

    fn print_order(&self, customer: &str, items: &[AnyValue], json: bool) -> Result<()> {
        let receipt = self.order_service.place_order(customer, items);

        if json {
            let rendered = serde_json::to_string_pretty(&receipt)
                .context("Failed to serialize receipt")?;
            println!("{}", rendered);
            return Ok(());
        }

        println!("{}", format_receipt(&receipt));
        if receipt.unrecognized_items > 0 {
            println!(
                "{} {} item(s) could not be classified",
                WARNING, receipt.unrecognized_items
            );
        }
        Ok(())
    }

    fn handle_sum(&self, raw_values: &[String]) -> Result<()> {
        let values = parse_values(raw_values);
        match sum_numeric(&values) {
            Ok(total) => {
                println!(
                    "{} Sum: {}",
                    CHECKMARK,
                    style(format_money(&self.config.currency_symbol, total)).green()
                );
                Ok(())
            }
            Err(e) => {
                println!("{} {}", CROSS, style(&e).red());
                error!("Sum failed: {}", e);
                Err(e).context("Could not sum values")
            }
        }
    }

    fn handle_max(&self, raw_values: &[String]) -> Result<()> {
        let values = parse_values(raw_values);
        match max_numeric(&values) {
            Ok(Some(max)) => {
                println!(
                    "{} Max: {}",
                    CHECKMARK,
                    style(format_money(&self.config.currency_symbol, max)).green()
                );
                Ok(())
            }
            Ok(None) => {
                println!("{} No values given", WARNING);
                Ok(())
            }
            Err(e) => {
                println!("{} {}", CROSS, style(&e).red());
                error!("Max failed: {}", e);
                Err(e).context("Could not find the largest value")
            }
        }
    }

    fn handle_supplies(&self, file: Option<String>, json: bool) -> Result<()> {
        let items = match file {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read supply file {}", path))?;
                self.inventory_service.parse_supplies(&contents)?
            }
            None => default_supplies(),
        };

        let report = self.inventory_service.report(&items)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{} {}", COFFEE, style(format!("{} supplies", self.config.store_name)).bold().cyan());
        let table = format_supply_table(&report, &self.config.currency_symbol);
        if table.is_empty() {
            println!("{} No supplies on record", WARNING);
        } else {
            println!("{}", table);
        }
        print!("{}", format_supply_summary(&report, &self.config.currency_symbol));
        Ok(())
    }

    fn handle_interactive(&self) -> Result<()> {
        println!("{} {}", COFFEE, style(format!("Welcome to {}", self.config.store_name)).bold().cyan());

        let theme = ColorfulTheme::default();

        let customer: String = Input::with_theme(&theme)
            .with_prompt("Customer name")
            .allow_empty(true)
            .interact_text()?;

        println!(
            "{}",
            style("Enter items one per line (name, quantity, price, key=value options). Empty line to finish.").dim()
        );

        let mut items = Vec::new();
        loop {
            let raw: String = Input::with_theme(&theme)
                .with_prompt(format!("Item {}", items.len() + 1))
                .allow_empty(true)
                .interact_text()?;
            if raw.trim().is_empty() {
                break;
            }
            let value = parse_value(&raw);
            let (lines, _) = self.order_service.aggregate(&customer, std::slice::from_ref(&value));
            println!("  {}", style(format_lines(&lines).trim_end()).dim());
            items.push(value);
        }

        if items.is_empty() {
            warn!("Interactive order finished without items");
        }

        let confirmed = Confirm::with_theme(&theme)
            .with_prompt("Print receipt?")
            .default(true)
            .interact()?;
        if !confirmed {
            println!("{} Order discarded", WARNING);
            return Ok(());
        }

        self.print_order(&customer, &items, false)?;
        info!("Interactive order completed with {} items", items.len());
        Ok(())
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {
                println!("{}: {}", style("Store name").bold(), style(&self.config.store_name).green());
                println!("{}: {}", style("Currency").bold(), self.config.currency_symbol);
                println!("{}: {}", style("Default customer").bold(), self.config.default_customer);
                println!("{}: {}", style("Low stock threshold").bold(), self.config.low_stock_threshold);
                println!("{}: {}", style("Log level").bold(), self.config.log_level);
                println!("{}: {}", style("Environment").bold(), self.config.environment);
                Ok(())
            }
        }
    }
}
