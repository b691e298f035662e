use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "coffee")]
#[command(about = "Build coffee-shop orders and receipts from loosely typed item lists")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (.env format)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate an order from mixed items (names, quantities, prices, key=value options)
    Order {
        /// Customer name
        #[arg(short = 'C', long, default_value = "")]
        customer: String,
        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
        /// Order items, e.g. Latte 2 5.50 milk=oat
        #[arg(allow_hyphen_values = true)]
        items: Vec<String>,
    },
    /// Sum a list of numbers
    Sum {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Find the largest of a list of numbers
    Max {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Show the supply (inventory) report
    Supplies {
        /// JSON file with the supply list
        #[arg(short, long)]
        file: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Take an order interactively
    Interactive,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
}
