use anyhow::Result;
use clap::Parser;
use coffee_orders::{
    cli::{Args, CliApp},
    utils::ShopConfig,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ShopConfig::from_file(path)?,
        None => ShopConfig::from_env()?,
    };

    let level = if args.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("☕ {} ready ({} environment)", config.store_name, config.environment);

    let app = CliApp::new(config);
    app.run(args.command)
}
