use std::io;

use storefront_hex::config::Config;
use storefront_hex::inbound::console::{ConsoleMenu, MenuConfig};
use storefront_repo::build_catalog;

fn main() -> anyhow::Result<()> {
    // Load .env for SHOP_* / RUST_LOG when present.
    let _ = dotenvy::dotenv();
    // Logs go to stderr; stdout belongs to the menu.
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    let catalog = build_catalog()?;
    let menu_cfg = MenuConfig::from(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    ConsoleMenu::new(catalog, menu_cfg, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
