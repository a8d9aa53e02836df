use std::io;

use anyhow::Context;

use stockbook_cli::{Config, Console, CurrencyFormatter, seed};
use stockbook_inventory::{InventoryManager, catalog};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    stockbook_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let mut inventory = InventoryManager::new();
    let products = seed::load(&config.seed)?;
    let seeded = catalog::seed(&mut inventory, products).context("failed to seed inventory")?;
    tracing::info!(count = seeded, "inventory ready");

    let mut console = Console::new(
        io::stdin().lock(),
        io::stdout().lock(),
        inventory,
        CurrencyFormatter::new(config.currency_symbol),
    );
    console.run().context("console I/O failed")?;

    Ok(())
}
