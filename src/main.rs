mod domain;
mod inventory;
mod menu;
mod store_actor;

mod app_system;

#[cfg(test)]
mod integration_tests;

use tokio::io::BufReader;
use tracing::info;

use crate::app_system::{setup_tracing, InventorySystem};
use crate::menu::run_menu;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting inventory management system");

    let system = InventorySystem::new();

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    run_menu(&system.inventory_client, &mut input, &mut output)
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Session ended");
    Ok(())
}
