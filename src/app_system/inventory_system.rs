use tracing::{error, info};

use crate::store_actor::{InventoryClient, StoreActor};

/// The main application system that owns the store actor.
///
/// Responsible for starting the actor, handing out its client, and joining
/// the task on shutdown.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    pub fn new() -> Self {
        let (actor, inventory_client) = StoreActor::new(32);
        let handle = tokio::spawn(actor.run());
        Self {
            inventory_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The actor exits once its request channel closes.
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Store actor task failed: {:?}", e);
            return Err(format!("Store actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
