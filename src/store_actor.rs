use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::Product;
use crate::inventory::{Inventory, InventoryError, ProductDraft};

// =============================================================================
// 1. THE MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, InventoryError>>;

#[derive(Debug)]
pub enum InventoryRequest {
    Add {
        draft: ProductDraft,
        respond_to: Response<Product>,
    },
    Remove {
        id: i64,
        respond_to: Response<Product>,
    },
    UpdateQuantity {
        id: i64,
        quantity: i64,
        respond_to: Response<Product>,
    },
    List {
        respond_to: Response<Vec<Product>>,
    },
    TotalValue {
        respond_to: Response<f64>,
    },
}

// =============================================================================
// 2. THE ACTOR
// =============================================================================

/// Task that owns the [`Inventory`] and serializes all access to it.
pub struct StoreActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl StoreActor {
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            inventory: Inventory::new(),
        };
        let client = InventoryClient { sender };
        (actor, client)
    }

    /// Runs until every client handle is dropped.
    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::Add { draft, respond_to } => {
                    let _ = respond_to.send(self.inventory.add(draft));
                }
                InventoryRequest::Remove { id, respond_to } => {
                    let _ = respond_to.send(self.inventory.remove(id));
                }
                InventoryRequest::UpdateQuantity {
                    id,
                    quantity,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.inventory.update_quantity(id, quantity));
                }
                InventoryRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.products().to_vec()));
                }
                InventoryRequest::TotalValue { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.total_value()));
                }
            }
        }
    }
}

// =============================================================================
// 3. THE CLIENT
// =============================================================================

/// Handle for sending requests to the store actor.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    #[instrument(skip(self))]
    pub async fn add(&self, draft: ProductDraft) -> Result<Product, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::Add { draft, respond_to })
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<Product, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::Remove { id, respond_to })
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: i64, quantity: i64) -> Result<Product, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::UpdateQuantity {
                id,
                quantity,
                respond_to,
            })
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::List { respond_to })
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn total_value(&self) -> Result<f64, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InventoryRequest::TotalValue { respond_to })
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| InventoryError::ActorUnavailable("Actor dropped".to_string()))?
    }
}

// =============================================================================
// 4. TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: i64, name: &str, quantity: i64, price: f64) -> ProductDraft {
        ProductDraft {
            id,
            name: name.to_string(),
            quantity,
            price,
        }
    }

    #[tokio::test]
    async fn client_round_trip() {
        let (actor, client) = StoreActor::new(10);
        tokio::spawn(actor.run());

        let product = client.add(draft(1, "Keyboard", 4, 50.0)).await.unwrap();
        assert_eq!(product.name, "Keyboard");
        client.add(draft(2, "Mouse", 2, 20.0)).await.unwrap();

        let listed = client.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, 1);
        assert_eq!(listed[1].id, 2);

        let updated = client.update_quantity(1, 10).await.unwrap();
        assert_eq!(updated.quantity, 10);

        let removed = client.remove(2).await.unwrap();
        assert_eq!(removed.name, "Mouse");

        let total = client.total_value().await.unwrap();
        assert_eq!(total, 500.0);
    }

    #[tokio::test]
    async fn domain_errors_pass_through() {
        let (actor, client) = StoreActor::new(10);
        tokio::spawn(actor.run());

        client.add(draft(1, "Keyboard", 4, 50.0)).await.unwrap();
        assert_eq!(
            client.add(draft(1, "Mouse", 2, 20.0)).await.unwrap_err(),
            InventoryError::AlreadyExists(1)
        );
        assert_eq!(
            client.remove(99).await.unwrap_err(),
            InventoryError::NotFound(99)
        );
        assert_eq!(
            client.update_quantity(1, -5).await.unwrap_err(),
            InventoryError::InvalidQuantity(-5)
        );
    }

    #[tokio::test]
    async fn requests_fail_once_actor_is_gone() {
        let (actor, client) = StoreActor::new(10);
        drop(actor);

        let err = client.list().await.unwrap_err();
        assert!(matches!(err, InventoryError::ActorUnavailable(_)));
    }
}
