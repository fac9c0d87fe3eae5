use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::cart_actor::CartActor;
use crate::clients::{CartClient, CatalogClient};
use crate::domain::{CatalogItem, NewCatalogItem};
use crate::error::ServiceError;
use crate::services::{CartPorts, CartStorage, Notifier};
use crate::storage::load_cart;
use super::CartConfig;

/// Owns the running actors and hands out their clients.
///
/// Built once at startup; consumers receive clones of `cart_client`.
pub struct CartSystem {
    pub cart_client: CartClient,
    pub catalog_client: Option<CatalogClient>,
    handles: Vec<JoinHandle<()>>,
}

impl CartSystem {
    /// Loads the persisted cart and starts the cart actor.
    #[instrument(name = "cart_system", skip(config, ports), fields(key = %config.storage_key))]
    pub async fn start(config: &CartConfig, ports: CartPorts) -> Self {
        info!("Starting cart system");
        let cart = load_cart(ports.storage.as_ref(), &config.storage_key).await;
        let (actor, cart_client) = CartActor::new(config.channel_capacity, cart, ports, config.storage_key.clone());
        let handle = tokio::spawn(actor.run());

        Self {
            cart_client,
            catalog_client: None,
            handles: vec![handle],
        }
    }

    /// Starts an in-process catalog seeded with `items` (ids 1, 2, ... in
    /// order) and a cart actor backed by it.
    pub async fn with_catalog(
        config: &CartConfig,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn Notifier>,
        items: Vec<NewCatalogItem>,
    ) -> Result<Self, ServiceError> {
        let id_counter = Arc::new(AtomicU64::new(1));
        let next_id = move || id_counter.fetch_add(1, Ordering::SeqCst);

        let (catalog_actor, catalog_resource_client) =
            ResourceActor::<CatalogItem>::new(config.channel_capacity, next_id);
        let catalog_client = CatalogClient::new(catalog_resource_client);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        for item in items {
            catalog_client.add_item(item).await?;
        }

        let ports = CartPorts {
            stock: Arc::new(catalog_client.clone()),
            products: Arc::new(catalog_client.clone()),
            storage,
            notifier,
        };
        let mut system = Self::start(config, ports).await;
        system.catalog_client = Some(catalog_client);
        // Cart actor first: it holds catalog clients until it stops.
        system.handles.push(catalog_handle);
        Ok(system)
    }

    /// Closes every channel and waits for the actors to drain.
    ///
    /// Clones of the clients held elsewhere keep their actor alive, so drop
    /// them before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system");
        drop(self.cart_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cart system shutdown complete");
        Ok(())
    }
}
