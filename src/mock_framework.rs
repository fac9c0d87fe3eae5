//! # Mock Framework
//!
//! Utilities for testing clients and the cart actor in isolation.
//!
//! Use [`create_mock_client`] to get a resource client and a receiver, then
//! helpers like [`expect_get`] or [`expect_action`] to assert what it sends.
//! Use [`cart_harness`] to run a real cart actor against a fixed stock table,
//! in-memory storage and a [`RecordingNotifier`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use mockall::mock;
use tokio::sync::{mpsc, oneshot};
use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::cart_actor::CartActor;
use crate::clients::CartClient;
use crate::domain::{Cart, Product, ProductId, Stock};
use crate::error::{ServiceError, StorageError};
use crate::services::{CartPorts, CartStorage, Notifier, ProductService, StockService};
use crate::storage::MemoryStorage;

pub const HARNESS_KEY: &str = "@RocketShoes:cart";

// =============================================================================
// Resource client mocks
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

// =============================================================================
// Service mocks
// =============================================================================

mock! {
    pub Catalog {}

    #[async_trait]
    impl StockService for Catalog {
        async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
    }

    #[async_trait]
    impl ProductService for Catalog {
        async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl CartStorage for Storage {
        async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
        async fn write(&self, key: &str, value: String) -> Result<(), StorageError>;
    }
}

/// Product fixture. The catalog mocks answer with `shoe(id, 0)`.
pub fn shoe(id: ProductId, amount: u32) -> Product {
    Product::new(id, format!("Shoe {id}"), 100.0, format!("https://cdn/{id}.jpg")).with_amount(amount)
}

/// A catalog whose stock levels come from `levels`. Ids missing from the
/// table fail both lookups with `NotFound`.
pub fn stock_table(levels: &[(ProductId, u32)]) -> MockCatalog {
    let levels: HashMap<ProductId, u32> = levels.iter().copied().collect();
    let known = levels.clone();

    let mut catalog = MockCatalog::new();
    catalog.expect_stock().returning(move |id| {
        levels.get(&id).map(|amount| Stock::new(id, *amount)).ok_or(ServiceError::NotFound(id))
    });
    catalog.expect_product().returning(move |id| {
        if known.contains_key(&id) { Ok(shoe(id, 0)) } else { Err(ServiceError::NotFound(id)) }
    });
    catalog
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Notifier that keeps every message for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Returns and clears the recorded notifications.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.messages.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(Notification::Error(message.to_string()));
    }
}

// =============================================================================
// Cart harness
// =============================================================================

pub struct CartHarness {
    pub client: CartClient,
    pub storage: MemoryStorage,
    pub notifier: RecordingNotifier,
}

impl CartHarness {
    /// The cart as last persisted, if anything was written.
    pub async fn persisted(&self) -> Option<Cart> {
        self.storage
            .read(HARNESS_KEY)
            .await
            .unwrap()
            .map(|stored| Cart::from_json(&stored).unwrap())
    }
}

/// Spawns a cart actor starting from `cart` with stock from `levels`.
pub fn cart_harness(cart: Cart, levels: &[(ProductId, u32)]) -> CartHarness {
    let catalog = Arc::new(stock_table(levels));
    let storage = MemoryStorage::new();
    let notifier = RecordingNotifier::default();
    let ports = CartPorts {
        stock: catalog.clone(),
        products: catalog,
        storage: Arc::new(storage.clone()),
        notifier: Arc::new(notifier.clone()),
    };

    let (actor, client) = CartActor::new(16, cart, ports, HARNESS_KEY);
    tokio::spawn(actor.run());

    CartHarness { client, storage, notifier }
}
