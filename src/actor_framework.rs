use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks and actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Validation hook run before the entity is stored.
    fn on_create(&mut self) -> Result<(), String> { Ok(()) }

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client has been dropped.
    pub async fn run(mut self) {
        let entity = std::any::type_name::<T>();
        info!(entity, "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(%id, "Processing get request");
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(%id, ?action, "Processing action request");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(entity, items = self.store.len(), "ResourceActor stopped");
    }

    fn create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Rejected)?;
        if let Err(e) = item.on_create() {
            warn!(%id, error = %e, "Create rejected by entity hook");
            return Err(FrameworkError::Rejected(e));
        }
        self.store.insert(item.id().clone(), item);
        debug!(%id, "Item created");
        Ok(id)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { params, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Action { id, action, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u64,
        label: String,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
        Read,
    }

    impl Entity for Counter {
        type Id = u64;
        type CreateParams = CounterCreate;
        type Action = CounterAction;
        type ActionResult = i64;

        fn id(&self) -> &u64 { &self.id }

        fn from_create_params(id: u64, params: CounterCreate) -> Result<Self, String> {
            Ok(Self { id, label: params.label, value: 0 })
        }

        fn on_create(&mut self) -> Result<(), String> {
            if self.label.is_empty() {
                return Err("label required".to_string());
            }
            Ok(())
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<i64, String> {
            match action {
                CounterAction::Add(n) if self.value + n < 0 => Err("would go negative".to_string()),
                CounterAction::Add(n) => {
                    self.value += n;
                    Ok(self.value)
                }
                CounterAction::Read => Ok(self.value),
            }
        }
    }

    fn spawn_counters() -> ResourceClient<Counter> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = spawn_counters();

        let id = client.create(CounterCreate { label: "visits".into() }).await.unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, CounterAction::Add(5)).await, Ok(5));
        assert_eq!(
            client.perform_action(id, CounterAction::Add(-9)).await,
            Err(FrameworkError::Rejected("would go negative".to_string()))
        );
        assert_eq!(client.perform_action(id, CounterAction::Read).await, Ok(5));

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.value, 5);
    }

    #[tokio::test]
    async fn test_create_hook_and_missing_items() {
        let client = spawn_counters();

        let rejected = client.create(CounterCreate { label: String::new() }).await;
        assert_eq!(rejected, Err(FrameworkError::Rejected("label required".to_string())));

        assert_eq!(client.get(42).await, Ok(None));
        assert_eq!(
            client.perform_action(42, CounterAction::Read).await,
            Err(FrameworkError::NotFound("42".to_string()))
        );
    }
}
