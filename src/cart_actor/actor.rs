use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::CartClient;
use crate::domain::{Cart, ProductId, UpdateProductAmount};
use crate::services::CartPorts;
use super::error::{CartError, CartOperation, PRODUCT_ADDED_MESSAGE};
use super::messages::{CartRequest, CartResponse};

/// What a successful request did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CartChange {
    Added,
    Removed,
    AmountUpdated,
    Unchanged,
}

/// Sole owner of the cart.
///
/// Requests are handled one at a time, remote lookups included, so a
/// read-modify-write can never interleave with another request.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    ports: CartPorts,
    storage_key: String,
}

impl CartActor {
    pub fn new(
        buffer_size: usize,
        cart: Cart,
        ports: CartPorts,
        storage_key: impl Into<String>,
    ) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            cart,
            ports,
            storage_key: storage_key.into(),
        };
        (actor, CartClient::new(sender))
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.cart.len(), "CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct { product_id, respond_to } => {
                    self.handle_add_product(product_id, respond_to).await;
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    self.handle_remove_product(product_id, respond_to).await;
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    self.handle_update_product_amount(update, respond_to).await;
                }
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(self.cart.clone());
                }
            }
        }
        info!("CartService stopped");
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_add_product(&mut self, product_id: ProductId, respond_to: CartResponse) {
        debug!("Processing add_product request");
        let result = self.add_product(product_id).await;
        self.settle(CartOperation::Add, result).await;
        let _ = respond_to.send(self.cart.clone());
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_remove_product(&mut self, product_id: ProductId, respond_to: CartResponse) {
        debug!("Processing remove_product request");
        let result = self.remove_product(product_id);
        self.settle(CartOperation::Remove, result).await;
        let _ = respond_to.send(self.cart.clone());
    }

    #[instrument(fields(product_id = update.product_id, amount = update.amount), skip(self, update, respond_to))]
    async fn handle_update_product_amount(&mut self, update: UpdateProductAmount, respond_to: CartResponse) {
        debug!("Processing update_product_amount request");
        let result = self.update_product_amount(update).await;
        self.settle(CartOperation::UpdateAmount, result).await;
        let _ = respond_to.send(self.cart.clone());
    }

    async fn add_product(&mut self, product_id: ProductId) -> Result<CartChange, CartError> {
        let lookup_failed = |source| CartError::Lookup { operation: CartOperation::Add, source };

        let in_cart = self.cart.get(product_id).map(|product| product.amount);
        let stock = self.ports.stock.stock(product_id).await.map_err(lookup_failed)?;

        if let Some(amount) = in_cart {
            if stock.amount <= amount {
                return Err(CartError::StockExceeded {
                    product_id,
                    requested: i64::from(amount) + 1,
                    available: stock.amount,
                });
            }
            self.cart.increment(product_id);
            return Ok(CartChange::Added);
        }

        let product = self.ports.products.product(product_id).await.map_err(lookup_failed)?;
        if stock.amount == 0 {
            // No notification for this case.
            debug!("Product is out of stock, nothing added");
            return Ok(CartChange::Unchanged);
        }

        // Cart entries are keyed by the requested id.
        let mut product = product.with_amount(1);
        product.id = product_id;
        self.cart.push(product);
        Ok(CartChange::Added)
    }

    fn remove_product(&mut self, product_id: ProductId) -> Result<CartChange, CartError> {
        match self.cart.remove(product_id) {
            Some(_) => Ok(CartChange::Removed),
            None => Err(CartError::NotInCart { operation: CartOperation::Remove, product_id }),
        }
    }

    async fn update_product_amount(&mut self, update: UpdateProductAmount) -> Result<CartChange, CartError> {
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            return Err(CartError::InvalidAmount { product_id, amount });
        }

        let stock = self.ports.stock.stock(product_id).await
            .map_err(|source| CartError::Lookup { operation: CartOperation::UpdateAmount, source })?;

        if amount > i64::from(stock.amount) {
            return Err(CartError::StockExceeded { product_id, requested: amount, available: stock.amount });
        }

        // In range 1..=stock.amount at this point.
        let amount = u32::try_from(amount).map_err(|_| CartError::InvalidAmount { product_id, amount })?;
        if !self.cart.set_amount(product_id, amount) {
            return Err(CartError::NotInCart { operation: CartOperation::UpdateAmount, product_id });
        }
        Ok(CartChange::AmountUpdated)
    }

    /// Persists successful mutations and reports the outcome to the user.
    async fn settle(&self, operation: CartOperation, result: Result<CartChange, CartError>) {
        match result {
            Ok(CartChange::Unchanged) => {}
            Ok(change) => {
                info!(?change, products = self.cart.len(), items = self.cart.total_items(), "Cart updated");
                self.persist().await;
                if change == CartChange::Added {
                    self.ports.notifier.success(PRODUCT_ADDED_MESSAGE);
                }
            }
            Err(e) => {
                warn!(%operation, error = %e, "Cart request rejected");
                self.ports.notifier.error(e.user_message());
            }
        }
    }

    /// Writes the whole cart. A failed write leaves the in-memory cart as is.
    async fn persist(&self) {
        let encoded = match self.cart.to_json() {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(error = %e, "Failed to encode cart");
                return;
            }
        };
        if let Err(e) = self.ports.storage.write(&self.storage_key, encoded).await {
            error!(error = %e, key = %self.storage_key, "Failed to persist cart");
        }
    }
}
