use tokio::sync::mpsc;
use crate::cart_actor::CartRequest;
use crate::domain::{Cart, ProductId, UpdateProductAmount};

/// Handle to the cart actor. Cheap to clone; every consumer gets its own.
///
/// Each method resolves to the cart after the request was handled. Rejected
/// requests are reported through the notifier, never as an `Err`; an `Err`
/// only means the actor is gone.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }
}

client_method!(CartClient => fn add_product(product_id: ProductId) -> Cart as CartRequest::AddProduct);
client_method!(CartClient => fn remove_product(product_id: ProductId) -> Cart as CartRequest::RemoveProduct);
client_method!(CartClient => fn update_product_amount(update: UpdateProductAmount) -> Cart as CartRequest::UpdateProductAmount);
client_method!(CartClient => fn cart() -> Cart as CartRequest::GetCart);
