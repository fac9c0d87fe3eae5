use tokio::sync::oneshot;
use crate::domain::{Cart, ProductId, UpdateProductAmount};

/// Every request answers with the cart as it stands once the request has
/// been handled, whether or not it changed anything.
pub type CartResponse = oneshot::Sender<Cart>;

#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: CartResponse,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: CartResponse,
    },
    UpdateProductAmount {
        update: UpdateProductAmount,
        respond_to: CartResponse,
    },
    GetCart {
        respond_to: CartResponse,
    },
}
