use std::fmt;
use thiserror::Error;
use crate::domain::ProductId;
use crate::error::ServiceError;

/// The three cart mutations, used to pick the user-facing failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::Add => "Failed to add product",
            CartOperation::Remove => "Failed to remove product",
            CartOperation::UpdateAmount => "Failed to update product quantity",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add product"),
            CartOperation::Remove => write!(f, "remove product"),
            CartOperation::UpdateAmount => write!(f, "update product amount"),
        }
    }
}

pub const STOCK_EXCEEDED_MESSAGE: &str = "Requested quantity is out of stock";
pub const PRODUCT_ADDED_MESSAGE: &str = "Product added to cart";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    StockExceeded { product_id: ProductId, requested: i64, available: u32 },
    #[error("Cannot {operation}: product {product_id} is not in the cart")]
    NotInCart { operation: CartOperation, product_id: ProductId },
    #[error("Invalid amount {amount} for product {product_id}")]
    InvalidAmount { product_id: ProductId, amount: i64 },
    #[error("Cannot {operation}: {source}")]
    Lookup { operation: CartOperation, source: ServiceError },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// Short message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::StockExceeded { .. } => STOCK_EXCEEDED_MESSAGE,
            CartError::NotInCart { operation, .. } | CartError::Lookup { operation, .. } => {
                operation.failure_message()
            }
            CartError::InvalidAmount { .. } => CartOperation::UpdateAmount.failure_message(),
            CartError::ActorCommunicationError(_) => "Cart is unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_follow_operation() {
        let not_in_cart = CartError::NotInCart { operation: CartOperation::Remove, product_id: 4 };
        assert_eq!(not_in_cart.user_message(), "Failed to remove product");

        let invalid = CartError::InvalidAmount { product_id: 4, amount: 0 };
        assert_eq!(invalid.user_message(), "Failed to update product quantity");

        let lookup = CartError::Lookup {
            operation: CartOperation::Add,
            source: ServiceError::Request("timed out".to_string()),
        };
        assert_eq!(lookup.user_message(), "Failed to add product");
        assert_eq!(lookup.to_string(), "Cannot add product: Catalog request failed: timed out");
    }
}
