//! Durable cart storage backends and the startup load.

pub mod file;
pub mod memory;

pub use file::*;
#[allow(unused_imports)]
pub use memory::*;

use tracing::{info, instrument, warn};
use crate::domain::Cart;
use crate::services::CartStorage;

/// Reads the persisted cart stored under `key`.
///
/// An absent value gives an empty cart. So does a value that cannot be read
/// or decoded; the failure is logged.
#[instrument(skip(storage))]
pub async fn load_cart(storage: &dyn CartStorage, key: &str) -> Cart {
    let stored = match storage.read(key).await {
        Ok(Some(stored)) => stored,
        Ok(None) => {
            info!("No stored cart, starting empty");
            return Cart::new();
        }
        Err(e) => {
            warn!(error = %e, "Failed to read stored cart, starting empty");
            return Cart::new();
        }
    };

    match Cart::from_json(&stored) {
        Ok(cart) => {
            info!(products = cart.len(), "Stored cart loaded");
            cart
        }
        Err(e) => {
            warn!(error = %e, "Stored cart is not decodable, starting empty");
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn load_cart_handles_absent_valid_and_corrupt_values() {
        let storage = MemoryStorage::new();
        assert!(load_cart(&storage, "cart").await.is_empty());

        let cart = Cart::from(vec![Product::new(1, "Tenis", 10.0, "img").with_amount(2)]);
        storage.write("cart", cart.to_json().unwrap()).await.unwrap();
        assert_eq!(load_cart(&storage, "cart").await, cart);

        let repeated = r#"[{"id":1,"title":"Tenis","price":10.0,"image":"img","amount":0},{"id":1,"title":"Tenis","price":10.0,"image":"img","amount":2}]"#;
        storage.write("cart", repeated.to_string()).await.unwrap();
        assert_eq!(load_cart(&storage, "cart").await, cart);

        storage.write("cart", "{oops".to_string()).await.unwrap();
        assert!(load_cart(&storage, "cart").await.is_empty());
    }
}
