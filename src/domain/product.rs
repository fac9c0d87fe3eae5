use serde::{Deserialize, Serialize};

/// Identifier shared by catalog products, stock records and cart entries.
pub type ProductId = u64;

/// A product as held in the cart.
///
/// The same shape is returned by the product service, where `amount` is
/// usually absent and decodes to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub amount: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            amount: 0,
        }
    }

    /// Returns the product with its cart quantity replaced.
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// Payload for `update_product_amount`.
///
/// `amount` is signed because callers may ask for zero or negative
/// quantities, which are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}
