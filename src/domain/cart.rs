use serde::{Deserialize, Serialize};
use super::{Product, ProductId};

/// Ordered list of products selected by the user.
///
/// Insertion order is preserved, ids are unique and every amount is at least
/// one. The serialized form is a plain JSON array of products, which is what
/// gets persisted. Decoding goes through `From<Vec<Product>>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a product that is not yet in the cart.
    ///
    /// Returns `false` and leaves the cart untouched if the id is already
    /// present.
    pub fn push(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.products.push(product);
        true
    }

    /// Increments the quantity of `id` by one. Returns the new amount.
    pub fn increment(&mut self, id: ProductId) -> Option<u32> {
        let product = self.products.iter_mut().find(|product| product.id == id)?;
        product.amount += 1;
        Some(product.amount)
    }

    pub fn set_amount(&mut self, id: ProductId, amount: u32) -> bool {
        match self.products.iter_mut().find(|product| product.id == id) {
            Some(product) => {
                product.amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|product| product.id == id)?;
        Some(self.products.remove(index))
    }

    /// Number of units across all entries.
    pub fn total_items(&self) -> u32 {
        self.products.iter().map(|product| product.amount).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.products.iter().map(Product::subtotal).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(value: &str) -> serde_json::Result<Self> {
        serde_json::from_str(value)
    }
}

impl From<Vec<Product>> for Cart {
    /// Builds a cart from a list. Entries with a zero amount are dropped and
    /// the first remaining entry wins for repeated ids.
    fn from(products: Vec<Product>) -> Self {
        let mut cart = Cart::new();
        for product in products.into_iter().filter(|product| product.amount > 0) {
            cart.push(product);
        }
        cart
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.products
    }
}
