use super::{Product, ProductId, Stock};

/// A product listed in the in-process catalog, together with its stock level.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub stock: u32,
}

/// Payload for creating a new catalog item.
#[derive(Debug, Clone)]
pub struct NewCatalogItem {
    pub title: String,
    pub price: f64,
    pub image: String,
    pub stock: u32,
}

impl NewCatalogItem {
    pub fn new(title: impl Into<String>, price: f64, image: impl Into<String>, stock: u32) -> Self {
        Self {
            title: title.into(),
            price,
            image: image.into(),
            stock,
        }
    }
}

impl CatalogItem {
    /// The product view handed to the cart. Cart quantity starts at zero.
    pub fn to_product(&self) -> Product {
        Product::new(self.id, self.title.clone(), self.price, self.image.clone())
    }

    pub fn stock_level(&self) -> Stock {
        Stock::new(self.id, self.stock)
    }
}
