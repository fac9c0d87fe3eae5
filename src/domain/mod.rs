pub mod product;
pub mod stock;
pub mod cart;
pub mod catalog_item;

pub use product::*;
pub use stock::*;
pub use cart::*;
pub use catalog_item::*;
