#[macro_use]
mod macros;

pub mod cart_client;
pub mod catalog_client;

pub use cart_client::*;
pub use catalog_client::*;
