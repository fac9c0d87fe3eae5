//! The cart store: a single actor owning the cart, its messages and errors.

mod actor;
pub mod error;
pub mod messages;

pub use actor::*;
pub use error::*;
pub use messages::*;
