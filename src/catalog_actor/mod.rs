//! In-process product catalog, including stock level actions.

mod actions;
pub mod entity;

pub use actions::*;
