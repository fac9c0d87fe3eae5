use serde::{Deserialize, Serialize};
use super::ProductId;

/// Remotely reported availability for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

impl Stock {
    pub fn new(id: ProductId, amount: u32) -> Self {
        Self { id, amount }
    }
}
