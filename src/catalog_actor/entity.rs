use crate::actor_framework::Entity;
use crate::domain::{CatalogItem, NewCatalogItem, ProductId};
use super::actions::{CatalogAction, CatalogActionResult};

impl Entity for CatalogItem {
    type Id = ProductId;
    type CreateParams = NewCatalogItem;
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;

    fn id(&self) -> &ProductId { &self.id }

    fn from_create_params(id: ProductId, params: NewCatalogItem) -> Result<Self, String> {
        Ok(Self {
            id,
            title: params.title,
            price: params.price,
            image: params.image,
            stock: params.stock,
        })
    }

    /// Rejects items without a title or with a negative price.
    fn on_create(&mut self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Product title required".to_string());
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(format!("Invalid price: {}", self.price));
        }
        Ok(())
    }

    fn handle_action(&mut self, action: CatalogAction) -> Result<CatalogActionResult, String> {
        match action {
            CatalogAction::CheckStock => {}
            CatalogAction::SetStock(amount) => self.stock = amount,
        }
        Ok(CatalogActionResult::StockLevel(self.stock_level()))
    }
}
